use crate::css::FontSize;

/// Font sizes of user agent stylesheet, applied when no author declaration matches.
///
/// see details: https://html.spec.whatwg.org/multipage/rendering.html#phrasing-content-3
pub fn default_font_size(tag: &str) -> Option<FontSize> {
    let size = match tag {
        "h1" => FontSize::Em(2.0),
        "h2" => FontSize::Em(1.5),
        "h3" => FontSize::Em(1.17),
        "h4" => FontSize::Em(1.0),
        "h5" => FontSize::Em(0.83),
        "h6" => FontSize::Em(0.67),
        "small" | "sub" | "sup" => FontSize::Smaller,
        "big" => FontSize::Larger,
        _ => return None,
    };
    Some(size)
}
