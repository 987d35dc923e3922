use scraper::ElementRef;

use crate::css::{Css, Declarations, FontSize, InlineStyle, LineHeight};

/// Position of declaration in cascade, greater wins.
/// Importance goes first, then inline style over stylesheets, then specificity and source order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Precedence {
    important: bool,
    inline: bool,
    specificity: u32,
    order: usize,
}

impl Precedence {
    const INLINE: Precedence = Precedence {
        important: false,
        inline: true,
        specificity: 0,
        order: 0,
    };

    const INLINE_IMPORTANT: Precedence = Precedence {
        important: true,
        inline: true,
        specificity: 0,
        order: 0,
    };
}

/// Finds the winning font size declaration of element.
pub fn cascade_font_size(
    css: &Css,
    element: ElementRef,
    inline: Option<&InlineStyle>,
) -> Option<FontSize> {
    cascade(css, element, inline, |declarations| declarations.font_size)
}

/// Finds the winning line height declaration of element.
pub fn cascade_line_height(
    css: &Css,
    element: ElementRef,
    inline: Option<&InlineStyle>,
) -> Option<LineHeight> {
    cascade(css, element, inline, |declarations| declarations.line_height)
}

fn cascade<T, F>(css: &Css, element: ElementRef, inline: Option<&InlineStyle>, get: F) -> Option<T>
where
    F: Fn(&Declarations) -> Option<T>,
{
    let mut winner: Option<(Precedence, T)> = None;
    let mut offer = |precedence: Precedence, value: Option<T>| {
        if let Some(value) = value {
            let wins = match winner.as_ref() {
                Some((current, _)) => precedence > *current,
                None => true,
            };
            if wins {
                winner = Some((precedence, value));
            }
        }
    };
    for rule in &css.rules {
        let value = get(&rule.declarations);
        if value.is_none() || !rule.selector.matches(&element) {
            continue;
        }
        let precedence = Precedence {
            important: rule.important,
            inline: false,
            specificity: rule.specificity,
            order: rule.order,
        };
        offer(precedence, value);
    }
    if let Some(inline) = inline {
        offer(Precedence::INLINE, get(&inline.normal));
        offer(Precedence::INLINE_IMPORTANT, get(&inline.important));
    }
    winner.map(|(_, value)| value)
}
