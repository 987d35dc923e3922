use std::collections::{HashMap, HashSet};

use ego_tree::NodeId;
use log::{debug, error, info};

use crate::chrome::hide_chrome;
use crate::{Page, ScaleFactor};

/// Base font size when page has neither paragraph nor body with usable font size.
pub const FALLBACK_BASE_FONT_SIZE: f32 = 16.0;

/// Elements with bigger computed font size are treated as decorative and never scaled.
pub const MAX_SCALABLE_FONT_SIZE: f32 = 100.0;

/// No element may grow more than this multiple of its original font size.
pub const MAX_GROWTH: f32 = 2.0;

pub const LIST_LINE_HEIGHT: f32 = 1.4;

const LIST_TAGS: [&str; 3] = ["ul", "ol", "li"];

/// Rescales text of one loaded page, keeps original font sizes of elements
/// so repeated passes never compound the scale.
///
/// Everything decided in the first pass is final for the document: base font size,
/// originals of scaled elements and elements excluded from scaling.
/// Records live as long as rescaler does, host must create new rescaler for every loaded document.
pub struct Rescaler {
    scale: ScaleFactor,
    base_font_size: Option<f32>,
    originals: HashMap<NodeId, f32>,
    excluded: HashSet<NodeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RescaleReport {
    pub scale: ScaleFactor,
    pub base_font_size: f32,
    /// Font size forced on list elements and hyperlinks.
    pub list_font_size: f32,
    pub scaled: usize,
    pub skipped: usize,
    pub hidden: usize,
    pub style_injected: bool,
}

impl Rescaler {
    pub fn new(scale: ScaleFactor) -> Self {
        Self {
            scale,
            base_font_size: None,
            originals: HashMap::new(),
            excluded: HashSet::new(),
        }
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Font size captured the first time element was scaled.
    pub fn original_font_size(&self, node: NodeId) -> Option<f32> {
        self.originals.get(&node).copied()
    }

    pub fn records(&self) -> usize {
        self.originals.len()
    }

    /// Element was skipped by the first pass it took part in and stays unscaled.
    pub fn is_excluded(&self, node: NodeId) -> bool {
        self.excluded.contains(&node)
    }

    pub fn rescale<P: Page>(&mut self, page: &mut P) -> RescaleReport {
        let scale = self.scale.value();
        let sizes = page.computed_font_sizes();
        // later passes see scaled paragraph, so base is measured once
        let base_font_size = *self
            .base_font_size
            .get_or_insert_with(|| base_font_size(page, &sizes));
        info!("font scaling (scale factor: {scale}), base font size {base_font_size}px");

        let mut scaled = 0;
        let mut skipped = 0;
        for node in page.elements() {
            if self.excluded.contains(&node) {
                skipped += 1;
                continue;
            }
            let in_list = is_in_list(page, node);
            let original = match self.originals.get(&node) {
                Some(original) => *original,
                None => {
                    let current = match sizes.get(&node) {
                        Some(size) if is_scalable(*size) => *size,
                        _ => {
                            self.excluded.insert(node);
                            skipped += 1;
                            continue;
                        }
                    };
                    let normalized = match page.tag(node) {
                        Some("p" | "a" | "li" | "ul" | "ol") => true,
                        _ => in_list,
                    };
                    let original = if normalized {
                        base_font_size
                    } else {
                        current
                    };
                    self.originals.insert(node, original);
                    original
                }
            };
            let size = scaled_font_size(original, self.scale);
            if let Err(error) = page.set_font_size(node, size) {
                error!("unable to set font size of {node:?}, {error}");
                skipped += 1;
                continue;
            }
            scaled += 1;
            if log::log_enabled!(log::Level::Debug) {
                let text = page.text(node);
                let text = text.trim();
                if !text.is_empty() || size >= 16.0 {
                    let preview: String = text.chars().take(20).collect();
                    debug!("- {} {preview:?}", describe(page, node, in_list));
                    debug!("    - original: {original}px");
                    debug!("    - scaled: {size}px");
                }
            }
        }

        let list_font_size = base_font_size * scale;
        let style_injected = match page.inject_style(&list_override_css(list_font_size)) {
            Ok(()) => {
                info!("list and hyperlink font size forced to {list_font_size}px");
                true
            }
            Err(error) => {
                error!("unable to inject list styles, {error}");
                false
            }
        };
        let hidden = hide_chrome(page);
        info!("{scaled} elements scaled, {skipped} skipped, {hidden} hidden");
        RescaleReport {
            scale: self.scale,
            base_font_size,
            list_font_size,
            scaled,
            skipped,
            hidden,
            style_injected,
        }
    }
}

/// Scales original size, never more than [`MAX_GROWTH`] times.
pub fn scaled_font_size(original: f32, scale: ScaleFactor) -> f32 {
    let size = original * scale.value();
    let ceiling = original * MAX_GROWTH;
    if size > ceiling {
        ceiling
    } else {
        size
    }
}

/// Stylesheet normalizing every list, everything inside of lists and hyperlinks to one size.
pub fn list_override_css(list_font_size: f32) -> String {
    format!(
        "ul, ol, li, ul *, ol *, li *, a {{ font-size: {list_font_size}px !important; }}\n\
         li::before, li::marker {{ font-size: inherit !important; }}\n\
         li {{ line-height: {LIST_LINE_HEIGHT} !important; }}"
    )
}

/// Font size of first paragraph, or body, or fallback one.
pub fn base_font_size<P: Page>(page: &P, sizes: &HashMap<NodeId, f32>) -> f32 {
    let first = |tag: &str| {
        page.elements()
            .into_iter()
            .find(|node| page.tag(*node) == Some(tag))
    };
    let element = first("p").or_else(|| first("body"));
    element
        .and_then(|node| sizes.get(&node).copied())
        .filter(|size| size.is_finite() && *size != 0.0)
        .unwrap_or(FALLBACK_BASE_FONT_SIZE)
}

#[inline(always)]
fn is_scalable(size: f32) -> bool {
    size.is_finite() && size > 0.0 && size <= MAX_SCALABLE_FONT_SIZE
}

/// Element is list itself, list item, or is nested in one of them.
fn is_in_list<P: Page>(page: &P, node: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(node) = current {
        if let Some(tag) = page.tag(node) {
            if LIST_TAGS.contains(&tag) {
                return true;
            }
        }
        current = page.parent(node);
    }
    false
}

fn describe<P: Page>(page: &P, node: NodeId, in_list: bool) -> String {
    let mut description = page.tag(node).unwrap_or_default().to_string();
    if let Some(id) = page.attr(node, "id").filter(|id| !id.is_empty()) {
        description += &format!("#{id}");
    } else if let Some(class) = page
        .attr(node, "class")
        .and_then(|class| class.split(' ').next())
        .filter(|class| !class.is_empty())
    {
        description += &format!(".{class}");
    }
    if in_list {
        description += " (in-list)";
    }
    description
}
