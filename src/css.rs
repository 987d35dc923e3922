pub use default::*;
pub use matching::*;
pub use reader::*;

mod default;
mod matching;
mod reader;

use scraper::Selector;

/// The font size used when nothing else can be resolved, CSS `medium` keyword.
pub const MEDIUM_FONT_SIZE: f32 = 16.0;

/// Declared value of font-size property, resolved against parent and root sizes.
///
/// see details: https://developer.mozilla.org/en-US/docs/Web/CSS/font-size
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Px(f32),
    Em(f32),
    Rem(f32),
    /// Fraction of parent font size, 50% stored as 0.5
    Percent(f32),
    Smaller,
    Larger,
}

impl FontSize {
    pub fn resolve(&self, parent: f32, root: f32) -> f32 {
        match *self {
            FontSize::Px(value) => value,
            FontSize::Em(value) => value * parent,
            FontSize::Rem(value) => value * root,
            FontSize::Percent(value) => value * parent,
            FontSize::Smaller => parent / 1.2,
            FontSize::Larger => parent * 1.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHeight {
    Normal,
    Number(f32),
    Px(f32),
}

/// The subset of declarations relevant to text scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Declarations {
    pub font_size: Option<FontSize>,
    pub line_height: Option<LineHeight>,
}

impl Declarations {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none() && self.line_height.is_none()
    }
}

/// Inline style of element, declarations of style attribute split by importance.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineStyle {
    pub normal: Declarations,
    pub important: Declarations,
}

/// One selector of style rule with its declarations, rules with selector list
/// are split to several rules to keep specificity per selector.
#[derive(Debug)]
pub struct Rule {
    pub selector: Selector,
    pub specificity: u32,
    pub order: usize,
    pub important: bool,
    pub declarations: Declarations,
}

#[derive(Debug, Default)]
pub struct Css {
    pub rules: Vec<Rule>,
    /// Source texts of stylesheets, kept for serialization.
    pub sources: Vec<String>,
}

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_order(&self) -> usize {
        self.rules.len()
    }
}
