use lightningcss::printer::PrinterOptions;
use lightningcss::properties::font::{
    AbsoluteFontSize, FontSize as CssFontSize, LineHeight as CssLineHeight, RelativeFontSize,
};
use lightningcss::properties::Property;
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute, StyleSheet};
use lightningcss::traits::ToCss;
use lightningcss::values::length::{LengthPercentage, LengthValue};
use log::{debug, warn};
use scraper::Selector;

use crate::css::{Declarations, FontSize, InlineStyle, LineHeight, Rule};
use crate::PageError;

/// Reads style rules declaring font sizes or line heights, other rules are ignored.
/// Rule order numbers continue from `order` so later stylesheets win ties.
pub fn read_css(css: &str, order: usize) -> Result<Vec<Rule>, PageError> {
    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|error| PageError::Css(error.to_string()))?;
    let mut rules = vec![];
    for rule in &stylesheet.rules.0 {
        let rule = match rule {
            CssRule::Style(rule) => rule,
            _ => {
                debug!("skip non-style rule, only plain style rules affect text size");
                continue;
            }
        };
        let normal = read_declarations(&rule.declarations.declarations);
        let important = read_declarations(&rule.declarations.important_declarations);
        if normal.is_empty() && important.is_empty() {
            continue;
        }
        let selectors = match rule.selectors.to_css_string(PrinterOptions::default()) {
            Ok(selectors) => selectors,
            Err(error) => {
                warn!("unable to print selectors, {error}");
                continue;
            }
        };
        let texts = split_selector_list(&selectors);
        let specificities: Vec<u32> = rule
            .selectors
            .0
            .iter()
            .map(|selector| selector.specificity())
            .collect();
        let fallback = specificities.iter().copied().max().unwrap_or(0);
        for (index, text) in texts.iter().enumerate() {
            let selector = match Selector::parse(text) {
                Ok(selector) => selector,
                Err(_) => {
                    // pseudo elements are not part of element tree
                    debug!("selector {text} can't be matched against elements, skip");
                    continue;
                }
            };
            let specificity = if texts.len() == specificities.len() {
                specificities[index]
            } else {
                fallback
            };
            for (important, declarations) in [(false, normal), (true, important)] {
                if declarations.is_empty() {
                    continue;
                }
                rules.push(Rule {
                    selector: selector.clone(),
                    specificity,
                    order: order + rules.len(),
                    important,
                    declarations,
                });
            }
        }
    }
    Ok(rules)
}

/// Reads style attribute of element, invalid attribute treated as empty one.
pub fn read_inline_style(style: &str) -> InlineStyle {
    match StyleAttribute::parse(style, ParserOptions::default()) {
        Ok(attribute) => InlineStyle {
            normal: read_declarations(&attribute.declarations.declarations),
            important: read_declarations(&attribute.declarations.important_declarations),
        },
        Err(error) => {
            warn!("unable to parse style attribute {style:?}, {error}");
            InlineStyle::default()
        }
    }
}

fn read_declarations(properties: &[Property]) -> Declarations {
    let mut declarations = Declarations::default();
    for property in properties {
        match property {
            Property::FontSize(size) => {
                if let Some(size) = read_font_size(size) {
                    declarations.font_size = Some(size);
                }
            }
            Property::LineHeight(height) => {
                if let Some(height) = read_line_height(height) {
                    declarations.line_height = Some(height);
                }
            }
            Property::Font(font) => {
                if let Some(size) = read_font_size(&font.size) {
                    declarations.font_size = Some(size);
                }
                if let Some(height) = read_line_height(&font.line_height) {
                    declarations.line_height = Some(height);
                }
            }
            _ => {}
        }
    }
    declarations
}

fn read_font_size(size: &CssFontSize) -> Option<FontSize> {
    match size {
        CssFontSize::Length(length) => match length {
            LengthPercentage::Dimension(value) => read_length(value, true),
            LengthPercentage::Percentage(percent) => Some(FontSize::Percent(percent.0)),
            _ => {
                debug!("font size {size:?} not supported");
                None
            }
        },
        CssFontSize::Absolute(keyword) => {
            let px = match keyword {
                AbsoluteFontSize::XXSmall => 9.0,
                AbsoluteFontSize::XSmall => 10.0,
                AbsoluteFontSize::Small => 13.0,
                AbsoluteFontSize::Medium => 16.0,
                AbsoluteFontSize::Large => 18.0,
                AbsoluteFontSize::XLarge => 24.0,
                AbsoluteFontSize::XXLarge => 32.0,
                #[allow(unreachable_patterns)]
                _ => 48.0,
            };
            Some(FontSize::Px(px))
        }
        CssFontSize::Relative(RelativeFontSize::Smaller) => Some(FontSize::Smaller),
        CssFontSize::Relative(RelativeFontSize::Larger) => Some(FontSize::Larger),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn read_line_height(height: &CssLineHeight) -> Option<LineHeight> {
    match height {
        CssLineHeight::Normal => Some(LineHeight::Normal),
        CssLineHeight::Number(value) => Some(LineHeight::Number(*value)),
        CssLineHeight::Length(LengthPercentage::Percentage(percent)) => {
            Some(LineHeight::Number(percent.0))
        }
        CssLineHeight::Length(LengthPercentage::Dimension(value)) => {
            match read_length(value, false)? {
                FontSize::Px(px) => Some(LineHeight::Px(px)),
                _ => None,
            }
        }
        _ => {
            debug!("line height {height:?} not supported");
            None
        }
    }
}

/// Converts absolute units to px, relative units are kept for font sizes only.
fn read_length(value: &LengthValue, relative: bool) -> Option<FontSize> {
    let size = match *value {
        LengthValue::Px(value) => FontSize::Px(value),
        LengthValue::Pt(value) => FontSize::Px(value * 4.0 / 3.0),
        LengthValue::Pc(value) => FontSize::Px(value * 16.0),
        LengthValue::In(value) => FontSize::Px(value * 96.0),
        LengthValue::Cm(value) => FontSize::Px(value * 96.0 / 2.54),
        LengthValue::Mm(value) => FontSize::Px(value * 96.0 / 25.4),
        LengthValue::Em(value) if relative => FontSize::Em(value),
        LengthValue::Rem(value) if relative => FontSize::Rem(value),
        _ => {
            debug!("length {value:?} not supported");
            return None;
        }
    };
    Some(size)
}

/// Splits printed selector list by top level commas, commas inside of
/// functional pseudo classes or attribute values stay in place.
fn split_selector_list(selectors: &str) -> Vec<String> {
    let mut result = vec![];
    let mut current = String::new();
    let mut depth = 0;
    let mut quote = None;
    for ch in selectors.chars() {
        match (ch, quote) {
            ('"' | '\'', None) => quote = Some(ch),
            (ch, Some(open)) if ch == open => quote = None,
            ('(' | '[', None) => depth += 1,
            (')' | ']', None) => depth -= 1,
            (',', None) if depth == 0 => {
                result.push(current.trim().to_string());
                current = String::new();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    if !current.trim().is_empty() {
        result.push(current.trim().to_string());
    }
    result
}
