use std::collections::HashMap;

use ego_tree::NodeId;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::css::{
    cascade_font_size, cascade_line_height, default_font_size, read_css, read_inline_style, Css,
    FontSize, InlineStyle, LineHeight, MEDIUM_FONT_SIZE,
};
use crate::html::write_html;
use crate::{Page, PageError};

/// Changes made to element by host, the equivalent of `element.style` assignments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Override {
    pub font_size: Option<f32>,
    pub hidden: bool,
}

/// The loaded HTML document with its stylesheets.
/// Lives as long as page is displayed, reloading page creates a new document.
pub struct Document {
    html: Html,
    css: Css,
    inline: HashMap<NodeId, InlineStyle>,
    overrides: HashMap<NodeId, Override>,
    injected: Vec<String>,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        let mut css = Css::new();
        let mut inline = HashMap::new();
        for node in html.root_element().descendants() {
            let element = match ElementRef::wrap(node) {
                Some(element) => element,
                None => continue,
            };
            if element.value().name() == "style" {
                let source: String = element.text().collect();
                match read_css(&source, css.next_order()) {
                    Ok(rules) => {
                        css.rules.extend(rules);
                        css.sources.push(source);
                    }
                    Err(error) => warn!("unable to read page stylesheet, {error}"),
                }
            }
            if let Some(style) = element.value().attr("style") {
                inline.insert(element.id(), read_inline_style(style));
            }
        }
        debug!(
            "document parsed with {} style rules, {} inline styles",
            css.rules.len(),
            inline.len()
        );
        Self {
            html,
            css,
            inline,
            overrides: HashMap::new(),
            injected: vec![],
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Finds elements by CSS selector.
    pub fn find(&self, selector: &str) -> Result<Vec<NodeId>, PageError> {
        let selector =
            Selector::parse(selector).map_err(|_| PageError::Selector(selector.to_string()))?;
        Ok(self.select(&selector))
    }

    pub fn find_first(&self, selector: &str) -> Result<NodeId, PageError> {
        self.find(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| PageError::Selector(selector.to_string()))
    }

    pub fn font_size(&self, node: NodeId) -> Option<f32> {
        self.computed_font_sizes().get(&node).copied()
    }

    /// Line height is inherited, elements without declaration use the nearest ancestor's one.
    pub fn line_height(&self, node: NodeId) -> LineHeight {
        let mut current = self.element(node);
        while let Some(element) = current {
            let inline = self.effective_inline(element.id());
            if let Some(height) = cascade_line_height(&self.css, element, inline.as_ref()) {
                return height;
            }
            current = element.parent().and_then(ElementRef::wrap);
        }
        LineHeight::Normal
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.overrides
            .get(&node)
            .map(|changes| changes.hidden)
            .unwrap_or(false)
    }

    pub fn overrides(&self, node: NodeId) -> Option<&Override> {
        self.overrides.get(&node)
    }

    /// Sources of all stylesheets, page ones followed by injected.
    pub fn stylesheets(&self) -> &[String] {
        &self.css.sources
    }

    pub fn injected_styles(&self) -> &[String] {
        &self.injected
    }

    /// Serializes document with all changes made by host.
    pub fn to_html(&self) -> String {
        write_html(&self.html, &self.overrides, &self.injected)
    }

    fn element(&self, node: NodeId) -> Option<ElementRef> {
        self.html.tree.get(node).and_then(ElementRef::wrap)
    }

    fn element_or_error(&self, node: NodeId) -> Result<ElementRef, PageError> {
        self.element(node).ok_or(PageError::ElementNotFound(node))
    }

    /// Inline style as page declared it, with host font size assignment on top.
    fn effective_inline(&self, node: NodeId) -> Option<InlineStyle> {
        let declared = self.inline.get(&node).copied();
        match self.overrides.get(&node).and_then(|changes| changes.font_size) {
            None => declared,
            Some(px) => {
                let mut style = declared.unwrap_or_default();
                style.normal.font_size = Some(FontSize::Px(px));
                style.important.font_size = None;
                Some(style)
            }
        }
    }

    fn resolve_font_size(&self, element: ElementRef, parent: f32, root: f32) -> f32 {
        let inline = self.effective_inline(element.id());
        let declared = cascade_font_size(&self.css, element, inline.as_ref())
            .or_else(|| default_font_size(element.value().name()));
        match declared {
            Some(size) => size.resolve(parent, root),
            None => parent,
        }
    }
}

impl Page for Document {
    fn elements(&self) -> Vec<NodeId> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|element| element.id())
            .collect()
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.value().name())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node)?
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| parent.id())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.value().attr(name)
    }

    fn text(&self, node: NodeId) -> String {
        self.element(node)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.html
            .select(selector)
            .map(|element| element.id())
            .collect()
    }

    fn computed_font_sizes(&self) -> HashMap<NodeId, f32> {
        let mut sizes = HashMap::new();
        let root = self.html.root_element();
        let root_size = self.resolve_font_size(root, MEDIUM_FONT_SIZE, MEDIUM_FONT_SIZE);
        sizes.insert(root.id(), root_size);
        let mut stack: Vec<(ElementRef, f32)> = root
            .children()
            .filter_map(ElementRef::wrap)
            .map(|child| (child, root_size))
            .collect();
        while let Some((element, parent)) = stack.pop() {
            let size = self.resolve_font_size(element, parent, root_size);
            sizes.insert(element.id(), size);
            for child in element.children().filter_map(ElementRef::wrap) {
                stack.push((child, size));
            }
        }
        sizes
    }

    fn set_font_size(&mut self, node: NodeId, px: f32) -> Result<(), PageError> {
        self.element_or_error(node)?;
        self.overrides.entry(node).or_default().font_size = Some(px);
        Ok(())
    }

    fn inject_style(&mut self, css: &str) -> Result<(), PageError> {
        let has_head = self
            .html
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .any(|element| element.value().name() == "head");
        if !has_head {
            return Err(PageError::HeadNotFound);
        }
        let rules = read_css(css, self.css.next_order())?;
        self.css.rules.extend(rules);
        self.css.sources.push(css.to_string());
        self.injected.push(css.to_string());
        Ok(())
    }

    fn hide(&mut self, node: NodeId) -> Result<(), PageError> {
        self.element_or_error(node)?;
        self.overrides.entry(node).or_default().hidden = true;
        Ok(())
    }
}
