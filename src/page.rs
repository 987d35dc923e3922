use std::collections::HashMap;

use ego_tree::NodeId;
use scraper::Selector;

use crate::PageError;

/// The live, already rendered document provided by host.
/// Web view integrations implement it over their engine, [`crate::Document`] is
/// the implementation over parsed HTML.
pub trait Page {
    /// All elements of document in tree order, including root element.
    fn elements(&self) -> Vec<NodeId>;

    /// Lowercase local name of element.
    fn tag(&self, node: NodeId) -> Option<&str>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn attr(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Text content of element and its descendants.
    fn text(&self, node: NodeId) -> String;

    fn select(&self, selector: &Selector) -> Vec<NodeId>;

    /// Computed font sizes in px of all elements, taken at once before any change.
    /// Elements which font size can't be resolved are absent.
    fn computed_font_sizes(&self) -> HashMap<NodeId, f32>;

    /// Sets the effective inline font size of element, replaces inline font size declared by page.
    fn set_font_size(&mut self, node: NodeId, px: f32) -> Result<(), PageError>;

    /// Appends stylesheet to the end of document head.
    fn inject_style(&mut self, css: &str) -> Result<(), PageError>;

    /// Removes element from view, element stays in tree.
    fn hide(&mut self, node: NodeId) -> Result<(), PageError>;
}
