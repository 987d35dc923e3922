use std::collections::HashMap;

use ego_tree::{NodeId, NodeRef};
use html5ever::{local_name, LocalName};
use scraper::{Html, Node};

use crate::Override;

/// Serializes document, host overrides are written to style attributes of elements
/// and injected stylesheets are appended to the head.
pub fn write_html(html: &Html, overrides: &HashMap<NodeId, Override>, injected: &[String]) -> String {
    let mut writer = Writer {
        output: String::new(),
        overrides,
        injected,
    };
    writer.write_node(html.tree.root(), false);
    writer.output
}

struct Writer<'w> {
    output: String,
    overrides: &'w HashMap<NodeId, Override>,
    injected: &'w [String],
}

impl Writer<'_> {
    fn write_node(&mut self, node: NodeRef<Node>, raw_text: bool) {
        match node.value() {
            Node::Document | Node::Fragment => {
                for child in node.children() {
                    self.write_node(child, false);
                }
            }
            Node::Doctype(doctype) => {
                self.output += &format!("<!DOCTYPE {}>", doctype.name());
            }
            Node::Comment(comment) => {
                self.output += &format!("<!--{}-->", &**comment);
            }
            Node::Text(text) => {
                if raw_text {
                    self.output.push_str(text);
                } else {
                    self.output += &escape(text, false);
                }
            }
            Node::Element(element) => {
                let name = &element.name.local;
                self.output.push('<');
                self.output.push_str(name);
                let style = self.overrides.get(&node.id()).map(override_style);
                let mut style_written = false;
                for (key, value) in element.attrs() {
                    let value = match (&style, key) {
                        (Some(style), "style") => {
                            style_written = true;
                            merge_style(value, style)
                        }
                        _ => value.to_string(),
                    };
                    self.output += &format!(" {key}=\"{}\"", escape(&value, true));
                }
                if let (Some(style), false) = (&style, style_written) {
                    self.output += &format!(" style=\"{}\"", escape(style, true));
                }
                self.output.push('>');
                if is_void(name) {
                    return;
                }
                let raw_text = is_raw_text(name);
                for child in node.children() {
                    self.write_node(child, raw_text);
                }
                if *name == local_name!("head") {
                    for css in self.injected {
                        self.output += &format!("<style>{css}</style>");
                    }
                }
                self.output += &format!("</{name}>");
            }
            Node::ProcessingInstruction(_) => {}
        }
    }
}

fn override_style(changes: &Override) -> String {
    let mut declarations = vec![];
    if let Some(px) = changes.font_size {
        declarations.push(format!("font-size: {px}px"));
    }
    if changes.hidden {
        declarations.push("display: none".to_string());
    }
    declarations.join("; ")
}

fn merge_style(declared: &str, style: &str) -> String {
    let declared = declared.trim().trim_end_matches(';');
    if declared.is_empty() {
        style.to_string()
    } else {
        format!("{declared}; {style}")
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result += "&amp;",
            '\u{a0}' => result += "&nbsp;",
            '"' if attribute => result += "&quot;",
            '<' if !attribute => result += "&lt;",
            '>' if !attribute => result += "&gt;",
            _ => result.push(ch),
        }
    }
    result
}

fn is_void(name: &LocalName) -> bool {
    matches!(
        *name,
        local_name!("area")
            | local_name!("base")
            | local_name!("br")
            | local_name!("col")
            | local_name!("embed")
            | local_name!("hr")
            | local_name!("img")
            | local_name!("input")
            | local_name!("link")
            | local_name!("meta")
            | local_name!("param")
            | local_name!("source")
            | local_name!("track")
            | local_name!("wbr")
    )
}

fn is_raw_text(name: &LocalName) -> bool {
    matches!(
        *name,
        local_name!("script")
            | local_name!("style")
            | local_name!("xmp")
            | local_name!("iframe")
            | local_name!("noembed")
            | local_name!("noframes")
    )
}
