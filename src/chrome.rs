use std::collections::HashSet;

use log::{debug, error};
use scraper::Selector;

use crate::Page;

/// Structural page regions which are not part of primary content.
pub const CHROME_SELECTORS: [&str; 16] = [
    "header",
    "footer",
    r#"[role="banner"]"#,
    r#"[role="contentinfo"]"#,
    ".header",
    ".footer",
    ".site-header",
    ".site-footer",
    "#header",
    "#footer",
    "#site-header",
    "#site-footer",
    "nav",
    ".navigation",
    ".nav",
    ".navbar",
];

/// Hides page headers, footers and navigation, returns number of hidden elements.
pub fn hide_chrome<P: Page>(page: &mut P) -> usize {
    let mut hidden = HashSet::new();
    for source in CHROME_SELECTORS {
        let selector = match Selector::parse(source) {
            Ok(selector) => selector,
            Err(_) => {
                error!("unable to parse chrome selector {source}");
                continue;
            }
        };
        for node in page.select(&selector) {
            match page.hide(node) {
                Ok(()) => {
                    debug!("hidden element: {source}");
                    hidden.insert(node);
                }
                Err(error) => error!("unable to hide element {node:?}, {error}"),
            }
        }
    }
    hidden.len()
}
