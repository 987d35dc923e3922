use log::info;

/// Neutral empty placeholder page, navigating to it must not trigger rescaling.
pub const BLANK_ADDRESS: &str = "about:blank";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationPolicy {
    Allow,
    Cancel,
}

/// Decides whether in-page navigation request should proceed.
pub fn decide_navigation(target: &str) -> NavigationPolicy {
    if target == BLANK_ADDRESS {
        return NavigationPolicy::Cancel;
    }
    info!("navigating to: {target}");
    NavigationPolicy::Allow
}
