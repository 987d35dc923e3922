use dynamic_type::{
    rescaling_script, FileLoader, NavigationPolicy, Settings, StaticLoader, TextSizeLevel, Viewer,
};

const ADDRESS: &str = "app://reading-list";

#[test]
fn test_viewer_from_settings_file() {
    let settings = Settings::from_json(
        r#"{"address": "file://./assets/article.html", "level": "accessibility5"}"#,
    )
    .expect("valid settings");
    let mut viewer = Viewer::new(&settings, FileLoader);
    viewer.open();

    let page = viewer.page().expect("page loaded");
    assert_eq!(page.report.scale.value(), 2.0);
    let p = page.document.find_first("p").expect("paragraph");
    assert_eq!(page.document.font_size(p), Some(32.0));
}

#[test]
fn test_level_change_reloads_from_clean_document() {
    let html = "<style>h2 { font-size: 20px }</style><h2>Title</h2><p>Text</p>";
    let settings = Settings::new().address(ADDRESS).level(TextSizeLevel::Large);
    let mut viewer = Viewer::new(&settings, StaticLoader::new().page(ADDRESS, html));
    viewer.open();
    let h2 = find(&viewer, "h2");
    assert_eq!(viewer.document().and_then(|document| document.font_size(h2)), Some(22.0));

    assert!(viewer.update(TextSizeLevel::Accessibility3));
    let page = viewer.page().expect("page reloaded");
    let h2 = page.document.find_first("h2").expect("heading");
    assert_eq!(page.rescaler.original_font_size(h2), Some(20.0));
    assert_eq!(page.document.font_size(h2), Some(34.0));
    assert_eq!(viewer.loader().requests(), 2);
}

#[test]
fn test_unknown_level_keeps_neutral_page() {
    let settings = Settings::new().address(ADDRESS).level(TextSizeLevel::Medium);
    let mut viewer = Viewer::new(&settings, StaticLoader::new().page(ADDRESS, "<p>Text</p>"));
    viewer.open();
    assert!(!viewer.update(TextSizeLevel::Unknown));
    assert_eq!(viewer.loader().requests(), 1);
}

#[test]
fn test_missing_page_stays_blank_after_level_change() {
    let settings = Settings::new().address("file://./assets/missing.html");
    let mut viewer = Viewer::new(&settings, FileLoader);
    viewer.open();
    assert!(viewer.update(TextSizeLevel::XLarge));
    assert!(viewer.page().is_none());
}

#[test]
fn test_navigation_requests() {
    let viewer = Viewer::new(&Settings::new(), StaticLoader::new());
    assert_eq!(viewer.on_navigation_requested("about:blank"), NavigationPolicy::Cancel);
    assert_eq!(
        viewer.on_navigation_requested("https://github.com/explore"),
        NavigationPolicy::Allow
    );
}

#[test]
fn test_script_for_web_view_hosts() {
    let script = rescaling_script(TextSizeLevel::Small.scale());
    assert!(script.contains("var scale = 0.9;"));
    assert!(script.contains("document.head.appendChild(style);"));
}

fn find(viewer: &Viewer<StaticLoader>, selector: &str) -> ego_tree::NodeId {
    viewer
        .document()
        .and_then(|document| document.find_first(selector).ok())
        .expect("element found")
}
