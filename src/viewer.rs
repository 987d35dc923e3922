use log::{error, info};

use crate::navigation::decide_navigation;
use crate::{
    Loader, NavigationPolicy, Page, RescaleReport, Rescaler, ScaleFactor, Settings, TextSizeLevel,
};

/// The document currently displayed with its rescaling state.
pub struct LoadedPage<P: Page> {
    pub document: P,
    pub rescaler: Rescaler,
    pub report: RescaleReport,
}

/// Web view controller, shows one fixed page rescaled to the current text size level.
///
/// Host forwards its engine callbacks: [`Viewer::on_load_complete`] when page finished loading and
/// [`Viewer::on_navigation_requested`] before any navigation.
pub struct Viewer<L: Loader> {
    address: String,
    loader: L,
    scale: ScaleFactor,
    page: Option<LoadedPage<L::Page>>,
}

impl<L: Loader> Viewer<L> {
    pub fn new(settings: &Settings, loader: L) -> Self {
        Self {
            address: settings.address.clone(),
            loader,
            scale: settings.level.scale(),
            page: None,
        }
    }

    /// Initial display of page.
    pub fn open(&mut self) {
        self.load();
    }

    /// Reacts on text size level changes, page reloaded only if scale factor differs
    /// from the one used by displayed page. Returns true if page was reloaded.
    pub fn update(&mut self, level: TextSizeLevel) -> bool {
        let scale = level.scale();
        if scale == self.scale {
            return false;
        }
        info!("text size level changed to {level}, reload page with scale {scale}");
        self.scale = scale;
        self.load();
        true
    }

    pub fn on_load_complete(&mut self, mut document: L::Page) {
        let mut rescaler = Rescaler::new(self.scale);
        let report = rescaler.rescale(&mut document);
        self.page = Some(LoadedPage {
            document,
            rescaler,
            report,
        });
    }

    pub fn on_navigation_requested(&self, target: &str) -> NavigationPolicy {
        decide_navigation(target)
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn page(&self) -> Option<&LoadedPage<L::Page>> {
        self.page.as_ref()
    }

    pub fn document(&self) -> Option<&L::Page> {
        self.page.as_ref().map(|page| &page.document)
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    fn load(&mut self) {
        // previous document and its records are dropped, nothing survives reload
        self.page = None;
        match self.loader.load(&self.address) {
            Ok(document) => self.on_load_complete(document),
            Err(error) => error!("unable to load page {}, {error}", self.address),
        }
    }
}
