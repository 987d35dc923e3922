pub use chrome::*;
pub use config::*;
pub use css::{FontSize, LineHeight};
pub use date_picker::*;
pub use document::*;
pub use error::*;
pub use level::*;
pub use loader::*;
pub use navigation::*;
pub use page::*;
pub use rescaler::*;
pub use script::*;
pub use viewer::*;

mod chrome;
mod config;
mod css;
mod date_picker;
mod document;
mod error;
mod html;
mod level;
mod loader;
mod navigation;
mod page;
mod rescaler;
mod script;
#[cfg(test)]
mod testing;
mod viewer;
