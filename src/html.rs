pub use writer::*;

mod writer;
