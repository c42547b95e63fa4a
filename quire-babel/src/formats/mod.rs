//! Format implementations
//!
//! Each format turns a parsed block tree into a string.

pub mod html;
pub mod json;
pub mod treeviz;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
