//! Output formats for quire documents
//!
//!     This crate turns the block tree produced by `quire-parser` into text: HTML, JSON or the
//!     treeviz outline. It is a pure lib, no code here should suppose a shell environment (std
//!     printing, env vars, files).
//!
//! Architecture
//!
//!     - Format trait: uniform interface for every output format
//!     - FormatRegistry: discovery and selection of formats by name or extension
//!     - Format implementations under `formats/`
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── serializer.rs   # Block tree → RcDom → HTML
//!     │   │   └── mod.rs
//!     │   ├── json
//!     │   └── treeviz
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── html
//!         ├── <element>.rs
//!         └── mod.rs
//!
//!     Rust does not discover tests in subdirectories by itself, so `tests/html.rs` includes the
//!     modules.
//!
//! Rendering never fails on a well-formed tree; the only errors come from looking up an
//! unknown format, a format without serialization, or a parse error when rendering from
//! source.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::{HtmlFormat, HtmlOptions, JsonFormat, TreevizFormat};
pub use registry::FormatRegistry;
