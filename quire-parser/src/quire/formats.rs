//! Output formats that live next to the tree
//!
//!     Only formats needed for inspecting and testing the parser live here. Rendering to
//!     documents (HTML and friends) is the job of quire-babel.

pub mod treeviz;

pub use treeviz::{to_treeviz_str, to_treeviz_str_with_params};
