//! Comment and whitespace stripping minifier for shader source
//!
//! This crate compacts GLSL-style shader source without parsing the
//! language: comments and blank lines are removed, code lines are trimmed
//! and merged, and preprocessor directives keep a line of their own.
//!
//! # Example
//!
//! ```
//! use shadermin::minify;
//!
//! let source = r#"
//!     #version 330 core
//!     /* Fullscreen blur */
//!     uniform sampler2D tex;   // input
//!     out vec4 color;
//! "#;
//!
//! assert_eq!(minify(source), "#version 330 core\nuniform sampler2D tex;out vec4 color;");
//! ```

mod embed;
mod error;
mod minify;
mod scan;
mod source;

pub use embed::embed_c_array;
pub use error::{Error, Result};
pub use minify::{MinifyResult, MinifyStats, minify, minify_with_stats};
pub use scan::{Fragment, ScanState, SourceLines, scan_line, source_lines};
pub use source::{minify_file, read_source};
