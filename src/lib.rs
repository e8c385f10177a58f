//! # Burin
//!
//! Converts a restricted SVG subset into graphics command-buffer code:
//! static test and demo assets for a renderer, generated once and pasted
//! into its source tree.
//!
//! Supported input: `g` (group) and `path` elements; path data built from
//! the absolute commands M, L, Q, C, and Z; solid `rgb(r,g,b)` fills.
//! Anything else in the document is skipped with a diagnostic.
//!
//! ## Architecture
//!
//! ```text
//! SVG text
//!     ↓
//!  [scene]   — element tree folded out of XML events
//!     ↓
//!  [visit]   — flat drawing-command sequence
//!     ↓         (dispatches to [path] and [color])
//!  [emit]    — indented source text for the command-buffer API
//! ```

pub mod color;
pub mod emit;
pub mod error;
pub mod path;
pub mod scene;
pub mod visit;

pub use error::ConvertError;

/// Converts an SVG document into command-buffer source text.
///
/// This is the primary entry point: builds the scene tree, walks it in
/// document order, and renders the accumulated commands. Any fatal parse
/// condition aborts the whole conversion; no partial output is returned.
pub fn convert(svg: &str) -> Result<String, ConvertError> {
    let roots = scene::parse_scene(svg)?;
    let mut visitor = visit::SceneVisitor::new();
    for node in &roots {
        visitor.visit(node, 0)?;
    }
    Ok(emit::emit(&visitor.finish()))
}
