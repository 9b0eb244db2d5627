//! Indented text rendering.

use std::fmt::{self, Write};

use drivetree_core::{Entry, TreePath};

use crate::config::RenderConfig;
use crate::error::ReportError;

/// Render `root` and its descendants, one line per entry.
pub fn render(root: &Entry, config: &RenderConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_to(&mut out, root, config);
    out
}

/// Render the subtree reached by `path` from `root`.
///
/// Indentation restarts at the subtree root.
pub fn render_subtree(
    root: &Entry,
    path: &TreePath,
    config: &RenderConfig,
) -> Result<String, ReportError> {
    let subtree = root.resolve(path)?;
    Ok(render(subtree, config))
}

/// Write the rendering of `root` into `out`.
pub fn render_to<W: Write>(out: &mut W, root: &Entry, config: &RenderConfig) -> fmt::Result {
    root.recurse(|entry, path| {
        if !config.includes_depth(path.depth()) {
            return Ok(());
        }

        for _ in 0..path.depth() {
            out.write_str(&config.indent)?;
        }
        out.write_str(&entry.name())?;
        if config.mark_containers && entry.kind().is_container() {
            out.write_char('/')?;
        }
        if config.show_paths {
            write!(out, "  {path}")?;
        }
        out.write_char('\n')
    })
}
