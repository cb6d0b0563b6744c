use crate::error::MenuResult;
use crate::parser::MenuNode;

/// Marker printed after an active entry
pub const ACTIVE_MARKER: &str = "ACTIVE";

/// Separator between display name and path, and between path and marker
pub const FIELD_SEPARATOR: &str = "     ";

/// Decides whether entries match the active path
#[derive(Debug, Clone, Copy)]
pub struct ActivityMatcher<'p> {
    active_path: &'p str,
}

impl<'p> ActivityMatcher<'p> {
    pub fn new(active_path: &'p str) -> Self {
        Self { active_path }
    }

    pub fn active_path(&self) -> &'p str {
        self.active_path
    }

    /// Exact, case-sensitive comparison with no normalization.
    pub fn matches(&self, path: &str) -> bool {
        path == self.active_path
    }

    /// True if any entry below `item`, at any depth, has the active path.
    /// `item` itself is not compared.
    pub fn any_descendant_matches<N: MenuNode>(&self, item: &N) -> MenuResult<bool> {
        let Some(children) = item.children() else {
            return Ok(false);
        };

        for child in &children {
            if self.matches(&child.path()?) || self.any_descendant_matches(child)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Helper for the one-line text form of an entry
pub struct LineRenderer;

impl LineRenderer {
    pub fn render_line(indent: &str, display_name: &str, path: &str, active: bool) -> String {
        let marker = if active { ACTIVE_MARKER } else { "" };
        format!(
            "{}{},{}{}{}{}\n",
            indent, display_name, FIELD_SEPARATOR, path, FIELD_SEPARATOR, marker
        )
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize, width: usize) -> String {
        " ".repeat(depth * width)
    }
}
