use serde::Serialize;

use crate::renderer::components::*;
use crate::renderer::traits::*;

/// A menu entry with its activation state decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem {
    pub display_name: String,
    pub path: String,
    pub active: bool,
    /// `None` for a leaf, `Some` whenever a submenu container was present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ResolvedItem>>,
}

impl ResolvedItem {
    /// Number of entries in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(ResolvedItem::count)
            .sum::<usize>()
    }
}

impl Render for ResolvedItem {
    fn render(&self, context: &RenderContext) -> String {
        let mut output =
            LineRenderer::render_line(&context.indent(), &self.display_name, &self.path, self.active);

        if let Some(children) = &self.children {
            let child_context = context.nested();
            for child in children {
                output.push_str(&child.render(&child_context));
            }
        }

        output
    }
}

impl Render for [ResolvedItem] {
    fn render(&self, context: &RenderContext) -> String {
        // Every top-level entry starts from the caller's depth
        self.iter().map(|item| item.render(context)).collect()
    }
}
