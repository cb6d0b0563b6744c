use tracing::{debug, trace};

use crate::error::MenuResult;
use crate::parser::MenuNode;
use crate::renderer::components::*;
use crate::renderer::renders::*;
use crate::renderer::traits::*;

/// Marks active entries and renders a whole menu
pub struct MenuRenderer<'p> {
    matcher: ActivityMatcher<'p>,
}

impl<'p> MenuRenderer<'p> {
    pub fn new(active_path: &'p str) -> Self {
        Self {
            matcher: ActivityMatcher::new(active_path),
        }
    }

    /// Reads one entry and its subtree, deciding activation for every node.
    ///
    /// An entry is active when its own path matches. An entry that has a
    /// submenu container (even an empty one) and does not match itself is
    /// active when anything below it matches.
    pub fn resolve<N: MenuNode>(&self, item: &N) -> MenuResult<ResolvedItem> {
        let display_name = item.display_name()?;
        let path = item.path()?;
        let kids = item.children();

        let self_active = self.matcher.matches(&path);
        let active = match &kids {
            Some(_) if !self_active => self.matcher.any_descendant_matches(item)?,
            _ => self_active,
        };

        trace!(%path, active, has_submenu = kids.is_some(), "resolved menu item");

        let children = kids
            .map(|kids| {
                kids.iter()
                    .map(|kid| self.resolve(kid))
                    .collect::<MenuResult<Vec<_>>>()
            })
            .transpose()?;

        Ok(ResolvedItem {
            display_name,
            path,
            active,
            children,
        })
    }

    /// Resolves all top-level entries. The first malformed entry anywhere in
    /// the tree aborts the whole menu.
    pub fn resolve_all<N: MenuNode>(&self, items: &[N]) -> MenuResult<Vec<ResolvedItem>> {
        items.iter().map(|item| self.resolve(item)).collect()
    }

    /// Renders a single entry and its subtree at the context's depth.
    pub fn render_item<N: MenuNode>(&self, item: &N, context: &RenderContext) -> MenuResult<String> {
        Ok(self.resolve(item)?.render(context))
    }

    /// Renders the whole menu into one buffer; nothing is returned unless
    /// every entry could be read.
    pub fn render<N: MenuNode>(&self, items: &[N], context: &RenderContext) -> MenuResult<String> {
        let resolved = self.resolve_all(items)?;
        let total: usize = resolved.iter().map(ResolvedItem::count).sum();
        debug!(
            top_level = resolved.len(),
            total,
            active_path = self.matcher.active_path(),
            "rendering menu"
        );

        match context.format {
            OutputFormat::Text => Ok(resolved.render(context)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&resolved)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}
