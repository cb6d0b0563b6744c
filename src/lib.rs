//! # xmlmenu
//!
//! Reads a menu definition from XML, marks the entries that lead to an active
//! path, and renders the menu as indented text or JSON.
//!
//! ```
//! use xmlmenu::{render_menu, RenderContext};
//!
//! let xml = r#"<menu>
//!   <item><displayName>Home</displayName><path value="/Default.aspx"/></item>
//! </menu>"#;
//!
//! let output = render_menu(xml, "/Default.aspx", &RenderContext::new()).unwrap();
//! assert_eq!(output, "Home,     /Default.aspx     ACTIVE\n");
//! ```

use std::path::Path;

use tracing::debug;

pub mod error;
pub mod parser;
pub mod renderer;


pub use error::*;
pub use parser::*;
pub use renderer::*;

/// Renders menu XML held in memory.
pub fn render_menu(xml: &str, active_path: &str, context: &RenderContext) -> MenuResult<String> {
    let document = MenuDocument::parse(xml)?;
    let items = document.top_level_items();
    MenuRenderer::new(active_path).render(&items, context)
}

/// Checks that `path` names an existing file, loads it and renders the menu.
pub fn render_menu_file(
    path: &Path,
    active_path: &str,
    context: &RenderContext,
) -> MenuResult<String> {
    if !path.is_file() {
        return Err(MenuError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = MenuSource::load(path)?;
    let document = source.document()?;
    let items = document.top_level_items();
    debug!(items = items.len(), "loaded top-level menu items");

    MenuRenderer::new(active_path).render(&items, context)
}
