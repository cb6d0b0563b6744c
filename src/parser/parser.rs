use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use crate::error::{MenuError, MenuField, MenuResult};
use crate::parser::types::*;

/// Raw menu text read from disk, kept alive for the parsed document to borrow.
#[derive(Debug, Clone)]
pub struct MenuSource {
    pub path: Option<PathBuf>,
    pub text: String,
}

impl MenuSource {
    /// Reads a menu file. The caller is expected to have checked that the file
    /// exists; anything that goes wrong while reading is a load failure.
    pub fn load(path: &Path) -> MenuResult<Self> {
        debug!(path = %path.display(), "reading menu file");
        let text = fs::read_to_string(path).map_err(|e| MenuError::DocumentLoad {
            path: Some(path.to_path_buf()),
            detail: e.to_string(),
        })?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn document(&self) -> MenuResult<MenuDocument<'_>> {
        MenuDocument::parse(&self.text).map_err(|err| match err {
            MenuError::DocumentLoad { detail, .. } => MenuError::DocumentLoad {
                path: self.path.clone(),
                detail,
            },
            other => other,
        })
    }
}

/// Parsed menu document
pub struct MenuDocument<'input> {
    doc: Document<'input>,
}

impl<'input> MenuDocument<'input> {
    pub fn parse(text: &'input str) -> MenuResult<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let doc = Document::parse_with_options(text, options).map_err(|e| {
            MenuError::DocumentLoad {
                path: None,
                detail: e.to_string(),
            }
        })?;

        debug!(nodes = doc.descendants().count(), "parsed menu document");
        Ok(Self { doc })
    }

    /// The `item` children of a `<menu>` root, in document order.
    ///
    /// A document whose root is not `<menu>` simply has no items.
    pub fn top_level_items(&self) -> Vec<XmlMenuItem<'_, 'input>> {
        let root = self.doc.root_element();
        if root.tag_name().name() != MENU_TAG {
            debug!(root = root.tag_name().name(), "root element is not <menu>");
            return Vec::new();
        }

        child_elements(root, ITEM_TAG).map(XmlMenuItem::new).collect()
    }
}

impl std::fmt::Debug for MenuDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuDocument")
            .field("root", &self.doc.root_element().tag_name().name())
            .finish()
    }
}

/// An `<item>` element seen through [`MenuNode`]
#[derive(Debug, Clone, Copy)]
pub struct XmlMenuItem<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> XmlMenuItem<'a, 'input> {
    fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    fn malformed(&self, field: MenuField) -> MenuError {
        let pos = self.node.document().text_pos_at(self.node.range().start);
        MenuError::MalformedMenuItem {
            field,
            line: pos.row,
            column: pos.col,
        }
    }

    fn first_child(&self, name: &'static str) -> Option<Node<'a, 'input>> {
        child_elements(self.node, name).next()
    }
}

impl MenuNode for XmlMenuItem<'_, '_> {
    fn display_name(&self) -> MenuResult<String> {
        let element = self
            .first_child(DISPLAY_NAME_TAG)
            .ok_or_else(|| self.malformed(MenuField::DisplayName))?;

        // All text below the element, including text inside nested markup
        Ok(element
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect())
    }

    fn path(&self) -> MenuResult<String> {
        let element = self
            .first_child(PATH_TAG)
            .ok_or_else(|| self.malformed(MenuField::Path))?;

        element
            .attribute(PATH_VALUE_ATTR)
            .map(str::to_string)
            .ok_or_else(|| self.malformed(MenuField::PathValue))
    }

    fn children(&self) -> Option<Vec<Self>> {
        let submenu = self.first_child(SUBMENU_TAG)?;
        Some(child_elements(submenu, ITEM_TAG).map(XmlMenuItem::new).collect())
    }
}

fn child_elements<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    parent
        .children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}
