use crate::error::MenuResult;

/// Read-only view of one menu entry.
///
/// Implemented once against the parsed XML tree; the matcher and renderer
/// only ever talk to this trait.
pub trait MenuNode: Sized {
    /// Text shown for the entry.
    fn display_name(&self) -> MenuResult<String>;

    /// Value compared against the active path.
    fn path(&self) -> MenuResult<String>;

    /// Child entries in document order.
    ///
    /// `None` means there is no submenu container at all. `Some(vec![])` means
    /// the container exists but holds no items, which still counts as having
    /// children.
    fn children(&self) -> Option<Vec<Self>>;
}

// Element and attribute names of the menu format
pub const MENU_TAG: &str = "menu";
pub const ITEM_TAG: &str = "item";
pub const DISPLAY_NAME_TAG: &str = "displayName";
pub const PATH_TAG: &str = "path";
pub const PATH_VALUE_ATTR: &str = "value";
pub const SUBMENU_TAG: &str = "subMenu";
