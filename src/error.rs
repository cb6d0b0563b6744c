//! Error types for xmlmenu
//!
//! Every failure aborts the whole run; nothing is rendered for a menu that
//! cannot be read completely.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu loading and rendering
#[derive(Error, Debug)]
pub enum MenuError {
    /// Wrong number of command line arguments
    #[error(
        "This application requires two arguments: a path to a menu .xml file (e.g. \"c:\\schedaeromenu.xml\") and an active path to match (e.g. \"/default.aspx\")"
    )]
    Usage,

    /// Menu file does not exist or is not a regular file
    #[error("The application failed to find the xml file with the given path: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Menu file exists but could not be read or parsed
    #[error("The application failed to load the xml file: {detail}")]
    DocumentLoad {
        path: Option<PathBuf>,
        detail: String,
    },

    /// An `item` element lacks its display name or path
    #[error("Malformed menu item at {line}:{column}: missing {field}")]
    MalformedMenuItem {
        field: MenuField,
        line: u32,
        column: u32,
    },

    /// Resolved menu could not be encoded as JSON
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Required parts of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    DisplayName,
    Path,
    PathValue,
}

impl std::fmt::Display for MenuField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuField::DisplayName => write!(f, "<displayName> element"),
            MenuField::Path => write!(f, "<path> element"),
            MenuField::PathValue => write!(f, "value attribute on <path>"),
        }
    }
}
