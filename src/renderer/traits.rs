use crate::renderer::components::IndentationHelper;

/// Spaces added per nesting level unless configured otherwise
pub const DEFAULT_INDENT_WIDTH: usize = 5;

/// Widest indent unit accepted; wider requests are clamped
pub const MAX_INDENT_WIDTH: usize = 64;

/// Configuration context for rendering operations
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub depth: usize,
    pub indent_width: usize,
    pub format: OutputFormat,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            depth: 0,
            indent_width: DEFAULT_INDENT_WIDTH,
            format: OutputFormat::Text,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            indent_width: self.indent_width,
            format: self.format,
        }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width.min(MAX_INDENT_WIDTH);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Context for the children of the item rendered at this depth
    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        IndentationHelper::indent_for_depth(self.depth, self.indent_width)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Core rendering trait for resolved menu entries
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
