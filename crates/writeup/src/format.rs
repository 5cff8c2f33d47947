//! Output format selection for the shortcut build/generate calls.

use serde::{Deserialize, Serialize};

/// Output format for the renderer-picking shortcuts.
///
/// The fully general entry points take renderer values directly
/// ([`TableBuilder::build_with`](crate::TableBuilder::build_with) and
/// friends); this enum drives the convenience calls that cover the common
/// console/Markdown cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned plain text for terminal output.
    Console,
    /// Markdown suitable for files.
    #[default]
    Markdown,
    /// Both console and Markdown.
    Both,
}
