use serde::Deserialize;

/// Options for track analysis output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Include the parsed point list in the output (default: true)
    #[serde(default = "default_true")]
    pub include_points: bool,

    /// Include elevation on each exported point (default: true).
    /// Only affects the exported point list, never the gain computation.
    #[serde(default = "default_true")]
    pub include_elevation: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_points: true,
            include_elevation: true,
        }
    }
}

fn default_true() -> bool {
    true
}
