//! Options controlling a reconciliation run.

/// Behavior options for [`crate::pipeline`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Record a diagnostic for every key a declared language has no value for.
    pub report_missing_values: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            report_missing_values: true,
        }
    }
}

impl ExportOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables missing-value diagnostics.
    pub fn with_missing_value_report(mut self, enabled: bool) -> Self {
        self.report_missing_values = enabled;
        self
    }
}
