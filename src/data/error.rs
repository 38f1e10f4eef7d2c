use thiserror::Error;

/// Failures surfaced by the data layer and the chart builders.
#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    /// The stadium file is missing, unreadable, or does not match the schema.
    #[error("stadium data unavailable ({path}): {reason}")]
    DataUnavailable { path: String, reason: String },

    /// A chart was requested over data with nothing to show.
    #[error("cannot build {0}: no data")]
    EmptyInput(&'static str),

    /// Labels and values passed to a chart builder do not line up.
    #[error("cannot build {chart}: {labels} labels for {values} values")]
    MismatchedInput {
        chart: &'static str,
        labels: usize,
        values: usize,
    },
}
