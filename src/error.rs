//! Error types reported before mining starts.
//!
//! Validation is fail-fast: a run is never constructed from an invalid
//! configuration. Anomalies discovered *during* mining (an empty dataset, a
//! first pass where nothing qualifies) are not errors — they degrade to an
//! empty result, because "no pattern found" is a legitimate outcome.

/// A tunable parameter is outside its legal range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{name}` must lie in [0, 1], got {value}")]
    TunableOutOfRange { name: &'static str, value: f64 },
}

/// A cannot-be-together constraint group is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    #[error("cannot-be-together group #{group} has no units")]
    EmptyGroup { group: usize },
    #[error("cannot-be-together group #{group} contains an empty unit")]
    EmptyUnit { group: usize },
}

/// Any error that can abort the construction of a mining run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}
