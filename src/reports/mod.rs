/*!
Reports produced by a solve: the status/model/statistics payload returned to both
programmatic callers and the CLI.
*/

use crate::tableau::model::Model;

/// How an expansion terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The tableau saturated normally; `satisfiable` and `models` are complete.
    Ok,

    /// The configured time limit was reached before saturation.
    Timeout,

    /// The configured branch or depth bound was reached before saturation.
    Exhausted,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Timeout => write!(f, "timeout"),
            Status::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Counters describing the work a solve did, independent of its outcome.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Stats {
    /// Total branches ever created, including the seed branch and any later closed
    /// or subsumption-pruned.
    pub branches_created: usize,

    /// Total rule applications (one per non-atomic signed formula processed).
    pub rule_applications: usize,

    pub elapsed_ms: u128,
}

/// The outcome of a `solve` call.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SolveResult {
    pub satisfiable: bool,
    pub models: Vec<Model>,
    pub status: Status,
    pub stats: Stats,
}

/// `entails`'s three-valued result: a definite verdict, or `Unknown` when a resource
/// bound was hit before every designated-sign check could complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tristate {
    True,
    False,
    Unknown,
}

impl std::fmt::Display for Tristate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tristate::True => write!(f, "true"),
            Tristate::False => write!(f, "false"),
            Tristate::Unknown => write!(f, "unknown"),
        }
    }
}
