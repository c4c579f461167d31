/*!
Configuration of a solve.

All resource bounds a tableau expansion respects are collected here, rather than
threaded through the engine as separate arguments.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of branches a tableau may hold at once, open or closed.
    /// Exceeding this bound during expansion yields `Status::Exhausted` rather than
    /// continuing indefinitely.
    pub max_branches: usize,

    /// The maximum number of signed formulas queued for expansion on any single branch.
    pub max_depth: usize,

    /// A wall-clock budget for the whole solve. `None` disables the timeout.
    pub time_limit: Option<std::time::Duration>,

    /// Whether a branch subsumed by an already-open sibling branch is pruned rather
    /// than expanded further.
    pub subsumption: bool,
}

impl Default for Config {
    /// Bounds generous enough for the formulas seen in testing, small enough that a
    /// runaway expansion still terminates quickly.
    fn default() -> Self {
        Config {
            max_branches: 10_000,
            max_depth: 100_000,
            time_limit: Some(std::time::Duration::from_secs(10)),
            subsumption: true,
        }
    }
}
