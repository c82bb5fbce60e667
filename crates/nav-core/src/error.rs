use thiserror::Error;

/// Errors produced by the navigation core.
///
/// These are expected conditions and are always returned as values; the core
/// never panics for any of them. Out-of-memory or indexing bugs are
/// programmer errors and abort as usual.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    /// The obstacle rectangle has non-positive area.
    #[error("obstacle rectangle has non-positive area")]
    InvalidObstacle,

    /// The referenced obstacle id is not registered.
    #[error("referenced obstacle id is not registered")]
    UnknownObstacle,

    /// The start cell lies on a static obstacle.
    #[error("start cell is statically blocked")]
    StartBlocked,

    /// The goal cell is blocked and no walkable cell exists within the
    /// substitution radius.
    #[error("goal cell is blocked and no walkable substitute was found")]
    GoalUnreachable,

    /// The start's connected component does not contain the goal.
    #[error("no path exists between start and goal")]
    NoPath,

    /// The search expanded its node budget without reaching the goal.
    #[error("search node budget exceeded")]
    NodeBudgetExceeded,

    /// The cancellation token fired during the search.
    #[error("request was cancelled")]
    Cancelled,
}
