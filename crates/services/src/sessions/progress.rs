use serde::Serialize;

/// Aggregated view of one attempt, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub score: u32,
    pub missed: usize,
    pub awaiting_submit: bool,
    pub is_complete: bool,
}
