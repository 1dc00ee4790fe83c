/// Aggregated view of Study session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StudyProgress {
    pub total: usize,
    pub known: usize,
    pub unknown: usize,
    pub remaining: usize,
    /// One-based counter for the card on screen, capped at `total`.
    pub position: usize,
    pub is_complete: bool,
}

impl StudyProgress {
    /// Share of cards marked known, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.known as f64 / self.total as f64;
        ratio
    }
}
