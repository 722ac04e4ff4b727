/// Monotonic id source owned by the caller, never by the repository.
///
/// Once `u32::MAX` has been handed out or passed, the sequence is exhausted and
/// yields `None` rather than wrapping back to ids that may still be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<u32>,
}

impl IdSequence {
    /// Create a sequence whose first id is `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// The id the next call to [`IdSequence::next`] returns.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }

    /// Hand out the next id, or `None` once exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u32> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Make sure `id` is never handed out again.
    pub fn advance_past(&mut self, id: u32) {
        if let Some(next) = self.next {
            if id >= next {
                self.next = id.checked_add(1);
            }
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(0)
    }
}
