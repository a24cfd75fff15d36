use crate::types::enums::ContentKind;
use crate::types::envelope::RequestToken;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues the per-kind request tokens that make latest-wins rendering
/// possible. Tokens for a kind are strictly increasing; a consumer keeps
/// the highest token it has rendered and drops anything older.
#[derive(Debug, Default)]
pub struct TokenSource {
    counters: [AtomicU64; 4],
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next token for `kind`. The first token issued is 1.
    pub fn next(&self, kind: ContentKind) -> RequestToken {
        RequestToken(self.counters[kind.index()].fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently issued token for `kind`, or 0 if none yet.
    pub fn current(&self, kind: ContentKind) -> RequestToken {
        RequestToken(self.counters[kind.index()].load(Ordering::Relaxed))
    }

    pub fn is_latest(&self, kind: ContentKind, token: RequestToken) -> bool {
        token == self.current(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase_per_kind() {
        let source = TokenSource::new();
        assert_eq!(source.next(ContentKind::Search), RequestToken(1));
        assert_eq!(source.next(ContentKind::Search), RequestToken(2));
        assert_eq!(source.next(ContentKind::LearningPath), RequestToken(1));
        assert_eq!(source.current(ContentKind::Search), RequestToken(2));
    }

    #[test]
    fn stale_tokens_are_not_latest() {
        let source = TokenSource::new();
        let first = source.next(ContentKind::Assessments);
        let second = source.next(ContentKind::Assessments);
        assert!(!source.is_latest(ContentKind::Assessments, first));
        assert!(source.is_latest(ContentKind::Assessments, second));
    }
}
