//! Per-session optimistic vote tracking.

use std::collections::HashMap;

use parking_lot::Mutex;
use scroller_models::VoteKind;

/// In-memory record of the current user's vote per post. Never persisted:
/// a new process is vote-eligible again, mirroring the original's
/// per-render-session flag.
#[derive(Default)]
pub struct VoteRegistry {
    votes: Mutex<HashMap<String, VoteKind>>,
}

impl VoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a vote optimistically. Returns the adjusted (likes, dislikes)
    /// counts, or `None` when the same vote was already cast this session.
    /// Switching direction also undoes the previous vote's count.
    pub fn apply(
        &self,
        post_id: &str,
        kind: VoteKind,
        likes: i64,
        dislikes: i64,
    ) -> Option<(i64, i64)> {
        let mut votes = self.votes.lock();
        let previous = votes.get(post_id).copied();

        if previous == Some(kind) {
            return None;
        }

        let adjusted = match kind {
            VoteKind::Like => (
                likes + 1,
                if previous == Some(VoteKind::Dislike) {
                    dislikes - 1
                } else {
                    dislikes
                },
            ),
            VoteKind::Dislike => (
                if previous == Some(VoteKind::Like) {
                    likes - 1
                } else {
                    likes
                },
                dislikes + 1,
            ),
        };

        votes.insert(post_id.to_string(), kind);
        Some(adjusted)
    }

    /// The vote recorded for a post this session, if any.
    pub fn vote_for(&self, post_id: &str) -> Option<VoteKind> {
        self.votes.lock().get(post_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_like_increments() {
        let registry = VoteRegistry::new();
        assert_eq!(
            registry.apply("p1", VoteKind::Like, 3, 1),
            Some((4, 1))
        );
        assert_eq!(registry.vote_for("p1"), Some(VoteKind::Like));
    }

    #[test]
    fn repeated_vote_is_rejected() {
        let registry = VoteRegistry::new();
        registry.apply("p1", VoteKind::Like, 0, 0);
        assert_eq!(registry.apply("p1", VoteKind::Like, 1, 0), None);
    }

    #[test]
    fn switching_vote_undoes_the_other_counter() {
        let registry = VoteRegistry::new();
        registry.apply("p1", VoteKind::Dislike, 3, 1);
        // Counts as seen after the first optimistic update.
        assert_eq!(
            registry.apply("p1", VoteKind::Like, 3, 2),
            Some((4, 1))
        );
    }

    #[test]
    fn posts_are_tracked_independently() {
        let registry = VoteRegistry::new();
        registry.apply("p1", VoteKind::Like, 0, 0);
        assert_eq!(
            registry.apply("p2", VoteKind::Like, 5, 5),
            Some((6, 5))
        );
    }
}
