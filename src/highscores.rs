//! High score leaderboard
//!
//! Every finished session that scored is ranked here for the run summary.
//! Kept in memory for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Hostiles knocked out
    pub score: u32,
    /// Session number the score was set in (1-based)
    pub session: u32,
    /// How long the session lasted, in simulation seconds
    pub duration_secs: f32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank (0-based) a score would take, ties going below earlier entries
    fn slot_for(&self, score: u32) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    /// Whether a finished session's score earns a place on the board
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0 && self.slot_for(score) < MAX_HIGH_SCORES
    }

    /// Record a finished session; returns its 1-based rank if it made the board
    pub fn add_score(&mut self, score: u32, session: u32, duration_secs: f32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let slot = self.slot_for(score);
        self.entries.insert(
            slot,
            HighScoreEntry {
                score,
                session,
                duration_secs,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 1, 3.0), None);
        assert!(scores.entries.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 1, 10.0), Some(1));
        assert_eq!(scores.add_score(9, 2, 20.0), Some(1));
        assert_eq!(scores.add_score(7, 3, 15.0), Some(2));
        assert_eq!(scores.add_score(7, 4, 1.0), Some(3));
        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![9, 7, 7, 5]);
        assert_eq!(scores.entries[1].session, 3);
    }

    #[test]
    fn test_truncates_to_max() {
        let mut scores = HighScores::new();
        for s in 1..=15 {
            scores.add_score(s, s, 1.0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(6));
        assert!(!scores.qualifies(6));
        assert!(scores.qualifies(7));
    }
}
