//! High score leaderboard
//!
//! Tracks the top 10 runs of the current session. Kept in memory only.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Wave reached
    pub wave: u32,
    /// Which run of the session produced it (1-based)
    pub run: u32,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a score. Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u64, wave: u32, run: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, wave, run };

        // Ties keep the earlier run ahead
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 1, 1), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_ranks_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(100, 1, 1), Some(1));
        assert_eq!(scores.add_score(300, 3, 2), Some(1));
        assert_eq!(scores.add_score(200, 2, 3), Some(2));
        assert_eq!(scores.top_score(), Some(300));
        let order: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![300, 200, 100]);
    }

    #[test]
    fn test_truncates_to_max() {
        let mut scores = HighScores::new();
        for i in 1..=15u64 {
            scores.add_score(i * 50, 1, i as u32);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert!(!scores.qualifies(50));
        assert_eq!(scores.entries.last().map(|e| e.score), Some(300));
    }
}
