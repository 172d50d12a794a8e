use std::fmt;

use serde::Serialize;

use crate::score::ScoreState;

/// Letter grade from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    C,
    B,
    A,
    S,
}

impl Rank {
    pub fn from_score(score: u64) -> Self {
        if score > 50_000 {
            Rank::S
        } else if score > 20_000 {
            Rank::A
        } else if score > 5_000 {
            Rank::B
        } else {
            Rank::C
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        };
        f.write_str(s)
    }
}

/// Summary of a finished playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    pub cleared: bool,
    pub score: u64,
    pub max_combo: u32,
    pub hit_count: u32,
    pub good_count: u32,
    pub miss_count: u32,
    pub total_notes: usize,
    pub rank: Rank,
}

impl PlayResult {
    pub fn new(cleared: bool, score: &ScoreState, total_notes: usize) -> Self {
        Self {
            cleared,
            score: score.score,
            max_combo: score.max_combo,
            hit_count: score.hit_count,
            good_count: score.good_count,
            miss_count: score.miss_count,
            total_notes,
            rank: Rank::from_score(score.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(Rank::from_score(0), Rank::C);
        assert_eq!(Rank::from_score(5_000), Rank::C);
        assert_eq!(Rank::from_score(5_001), Rank::B);
        assert_eq!(Rank::from_score(20_001), Rank::A);
        assert_eq!(Rank::from_score(50_000), Rank::A);
        assert_eq!(Rank::from_score(50_001), Rank::S);
    }

    #[test]
    fn test_result_from_score() {
        let mut score = ScoreState::new();
        score.apply_hit(true);
        score.apply_miss();
        let result = PlayResult::new(false, &score, 10);
        assert_eq!(result.hit_count, 1);
        assert_eq!(result.good_count, 1);
        assert_eq!(result.miss_count, 1);
        assert_eq!(result.max_combo, 1);
        assert_eq!(result.rank, Rank::C);
    }
}
