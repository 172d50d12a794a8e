//! Scoring and health bookkeeping.

pub const MAX_HEALTH: u32 = 100;
const HEALTH_PER_HIT: u32 = 2;
const HEALTH_PER_MISS: u32 = 15;
const BASE_POINTS: u64 = 100;
const GOOD_CUT_BONUS: u64 = 50;

/// Multiplier earned by a running combo.
pub fn multiplier_for_combo(combo: u32) -> u32 {
    match combo {
        0..=10 => 1,
        11..=20 => 2,
        21..=30 => 4,
        _ => 8,
    }
}

/// Score, combo and health of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u64,
    pub combo: u32,
    pub multiplier: u32,
    pub health: u32,
    pub max_combo: u32,
    pub hit_count: u32,
    pub good_count: u32,
    pub miss_count: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            combo: 0,
            multiplier: 1,
            health: MAX_HEALTH,
            max_combo: 0,
            hit_count: 0,
            good_count: 0,
            miss_count: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply a hit. Points use the multiplier in effect before the hit.
    /// Returns the points awarded.
    pub fn apply_hit(&mut self, good: bool) -> u64 {
        let base = if good {
            BASE_POINTS + GOOD_CUT_BONUS
        } else {
            BASE_POINTS
        };
        let points = base * self.multiplier as u64;

        self.score += points;
        self.combo += 1;
        self.multiplier = multiplier_for_combo(self.combo);
        self.health = (self.health + HEALTH_PER_HIT).min(MAX_HEALTH);

        self.hit_count += 1;
        if good {
            self.good_count += 1;
        }
        self.max_combo = self.max_combo.max(self.combo);
        points
    }

    /// Apply a miss. Returns `true` when health is exhausted.
    pub fn apply_miss(&mut self) -> bool {
        self.combo = 0;
        self.multiplier = 1;
        self.health = self.health.saturating_sub(HEALTH_PER_MISS);
        self.miss_count += 1;
        self.is_depleted()
    }

    pub fn is_depleted(&self) -> bool {
        self.health == 0
    }
}
