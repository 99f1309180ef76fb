use rand::Rng;

use crate::puzzle::{Difficulty, Value};

/// An inclusive range of targets, sampled uniformly
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    /// The smallest target in the band
    pub min: Value,
    /// The largest target in the band
    pub max: Value,
}

impl Band {
    /// Creates a band from `min` to `max`, inclusive
    pub const fn new(min: Value, max: Value) -> Self {
        Self { min, max }
    }

    /// True if `value` is in the band
    pub fn contains(self, value: Value) -> bool {
        self.min <= value && value <= self.max
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Value {
        rng.gen_range(self.min, self.max + 1)
    }
}

/// How targets are sampled for a difficulty
///
/// Most targets come from the primary band. The rest come from a band just below or just above
/// it, picked by a coin flip weighted by `low_share`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetDistribution {
    /// The band most targets are drawn from
    pub primary: Band,
    /// The probability of drawing from the primary band
    pub primary_weight: f64,
    /// The band below the primary band
    pub low: Band,
    /// The band above the primary band
    pub high: Band,
    /// The probability of drawing from the low band when not drawing from the primary band
    pub low_share: f64,
}

const EASY: TargetDistribution = TargetDistribution {
    primary: Band::new(10, 65),
    primary_weight: 0.8,
    low: Band::new(5, 9),
    high: Band::new(66, 99),
    low_share: 0.5,
};

const MEDIUM: TargetDistribution = TargetDistribution {
    primary: Band::new(15, 90),
    primary_weight: 0.85,
    low: Band::new(10, 14),
    high: Band::new(91, 125),
    low_share: 0.5,
};

const HARD: TargetDistribution = TargetDistribution {
    primary: Band::new(24, 120),
    primary_weight: 0.9,
    low: Band::new(20, 23),
    high: Band::new(121, 149),
    low_share: 0.5,
};

impl TargetDistribution {
    /// The distribution used for `difficulty`
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }

    /// Change the probability of the low band relative to the high band
    pub fn with_low_share(mut self, low_share: f64) -> Self {
        self.low_share = low_share;
        self
    }

    /// The smallest target that can be drawn
    pub fn min(&self) -> Value {
        self.low.min
    }

    /// The largest target that can be drawn
    pub fn max(&self) -> Value {
        self.high.max
    }

    /// Draw a target
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        if rng.gen::<f64>() < self.primary_weight {
            self.primary.sample(rng)
        } else if rng.gen::<f64>() < self.low_share {
            self.low.sample(rng)
        } else {
            self.high.sample(rng)
        }
    }
}
