//! Percent rolls - The random source behind block and critical hits

use rand::Rng;

/// Lowest value a percent roll can produce
pub const ROLL_MIN: i32 = 1;
/// Highest value a percent roll can produce
pub const ROLL_MAX: i32 = 100;

/// Uniform integer draws in `[ROLL_MIN, ROLL_MAX]`
///
/// Every `rand::Rng` is a `PercentRoll`; use [`FixedRolls`] to replay exact draws.
pub trait PercentRoll {
    fn roll_percent(&mut self) -> i32;
}

impl<R: Rng> PercentRoll for R {
    fn roll_percent(&mut self) -> i32 {
        self.gen_range(ROLL_MIN..=ROLL_MAX)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedRolls {
    rolls: Vec<i32>,
    next: usize,
}

impl FixedRolls {
    /// Create a replay sequence; an empty sequence always rolls [`ROLL_MAX`]
    pub fn new(rolls: Vec<i32>) -> Self {
        FixedRolls {
            rolls,
            next: 0,
        }
    }

    /// Every draw returns the same value
    pub fn always(roll: i32) -> Self {
        Self::new(vec![roll])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl PercentRoll for FixedRolls {
    fn roll_percent(&mut self) -> i32 {
        if self.rolls.is_empty() {
            return ROLL_MAX;
        }
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let roll = rng.roll_percent();
            assert!((ROLL_MIN..=ROLL_MAX).contains(&roll));
        }
    }

    #[test]
    fn test_fixed_rolls_cycle() {
        let mut rolls = FixedRolls::new(vec![3, 50]);
        assert_eq!(rolls.roll_percent(), 3);
        assert_eq!(rolls.roll_percent(), 50);
        assert_eq!(rolls.roll_percent(), 3);
        assert_eq!(rolls.draws(), 3);
    }

    #[test]
    fn test_empty_fixed_rolls() {
        let mut rolls = FixedRolls::new(Vec::new());
        assert_eq!(rolls.roll_percent(), ROLL_MAX);
    }
}
