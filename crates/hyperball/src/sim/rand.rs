//! Seeded random turn streams for soak runs and benches.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so a run can be replayed or indexed into a family of runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Turn;

/// Replay token to make turn streams reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Turn-stream configuration.
#[derive(Clone, Copy, Debug)]
pub struct TurnCfg {
    /// Per-tick probability of any turn. Clamped to [0, 1].
    pub turn_prob: f64,
}

impl Default for TurnCfg {
    fn default() -> Self {
        Self { turn_prob: 0.02 }
    }
}

/// Draws `Option<Turn>` per tick, left and right equally likely.
#[derive(Clone, Debug)]
pub struct TurnSampler {
    rng: StdRng,
    turn_prob: f64,
}

impl TurnSampler {
    pub fn new(cfg: TurnCfg, tok: ReplayToken) -> Self {
        Self {
            rng: tok.to_std_rng(),
            turn_prob: cfg.turn_prob.clamp(0.0, 1.0),
        }
    }

    pub fn draw(&mut self) -> Option<Turn> {
        if self.rng.gen::<f64>() < self.turn_prob {
            Some(if self.rng.gen::<bool>() {
                Turn::Left
            } else {
                Turn::Right
            })
        } else {
            None
        }
    }
}
