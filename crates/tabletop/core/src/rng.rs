//! Injectable randomness.
//!
//! Every randomized operation (`Dice::roll`, `Deque::shuffle`,
//! `Deque::get_random`, ...) takes a `&mut dyn RandomSource` argument instead
//! of reaching for a global generator. A test substitutes a seeded source for
//! exactly the calls it passes it to; nothing global is mutated, so nothing
//! has to be restored afterwards.
//!
//! Two implementations are provided:
//!
//! - [`PcgSource`]: tiny deterministic PCG-XSH-RR generator whose output is
//!   stable across platforms and `rand` releases (used for literal
//!   expectations in tests and replays)
//! - [`RandSource`]: adapter over any `rand` generator (seeded `StdRng`,
//!   entropy-backed `StdRng`, `ThreadRng`)

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Uniform random choices used by the tools.
///
/// The provided range methods reject the top partial block of raw values, so
/// every outcome is equally likely regardless of the bound.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Next raw 64-bit value (two 32-bit draws, high word first).
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        (high << 32) | u64::from(self.next_u32())
    }

    /// Uniform index in `0..upper`.
    ///
    /// `upper` must be non-zero; callers check for empty collections first.
    fn below(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "below() called with an empty range");
        if let Ok(bound) = u32::try_from(upper) {
            return (self.roll_die(bound) - 1) as usize;
        }
        let upper = upper as u64;
        let excess = (u64::MAX % upper + 1) % upper;
        loop {
            let value = self.next_u64();
            if value <= u64::MAX - excess {
                return (value % upper) as usize;
            }
        }
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        let excess = (u32::MAX % sides + 1) % sides;
        loop {
            let value = self.next_u32();
            if value <= u32::MAX - excess {
                return value % sides + 1;
            }
        }
    }
}

/// Uniformly permutes `items` in place (Fisher–Yates).
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state. Each call advances
/// the state once, so a given seed always yields the same sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgSource {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

/// Adapter exposing a `rand` generator as a [`RandomSource`].
///
/// Range sampling is delegated to `rand`, so it is unbiased.
#[derive(Clone, Debug)]
pub struct RandSource<R>(pub R);

impl RandSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RandSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: RngCore> RandomSource for RandSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn below(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }

    fn roll_die(&mut self, sides: u32) -> u32 {
        self.0.gen_range(1..=sides)
    }
}
