//! Deterministic random number generation for dice and mission draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Context streams**: Independent sequences for different purposes, so
//!   drawing a mission never shifts the dice sequence
//!
//! ```
//! use territory_war::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_dice(3), b.roll_dice(3));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
/// Golden-ratio multiplier spreading context hashes over the seed space.
const CONTEXT_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Dice rolled by one side in one battle round (never more than three).
pub type DiceRoll = SmallVec<[u8; 3]>;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is kept so the game can report it and be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_hash = context
            .bytes()
            .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));

        Self::new(self.seed.wrapping_add(context_hash.wrapping_mul(CONTEXT_MIX)))
    }

    /// Roll a single six-sided die (1..=6).
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll `count` dice.
    pub fn roll_dice(&mut self, count: usize) -> DiceRoll {
        (0..count).map(|_| self.roll_die()).collect()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
