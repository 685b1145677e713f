//! Seeded Fisher-Yates shuffle.
//!
//! The generator and the swap order are fixed: any change reorders every
//! client's feed, so tokens handed out before the change would stop resuming
//! where they left off.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Linear congruential generator over `u32` state.
///
/// # Examples
///
/// ```
/// use mirage_core::Lcg;
///
/// let mut a = Lcg::new(7);
/// let mut b = Lcg::new(7);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Start a generator at `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the new state scaled into `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }

    /// Advance and return an index in `[0, bound)`.
    ///
    /// `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_unit() * bound as f64).floor() as usize
    }
}

/// Shuffle `items` in place, walking the tail index down from the end.
pub fn shuffle_in_place<T>(items: &mut [T], seed: u32) {
    let mut rng = Lcg::new(seed);
    let mut remaining = items.len();
    while remaining != 0 {
        let pick = rng.next_index(remaining);
        remaining -= 1;
        items.swap(remaining, pick);
    }
}

/// Return a shuffled copy of `items`; the input is left untouched.
///
/// # Examples
///
/// ```
/// use mirage_core::seeded_shuffle;
///
/// let tour = seeded_shuffle(&["a", "b", "c", "d", "e"], 42);
/// assert_eq!(tour, ["c", "d", "e", "a", "b"]);
/// ```
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, seed);
    shuffled
}
