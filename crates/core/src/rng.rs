//! RNG module - pair generation and the lookahead queue
//!
//! Each pair draws its two colors independently and uniformly from the four
//! primary colors. The queue keeps `depth` pairs ahead of the active piece so the
//! "next" and "next-next" pairs are always known before they are needed.
//!
//! Also provides a simple LCG for deterministic testing.

use std::collections::VecDeque;

use crate::types::{Cell, ColorPair, PRIMARY_COLORS, QUEUE_DEPTH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Lookahead queue of upcoming pairs
#[derive(Debug, Clone)]
pub struct PairQueue {
    pending: VecDeque<ColorPair>,
    depth: usize,
    rng: SimpleRng,
    seed: u32,
}

impl PairQueue {
    /// Create an empty queue; nothing is generated until the first refill
    pub fn new(seed: u32) -> Self {
        Self::with_depth(seed, QUEUE_DEPTH)
    }

    /// Create an empty queue with a custom lookahead depth (at least 1)
    pub fn with_depth(seed: u32, depth: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(depth + 1),
            depth: depth.max(1),
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    fn random_color(&mut self) -> Cell {
        PRIMARY_COLORS[self.rng.next_range(PRIMARY_COLORS.len() as u32) as usize]
    }

    fn random_pair(&mut self) -> ColorPair {
        let pivot = self.random_color();
        let satellite = self.random_color();
        ColorPair::new(pivot, satellite)
    }

    /// Append one freshly generated pair at the back
    pub fn push_random(&mut self) {
        let pair = self.random_pair();
        self.pending.push_back(pair);
    }

    /// Generate pairs until the lookahead depth is reached.
    ///
    /// Returns the number of pairs generated.
    pub fn fill(&mut self) -> usize {
        let mut generated = 0;
        while self.pending.len() < self.depth {
            self.push_random();
            generated += 1;
        }
        generated
    }

    /// Whether the lookahead has been established
    pub fn is_primed(&self) -> bool {
        self.pending.len() >= self.depth
    }

    /// Refill one pair, then take the front pair.
    ///
    /// The refill happens first so the queue never drops below its depth.
    pub fn advance(&mut self) -> Option<ColorPair> {
        self.push_random();
        self.pending.pop_front()
    }

    /// Read-only view of the next `n` pairs (fewer if the queue is shorter)
    pub fn peek(&self, n: usize) -> Vec<ColorPair> {
        self.pending.iter().take(n).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Seed the queue was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Replace the pending pairs (for scripted scenarios and tests).
    ///
    /// A script shorter than the depth is topped up with generated pairs behind it.
    pub fn set_pending(&mut self, pairs: &[ColorPair]) {
        self.pending.clear();
        self.pending.extend(pairs.iter().copied());
        self.fill();
    }
}

impl Default for PairQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_queue_starts_empty_and_fills_to_depth() {
        let mut queue = PairQueue::new(1);
        assert!(queue.is_empty());
        assert!(!queue.is_primed());

        assert_eq!(queue.fill(), QUEUE_DEPTH);
        assert_eq!(queue.len(), QUEUE_DEPTH);
        assert!(queue.is_primed());

        // Already full: nothing more to do.
        assert_eq!(queue.fill(), 0);
    }

    #[test]
    fn test_queue_advance_keeps_depth() {
        let mut queue = PairQueue::new(99);
        queue.fill();

        for _ in 0..50 {
            let front = queue.peek(1)[0];
            let taken = queue.advance().unwrap();
            assert_eq!(front, taken);
            assert_eq!(queue.len(), QUEUE_DEPTH);
        }
    }

    #[test]
    fn test_queue_only_spawns_primary_colors() {
        let mut queue = PairQueue::new(4242);
        queue.fill();
        for _ in 0..500 {
            let pair = queue.advance().unwrap();
            assert!(PRIMARY_COLORS.contains(&pair.pivot));
            assert!(PRIMARY_COLORS.contains(&pair.satellite));
        }
    }

    #[test]
    fn test_queue_draws_every_primary_color() {
        let mut queue = PairQueue::new(3);
        queue.fill();
        let mut seen = Vec::new();
        for _ in 0..200 {
            let pair = queue.advance().unwrap();
            seen.push(pair.pivot);
            seen.push(pair.satellite);
        }
        for color in PRIMARY_COLORS {
            assert!(seen.contains(&color), "Missing color: {:?}", color);
        }
    }

    #[test]
    fn test_scripted_pairs_come_out_in_order() {
        let scripted = [
            ColorPair::new(Cell::Red, Cell::Red),
            ColorPair::new(Cell::Blue, Cell::Green),
        ];
        let mut queue = PairQueue::new(1);
        queue.set_pending(&scripted);
        assert!(queue.is_primed());
        assert_eq!(queue.advance(), Some(scripted[0]));
        assert_eq!(queue.advance(), Some(scripted[1]));
    }

    #[test]
    fn test_short_script_is_topped_up_to_depth() {
        let red = ColorPair::new(Cell::Red, Cell::Red);
        let mut queue = PairQueue::new(1);
        queue.set_pending(&[red]);
        assert_eq!(queue.len(), QUEUE_DEPTH);
        assert!(queue.is_primed());
        assert_eq!(queue.peek(1), vec![red]);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut queue = PairQueue::new(5);
        queue.fill();
        let first = queue.peek(2);
        let second = queue.peek(5);
        assert_eq!(first, second);
        assert_eq!(queue.len(), QUEUE_DEPTH);
    }
}
