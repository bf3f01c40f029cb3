//! Sources of randomness for maze carving.
//!
//! Everything random in the crate goes through a `RandomSource` so that callers can pin the output: any `rand::Rng`
//! works, seeded or not, and `ScriptedSource` replays an exact list of choices.

use rand::Rng;

pub trait RandomSource {
    /// A uniformly distributed index in the range `[0, bound)`.
    ///
    /// `bound` must be greater than zero.
    fn uniform_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed cycle of choices, each reduced modulo the requested bound.
///
/// An empty script behaves as if it were `[0]`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> ScriptedSource {
        let script = if script.is_empty() { vec![0] } else { script };
        ScriptedSource {
            script,
            position: 0,
        }
    }

    /// Always chooses the first index.
    pub fn zeros() -> ScriptedSource {
        ScriptedSource::new(vec![0])
    }

    /// How many choices have been made so far.
    #[inline]
    pub fn choices_made(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_index(&mut self, bound: usize) -> usize {
        let choice = self.script[self.position % self.script.len()];
        self.position += 1;
        choice % bound
    }
}

/// Fisher-Yates shuffle in place.
///
/// Walks `i` from the last index down to 1, swapping element `i` with an element chosen uniformly from `[0, i]`.
/// Each permutation is equally likely when the random source is uniform.
pub fn shuffle<T, R>(items: &mut [T], random_source: &mut R)
    where R: RandomSource + ?Sized
{
    for i in (1..items.len()).rev() {
        let j = random_source.uniform_index(i + 1);
        items.swap(i, j);
    }
}
