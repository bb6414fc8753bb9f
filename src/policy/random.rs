//! Injectable randomness for move policies.

use crate::core::GameRng;

/// Source of the random draws a policy makes.
///
/// Production code uses `GameRng`; tests can script the draws to force a
/// particular branch.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.gen_unit()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.gen_index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}
