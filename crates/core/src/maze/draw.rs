//! Uniform index draws used by the generator.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Source of uniform random indices.
pub trait UniformDraw {
    /// Returns a value in `0..bound`. Callers never pass a zero bound.
    fn draw_index(&mut self, bound: usize) -> usize;
}

impl UniformDraw for ChaCha8Rng {
    fn draw_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u64() % bound as u64) as usize
    }
}

/// Replays a fixed sequence of draws, wrapping each value into the requested bound.
/// Once the sequence is exhausted every draw returns zero.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformDraw for ScriptedDraws {
    fn draw_index(&mut self, bound: usize) -> usize {
        let value = self.values.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        value % bound.max(1)
    }
}
