//! Source of uniform randomness for body creation.
//!
//! The world never constructs random engines itself; it asks a
//! [`UnitSampler`] for samples. Production code hands it `rand`'s thread
//! RNG, tests hand it a [`SequenceSampler`] so derived positions and
//! velocities can be asserted exactly.

use std::ops::Range;

use rand::{
    Rng,
    rngs::{StdRng, ThreadRng},
};

pub trait UnitSampler {
    /// A uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// A uniform sample in `range`.
    fn uniform(&mut self, range: Range<f32>) -> f32 {
        range.start + self.unit() * (range.end - range.start)
    }
}

impl UnitSampler for ThreadRng {
    fn unit(&mut self) -> f32 {
        self.random()
    }
}

impl UnitSampler for StdRng {
    fn unit(&mut self) -> f32 {
        self.random()
    }
}

/// Replays a fixed list of unit samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSampler {
    values: Vec<f32>,
    next: usize,
}

impl SequenceSampler {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "sequence sampler needs at least one value");
        Self { values, next: 0 }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl UnitSampler for SequenceSampler {
    fn unit(&mut self) -> f32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
