use rand::{Rng, RngCore};

/// Uniform randomness in `[0, 1)` consumed by the spawner.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "sequence source needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always yields `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn sequence_wraps() {
        let mut source = SequenceSource::new(vec![0.25, 0.75]);
        let drawn: Vec<f32> = (0..5).map(|_| source.next_unit()).collect();

        assert_eq!(drawn, vec![0.25, 0.75, 0.25, 0.75, 0.25]);
        assert_eq!(source.drawn(), 5);
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn empty_sequence_is_rejected() {
        SequenceSource::new(Vec::new());
    }

    #[test]
    fn seeded_rng_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
