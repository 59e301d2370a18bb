use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Largest value a source may hand out.
const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// Source of uniformly distributed numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter over any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, wrapping around at the end. Values are
/// clamped into `[0, 1)`; an empty script yields zeros.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, MAX_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_wraps_and_clamps() {
        let mut src = ScriptedSource::new([0.25, 2.0, -1.0]);
        assert_eq!(src.next_unit(), 0.25);
        assert_eq!(src.next_unit(), MAX_UNIT);
        assert_eq!(src.next_unit(), 0.0);
        assert_eq!(src.next_unit(), 0.25);
        assert_eq!(src.draws(), 4);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut src = ScriptedSource::default();
        assert_eq!(src.next_unit(), 0.0);
    }

    #[test]
    fn rng_source_stays_in_unit_interval() {
        let mut src = RngSource::seeded(7);
        for _ in 0..1000 {
            let u = src.next_unit();
            assert!((0.0..1.0).contains(&u), "{u}");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
