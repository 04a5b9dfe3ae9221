use rand::{rngs::SmallRng, SeedableRng};

/// Random source owned by a single environment or agent. Seeded for
/// reproducible runs, or drawn from OS entropy when no seed is given.
#[derive(Debug)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SEED: u64 = 1234;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = MaybeSeededRng::new(Some(SEED));
        let mut b = MaybeSeededRng::new(Some(SEED));

        let xs: Vec<f64> = (0..8).map(|_| a.get_rng().random()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn keeps_seed() {
        let rng = MaybeSeededRng::new(Some(SEED));
        assert_eq!(rng.seed(), Some(SEED));
        assert_eq!(MaybeSeededRng::new(None).seed(), None);
    }
}
