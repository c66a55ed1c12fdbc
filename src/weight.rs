//! Object weights and the sources that generate them.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{MAX_WEIGHT, MIN_WEIGHT};
use crate::error::{Error, Result};

/// Weight of a placed object, always within `MIN_WEIGHT..=MAX_WEIGHT`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u8);

impl Weight {
    /// Fails with [`Error::InvalidWeight`] outside `MIN_WEIGHT..=MAX_WEIGHT`
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
            Ok(Weight(value))
        } else {
            Err(Error::InvalidWeight(value))
        }
    }

    /// Weight in kilograms
    pub fn get(self) -> u8 {
        self.0
    }

    /// Weight as a float, for torque sums
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Every valid weight, lightest first
    pub fn all() -> impl Iterator<Item = Weight> {
        (MIN_WEIGHT..=MAX_WEIGHT).map(Weight)
    }
}

impl TryFrom<u8> for Weight {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Weight::new(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supplies the weight of the next object to be placed
pub trait WeightSource {
    /// Draws the next weight
    fn next_weight(&mut self) -> Weight;
}

/// Uniformly random weights
pub struct RandomWeights {
    rng: StdRng,
}

impl RandomWeights {
    /// Seeded from the operating system
    pub fn new() -> Self {
        RandomWeights {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomWeights {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomWeights {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightSource for RandomWeights {
    fn next_weight(&mut self) -> Weight {
        Weight(self.rng.random_range(MIN_WEIGHT..=MAX_WEIGHT))
    }
}

/// Replays a fixed list of weights, wrapping around at the end
pub struct CyclingWeights {
    weights: Vec<Weight>,
    next: usize,
}

impl CyclingWeights {
    /// Fails with [`Error::EmptyWeightSequence`] when `weights` is empty
    pub fn new(weights: Vec<Weight>) -> Result<Self> {
        if weights.is_empty() {
            return Err(Error::EmptyWeightSequence);
        }
        Ok(CyclingWeights { weights, next: 0 })
    }
}

impl WeightSource for CyclingWeights {
    fn next_weight(&mut self) -> Weight {
        let weight = self.weights[self.next];
        self.next = (self.next + 1) % self.weights.len();
        weight
    }
}

impl<S: WeightSource + ?Sized> WeightSource for Box<S> {
    fn next_weight(&mut self) -> Weight {
        (**self).next_weight()
    }
}
