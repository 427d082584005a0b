//! Deterministic startup seeding.
//!
//! [`DogGenerator`] yields an endless, reproducible stream of synthetic dogs
//! from a fixed seed. [`Seeder`] writes the first `count` of them into an
//! empty store and does nothing once any data exists.
//!
//! Per dog the generator draws, in order: breed index, name index, age,
//! then one unit-interval sample that places the weight inside the breed's
//! range. Changing this order or the reference tables changes the output.
//!
//! The generator is `ChaCha12Rng`, whose stream is fixed per seed across
//! releases, unlike `rand::rngs::StdRng`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::breeds::{BREEDS, DOG_NAMES};
use crate::dog::NewDog;
use crate::error::StoreError;
use crate::store::DogStore;

/// Number of dogs written into an empty store.
pub const DEFAULT_SEED_COUNT: usize = 1000;

/// Generator seed used when none is configured.
pub const DEFAULT_RANDOM_SEED: u64 = 42;

pub const MIN_SEED_AGE: i32 = 1;
pub const MAX_SEED_AGE: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub count: usize,
    pub random_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SEED_COUNT,
            random_seed: DEFAULT_RANDOM_SEED,
        }
    }
}

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held `existing` rows; nothing was written.
    Skipped { existing: i64 },
    /// The store was empty and `inserted` rows were written.
    Seeded { inserted: usize },
}

/// Round half-up to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Reproducible stream of synthetic dogs.
pub struct DogGenerator {
    rng: ChaCha12Rng,
}

impl DogGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }
}

impl Iterator for DogGenerator {
    type Item = NewDog;

    fn next(&mut self) -> Option<NewDog> {
        let profile = &BREEDS[self.rng.random_range(0..BREEDS.len())];
        let name = DOG_NAMES[self.rng.random_range(0..DOG_NAMES.len())];
        let age = self.rng.random_range(MIN_SEED_AGE..=MAX_SEED_AGE);
        let unit: f64 = self.rng.random();
        let weight = round_one_decimal(
            profile.min_weight + unit * (profile.max_weight - profile.min_weight),
        );

        Some(NewDog {
            name: name.to_string(),
            breed: profile.breed.to_string(),
            age,
            weight,
        })
    }
}

/// Generate the first `count` dogs of the stream for `seed`.
pub fn generate_dogs(count: usize, seed: u64) -> Vec<NewDog> {
    DogGenerator::new(seed).take(count).collect()
}

/// Populates an empty store at startup.
pub struct Seeder<S> {
    store: S,
    config: SeedConfig,
}

impl<S: DogStore> Seeder<S> {
    pub fn new(store: S, config: SeedConfig) -> Self {
        Self { store, config }
    }

    /// Seed the store if it is empty.
    ///
    /// Rows are inserted one by one in generation order. The first store
    /// error stops the run; rows written before it stay in place.
    pub async fn run(&self) -> Result<SeedOutcome, StoreError> {
        let existing = self.store.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Store already populated, skipping seed");
            return Ok(SeedOutcome::Skipped { existing });
        }

        tracing::info!(
            count = self.config.count,
            random_seed = self.config.random_seed,
            "Seeding empty store"
        );

        let mut inserted = 0;
        for dog in DogGenerator::new(self.config.random_seed).take(self.config.count) {
            if let Err(e) = self.store.insert(&dog).await {
                tracing::error!(error = %e, inserted, "Seeding aborted");
                return Err(e);
            }
            inserted += 1;
        }

        tracing::info!(inserted, "Seeding complete");
        Ok(SeedOutcome::Seeded { inserted })
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_one_decimal(25.25), 25.3);
        assert_eq!(round_one_decimal(1.04), 1.0);
        assert_eq!(round_one_decimal(1.05000001), 1.1);
        assert_eq!(round_one_decimal(3.2), 3.2);
    }

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(generate_dogs(200, 42), generate_dogs(200, 42));
    }

    #[test]
    fn default_seed_stream_is_pinned() {
        let dogs = generate_dogs(3, DEFAULT_RANDOM_SEED);
        let tuples: Vec<_> = dogs
            .iter()
            .map(|d| (d.name.as_str(), d.breed.as_str(), d.age, d.weight))
            .collect();
        assert_eq!(
            tuples,
            vec![
                ("Bella", "Poodle", 4, 30.2),
                ("Honey", "Pug", 7, 6.1),
                ("Louie", "Cocker Spaniel", 6, 12.7),
            ]
        );
    }

    #[test]
    fn different_seed_different_stream() {
        assert_ne!(generate_dogs(50, 42), generate_dogs(50, 7));
    }

    #[test]
    fn prefix_is_stable() {
        let long = generate_dogs(100, DEFAULT_RANDOM_SEED);
        let short = generate_dogs(10, DEFAULT_RANDOM_SEED);
        assert_eq!(&long[..10], &short[..]);
    }

    #[test]
    fn generated_values_stay_in_range() {
        for dog in generate_dogs(DEFAULT_SEED_COUNT, DEFAULT_RANDOM_SEED) {
            let profile = BREEDS
                .iter()
                .find(|b| b.breed == dog.breed)
                .expect("breed comes from the table");
            assert!(DOG_NAMES.contains(&dog.name.as_str()));
            assert!((MIN_SEED_AGE..=MAX_SEED_AGE).contains(&dog.age));
            assert!(
                dog.weight >= profile.min_weight && dog.weight <= profile.max_weight,
                "{} weight {} outside {}..={}",
                dog.breed,
                dog.weight,
                profile.min_weight,
                profile.max_weight
            );
            assert_eq!(round_one_decimal(dog.weight), dog.weight);
        }
    }

    #[test]
    fn generated_dogs_pass_validation() {
        for dog in generate_dogs(100, DEFAULT_RANDOM_SEED) {
            assert!(dog.validate().is_ok());
        }
    }
}
