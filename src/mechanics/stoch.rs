/// Stochastic mechanics: the Bernoulli source that drives each round.
/// Callers inject the source, so tests can script outcomes and runs can be
/// reproduced from a seed via `bevy_prng::WyRand`.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Anything that can answer "did this round succeed with probability p?".
pub trait BernoulliSampler {
    fn sample_bernoulli(&mut self, p: f64) -> bool;
}

impl<S: BernoulliSampler + ?Sized> BernoulliSampler for &mut S {
    #[inline]
    fn sample_bernoulli(&mut self, p: f64) -> bool {
        (**self).sample_bernoulli(p)
    }
}

/// Uniform [0,1) with 53 bits of precision.
#[inline]
pub fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p) straight off a `rand_core` generator.
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    unit_f64(rng) < p.clamp(0.0, 1.0)
}

/// Coin flips backed by any `rand_core` RNG.
#[derive(Clone, Debug)]
pub struct Coin<R> {
    rng: R,
}

impl<R: RngCore> Coin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Coin<WyRand> {
    /// Deterministic coin: identical seeds give identical flip sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }
}

impl<R: RngCore> BernoulliSampler for Coin<R> {
    #[inline]
    fn sample_bernoulli(&mut self, p: f64) -> bool {
        bernoulli(&mut self.rng, p)
    }
}

#[inline]
pub fn seeded_rng(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}
