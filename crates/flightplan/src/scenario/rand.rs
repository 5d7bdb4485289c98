//! Reproducible random strike pairs.
//!
//! Draws a friendly origin and a hostile target uniformly inside a pixel-space map
//! rectangle. A `ReplayToken` `(seed, index)` fixes each draw so sweeps and
//! benchmarks can be replayed pair by pair.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::airbase::Airbase;
use crate::geom::Point;

/// Axis-aligned map rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub min: Point,
    pub max: Point,
}

impl Default for MapBounds {
    /// 200 × 200 nm map anchored at the origin.
    fn default() -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::from_nm(200.0, 200.0),
        }
    }
}

impl MapBounds {
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        let lerp = |lo: f64, hi: f64, u: f64| lo + (hi - lo) * u;
        Point::new(
            lerp(self.min.x, self.max.x, rng.gen::<f64>()),
            lerp(self.min.y, self.max.y, rng.gen::<f64>()),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Friendly origin and hostile target drawn inside `bounds`.
pub fn draw_strike_pair(bounds: MapBounds, tok: ReplayToken) -> (Airbase, Airbase) {
    let mut rng = tok.to_std_rng();
    let from = Airbase::friendly(bounds.sample(&mut rng));
    let to = Airbase::hostile(bounds.sample(&mut rng));
    (from, to)
}

/// `count` consecutive draws `(seed, 0..count)`.
pub fn draw_strike_pairs(bounds: MapBounds, seed: u64, count: u64) -> Vec<(Airbase, Airbase)> {
    (0..count)
        .map(|index| draw_strike_pair(bounds, ReplayToken::new(seed, index)))
        .collect()
}
