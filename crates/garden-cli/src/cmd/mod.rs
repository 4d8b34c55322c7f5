pub mod config;
pub mod haiku;
pub mod render;
pub mod show;
pub mod tend;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fixed seed makes a run reproducible; otherwise draw from the OS.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
