//! Seeded synthetic road networks for benchmarking.
//!
//! Every generated network is connected: a random spanning tree is laid down
//! first, then extra roads are drawn between random district pairs. Extra
//! roads may repeat pairs or form self-loops, which exercises the engines'
//! handling of multigraph input.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use roadnet_core::{Network, Road};

/// Errors that may occur during synthetic network generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested district count was zero.
    #[error("district count must be greater than zero")]
    ZeroDistricts,
    /// The requested maximum cost was below one.
    #[error("maximum road cost must be at least 1, got {max_cost}")]
    NonPositiveCost {
        /// The rejected maximum cost.
        max_cost: i64,
    },
}

/// Configuration for synthetic network generation.
#[derive(Clone, Debug)]
pub struct SyntheticNetworkConfig {
    /// Number of districts to generate.
    pub district_count: usize,
    /// Extra roads per district beyond the spanning tree.
    pub roads_per_district: usize,
    /// Upper bound (inclusive) for road costs; costs start at 1.
    pub max_cost: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected network from `config`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroDistricts`] if `district_count` is zero, or
/// [`SyntheticError::NonPositiveCost`] if `max_cost` is below one.
///
/// # Examples
///
/// ```
/// use roadnet_benches::synthetic::{SyntheticNetworkConfig, generate_network};
///
/// let config = SyntheticNetworkConfig {
///     district_count: 10,
///     roads_per_district: 2,
///     max_cost: 100,
///     seed: 7,
/// };
/// let network = generate_network(&config).expect("valid config");
/// assert_eq!(network.district_count(), 10);
/// assert_eq!(network.road_count(), 9 + 20);
/// ```
pub fn generate_network(config: &SyntheticNetworkConfig) -> Result<Network, SyntheticError> {
    if config.district_count == 0 {
        return Err(SyntheticError::ZeroDistricts);
    }
    if config.max_cost < 1 {
        return Err(SyntheticError::NonPositiveCost {
            max_cost: config.max_cost,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let count = config.district_count;
    let extras = count.saturating_mul(config.roads_per_district);
    let mut roads = Vec::with_capacity(count.saturating_sub(1).saturating_add(extras));

    for district in 1..count {
        let parent = rng.gen_range(0..district);
        roads.push(Road::new(
            label(parent),
            label(district),
            rng.gen_range(1..=config.max_cost),
        ));
    }
    for _ in 0..extras {
        let source = rng.gen_range(0..count);
        let destination = rng.gen_range(0..count);
        roads.push(Road::new(
            label(source),
            label(destination),
            rng.gen_range(1..=config.max_cost),
        ));
    }

    Ok(Network::new((0..count).map(label), roads))
}

fn label(index: usize) -> String {
    format!("d{index}")
}
