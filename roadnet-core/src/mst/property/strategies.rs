//! Strategy builders for MST property-based tests.
//!
//! Each generator produces a [`Network`] with string district labels,
//! randomly oriented roads, and a shuffled district order so Prim's start
//! district varies between cases.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::network::{Network, Road};

use super::types::{CostProfile, NetworkFixture};

/// Minimum district count for most generated networks.
const MIN_DISTRICTS: usize = 1;
/// Maximum district count for most generated networks.
const MAX_DISTRICTS: usize = 40;
/// Maximum district count for dense networks.
const DENSE_MAX_DISTRICTS: usize = 18;

/// Generates network fixtures covering every [`CostProfile`].
pub(super) fn network_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    (any::<CostProfile>(), any::<u64>()).prop_map(|(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(profile, &mut rng)
    })
}

/// Generates a fixture for a specific profile.
pub(super) fn generate_fixture(profile: CostProfile, rng: &mut SmallRng) -> NetworkFixture {
    let mut builder = match profile {
        CostProfile::Unique => generate_unique(rng),
        CostProfile::ManyTies => generate_ties(rng),
        CostProfile::Signed => generate_signed(rng),
        CostProfile::Sparse => generate_sparse(rng),
        CostProfile::Dense => generate_dense(rng),
        CostProfile::Disconnected => generate_disconnected(rng),
        CostProfile::Multigraph => generate_multigraph(rng),
    };
    NetworkFixture {
        network: builder.finish(rng),
        profile,
    }
}

// ── Unique costs ────────────────────────────────────────────────────────

fn generate_unique(rng: &mut SmallRng) -> RoadBuilder {
    let mut builder = RoadBuilder::random_pairs(rng, MAX_DISTRICTS, (0.1, 0.5));
    let mut costs: Vec<i64> = (0..).take(builder.pending.len()).collect();
    costs.shuffle(rng);
    for (pending, cost) in builder.pending.iter_mut().zip(costs) {
        pending.2 = cost * 3 - 40;
    }
    builder
}

// ── Many ties ───────────────────────────────────────────────────────────

fn generate_ties(rng: &mut SmallRng) -> RoadBuilder {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let mut builder = RoadBuilder::random_pairs(rng, MAX_DISTRICTS, (0.2, 0.6));
    for pending in &mut builder.pending {
        pending.2 = *pool.choose(rng).unwrap_or(&1);
    }
    builder
}

// ── Signed ──────────────────────────────────────────────────────────────

fn generate_signed(rng: &mut SmallRng) -> RoadBuilder {
    let mut builder = RoadBuilder::random_pairs(rng, MAX_DISTRICTS, (0.1, 0.5));
    for pending in &mut builder.pending {
        pending.2 = rng.gen_range(-1_000..=1_000);
    }
    builder
}

// ── Sparse ──────────────────────────────────────────────────────────────

fn generate_sparse(rng: &mut SmallRng) -> RoadBuilder {
    let count = rng.gen_range(MIN_DISTRICTS..=MAX_DISTRICTS);
    let mut builder = RoadBuilder::new(count);
    builder.spanning_tree(0, count, rng);
    builder.random_extras(0, count, count / 2, rng);
    builder
}

// ── Dense ───────────────────────────────────────────────────────────────

fn generate_dense(rng: &mut SmallRng) -> RoadBuilder {
    let mut builder = RoadBuilder::random_pairs(rng, DENSE_MAX_DISTRICTS, (0.7, 0.95));
    for pending in &mut builder.pending {
        pending.2 = rng.gen_range(0..100);
    }
    builder
}

// ── Disconnected ────────────────────────────────────────────────────────

fn generate_disconnected(rng: &mut SmallRng) -> RoadBuilder {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=8))
        .collect();
    let mut builder = RoadBuilder::new(sizes.iter().sum());
    let mut offset = 0;
    for size in sizes {
        builder.spanning_tree(offset, size, rng);
        builder.random_extras(offset, size, size, rng);
        offset += size;
    }
    builder
}

// ── Multigraph ──────────────────────────────────────────────────────────

fn generate_multigraph(rng: &mut SmallRng) -> RoadBuilder {
    let mut builder = generate_sparse(rng);
    let existing = builder.pending.len();
    for _ in 0..rng.gen_range(1..=existing.max(1)) {
        if let Some(&(source, destination, _)) = builder.pending.get(rng.gen_range(0..existing.max(1))) {
            let cost = rng.gen_range(-20..100);
            builder.push(source, destination, cost);
        }
    }
    for _ in 0..rng.gen_range(0..=3) {
        let node = rng.gen_range(0..builder.district_count);
        let cost = rng.gen_range(-50..50);
        builder.push(node, node, cost);
    }
    builder
}

/// Accumulates index-based roads before labelling them.
struct RoadBuilder {
    district_count: usize,
    pending: Vec<(usize, usize, i64)>,
}

impl RoadBuilder {
    fn new(district_count: usize) -> Self {
        Self {
            district_count,
            pending: Vec::new(),
        }
    }

    /// Adds each unordered pair with a probability sampled from
    /// `probability`. Costs default to zero and are assigned by the caller.
    fn random_pairs(rng: &mut SmallRng, max_districts: usize, probability: (f64, f64)) -> Self {
        let count = rng.gen_range(MIN_DISTRICTS..=max_districts);
        let chance: f64 = rng.gen_range(probability.0..=probability.1);
        let mut builder = Self::new(count);
        for a in 0..count {
            for b in (a + 1)..count {
                if rng.gen_bool(chance) {
                    builder.push(a, b, 0);
                }
            }
        }
        builder
    }

    fn push(&mut self, source: usize, destination: usize, cost: i64) {
        self.pending.push((source, destination, cost));
    }

    /// Links `size` districts starting at `offset` with a random path.
    fn spanning_tree(&mut self, offset: usize, size: usize, rng: &mut SmallRng) {
        let mut order: Vec<usize> = (offset..offset + size).collect();
        order.shuffle(rng);
        for pair in order.windows(2) {
            let cost = rng.gen_range(0..100);
            self.push(pair[0], pair[1], cost);
        }
    }

    /// Adds up to `extra` roads between distinct districts of one block.
    fn random_extras(&mut self, offset: usize, size: usize, extra: usize, rng: &mut SmallRng) {
        if size < 2 {
            return;
        }
        for _ in 0..extra {
            let a = offset + rng.gen_range(0..size);
            let b = offset + rng.gen_range(0..size);
            if a != b {
                let cost = rng.gen_range(0..100);
                self.push(a, b, cost);
            }
        }
    }

    /// Labels districts, orients roads randomly, and shuffles both lists.
    fn finish(&mut self, rng: &mut SmallRng) -> Network {
        let labels: Vec<String> = (0..self.district_count).map(|i| format!("d{i:02}")).collect();
        let mut roads: Vec<Road> = self
            .pending
            .iter()
            .map(|&(a, b, cost)| {
                let (source, destination) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
                Road::new(labels[source].clone(), labels[destination].clone(), cost)
            })
            .collect();
        roads.shuffle(rng);
        let mut districts = labels;
        districts.shuffle(rng);
        Network::new(districts, roads)
    }
}
