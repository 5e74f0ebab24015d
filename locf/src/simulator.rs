use std::io::Write;

use anyhow::{Context, Result};
use cbp::entities::{Color, ContainerRegistry, Item};
use itertools::{Itertools, MinMaxResult};
use log::{debug, info};
use rand::Rng;
use rand::prelude::SmallRng;

use crate::config::SimConfig;

/// Outcome of a single trial.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    pub n_items: usize,
    pub n_containers: usize,
    pub compact_log: String,
}

/// Minimum and maximum container counts over a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSummary {
    pub n_experiments: usize,
    pub min_containers: usize,
    pub max_containers: usize,
}

/// Runs colour-constrained bin packing experiments with the greedy
/// Last-Open-Container-Fill policy.
pub struct Simulator {
    pub config: SimConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl Simulator {
    pub fn new(config: SimConfig, rng: SmallRng) -> Self {
        Self { config, rng }
    }

    /// Packs `n_items` uniformly random coloured items into a fresh registry.
    pub fn run_trial(&mut self, n_items: usize) -> Result<TrialOutcome> {
        let mut registry = ContainerRegistry::with_capacity(self.config.capacity);
        for _ in 0..n_items {
            let color: Color = self.rng.random();
            registry
                .place_item(Item::new(color))
                .context("placement failed")?;
        }
        debug!("{}", registry.summary_view());

        Ok(TrialOutcome {
            n_items,
            n_containers: registry.container_count(),
            compact_log: registry.compact_log(),
        })
    }

    /// Runs `n_experiments` independent trials of `n_items` each, appending
    /// one result line per trial to `sink`. The sink is flushed before
    /// returning.
    pub fn run_experiments(
        &mut self,
        n_experiments: usize,
        n_items: usize,
        sink: &mut impl Write,
    ) -> Result<SimSummary> {
        let mut container_counts = Vec::with_capacity(n_experiments);

        for i in 0..n_experiments {
            let outcome = self.run_trial(n_items)?;
            writeln!(
                sink,
                "{} in {}: {}",
                outcome.n_items, outcome.n_containers, outcome.compact_log
            )?;
            info!(
                "[{}/{}] packed {} items into {} containers",
                i + 1,
                n_experiments,
                outcome.n_items,
                outcome.n_containers
            );
            container_counts.push(outcome.n_containers);
        }
        sink.flush()?;

        let (min_containers, max_containers) = match container_counts.iter().minmax() {
            MinMaxResult::NoElements => (0, 0),
            MinMaxResult::OneElement(&n) => (n, n),
            MinMaxResult::MinMax(&min, &max) => (min, max),
        };

        Ok(SimSummary {
            n_experiments,
            min_containers,
            max_containers,
        })
    }
}
