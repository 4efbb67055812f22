//! Multi-candidate search around the deterministic generator.
//!
//! Each seed shuffles the roster with a seeded RNG, the core generator
//! runs on the shuffled order, and [`RosterKpi`] ranks the result. The
//! lowest score wins; equal scores keep the earlier seed. The search is
//! reproducible for a given seed list.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use super::{GenerationInput, GenerationOutput, RosterGenerator, RosterKpi};
use crate::error::RosterResult;
use crate::models::CoverageSettings;

/// Score of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub seed: u64,
    pub kpi: RosterKpi,
    pub score: f64,
}

/// Winning candidate plus the scores of every candidate tried.
#[derive(Debug, Clone)]
pub struct CandidateResult {
    pub best: GenerationOutput,
    pub best_seed: u64,
    pub scores: Vec<CandidateScore>,
}

/// Runs the generator once per seed and keeps the best roster.
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    generator: RosterGenerator,
    seeds: Vec<u64>,
}

impl CandidateSearch {
    /// Creates a search over seeds `0..count`.
    pub fn new(generator: RosterGenerator, count: u64) -> Self {
        Self {
            generator,
            seeds: (0..count).collect(),
        }
    }

    /// Uses an explicit seed list.
    pub fn with_seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Runs every candidate.
    ///
    /// With no seeds, runs once on the unshuffled roster under seed 0.
    pub fn run(&self, input: &GenerationInput) -> RosterResult<CandidateResult> {
        let coverage = input
            .coverage
            .unwrap_or(self.generator.config().default_coverage);

        let (first, rest): (Option<u64>, &[u64]) = match self.seeds.split_first() {
            Some((&seed, rest)) => (Some(seed), rest),
            None => (None, &[]),
        };

        let mut scores = Vec::with_capacity(rest.len() + 1);
        let (score, output) = self.run_one(input, first, coverage, &mut scores)?;
        let mut best = (first.unwrap_or(0), score, output);

        for &seed in rest {
            let (score, output) = self.run_one(input, Some(seed), coverage, &mut scores)?;
            if score < best.1 {
                best = (seed, score, output);
            }
        }

        let (best_seed, _, best) = best;
        Ok(CandidateResult {
            best,
            best_seed,
            scores,
        })
    }

    /// Generates and scores one candidate; `None` keeps the input order.
    fn run_one(
        &self,
        input: &GenerationInput,
        seed: Option<u64>,
        coverage: CoverageSettings,
        scores: &mut Vec<CandidateScore>,
    ) -> RosterResult<(f64, GenerationOutput)> {
        let output = match seed {
            Some(seed) => {
                let mut shuffled = input.clone();
                let mut rng = StdRng::seed_from_u64(seed);
                shuffled.employees.shuffle(&mut rng);
                self.generator.generate(&shuffled)?
            }
            None => self.generator.generate(input)?,
        };

        let kpi = RosterKpi::calculate(&output.schedule, &input.employees, coverage);
        let score = kpi.score();
        let seed = seed.unwrap_or(0);
        debug!(seed, score, "candidate scored");
        scores.push(CandidateScore { seed, kpi, score });
        Ok((score, output))
    }
}
