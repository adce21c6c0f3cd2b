use crate::config::{ConfigSection, EvolutionConfig, SchedulerConfig};
use crate::engines::generation::{
    fitness::{best_index, score_population},
    operators::{crossover, generate_population, mutate, select},
    progress::ProgressCallback,
    schedule::TickSchedule,
};
use crate::error::Result;
use crate::types::{FitnessScore, Individual, Population, RunState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Snapshot emitted after every completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best: Individual,
    pub best_fitness: FitnessScore,
    /// Positions whose individual differs from the previous generation's.
    pub changed_indices: BTreeSet<usize>,
    pub run_state: RunState,
}

/// Validated parameters of the active run.
#[derive(Debug, Clone)]
struct RunParams {
    target: Individual,
    population_size: usize,
    mutation_rate: f64,
}

/// Owns the population and drives it toward the target one generation at a time.
///
/// All run state lives here and changes only through [`start`](Self::start),
/// [`step`](Self::step)/[`tick`](Self::tick), [`stop`](Self::stop) and
/// [`reset`](Self::reset). Callers read it back through accessors.
pub struct GenerationEngine {
    tick_interval: Duration,
    rng: StdRng,
    params: Option<RunParams>,
    population: Population,
    best: Option<(Individual, FitnessScore)>,
    generation: usize,
    state: RunState,
    changed_indices: BTreeSet<usize>,
    schedule: Option<TickSchedule>,
    callback: Option<Box<dyn ProgressCallback>>,
}

impl GenerationEngine {
    pub fn new(scheduler: &SchedulerConfig) -> Result<Self> {
        Self::with_rng(scheduler, StdRng::from_entropy())
    }

    /// Engine drawing from a caller-supplied generator. A `seed` in the
    /// evolution config still reseeds it on every start.
    pub fn with_rng(scheduler: &SchedulerConfig, rng: StdRng) -> Result<Self> {
        scheduler.validate()?;
        Ok(Self {
            tick_interval: scheduler.tick_interval(),
            rng,
            params: None,
            population: Vec::new(),
            best: None,
            generation: 1,
            state: RunState::Idle,
            changed_indices: BTreeSet::new(),
            schedule: None,
            callback: None,
        })
    }

    pub fn set_callback(&mut self, callback: Box<dyn ProgressCallback>) {
        self.callback = Some(callback);
    }

    /// Begin a fresh run. Any active schedule is cancelled first.
    ///
    /// On a validation error nothing changes, including a run already in progress.
    pub fn start(&mut self, config: &EvolutionConfig, now: Instant) -> Result<RunState> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected start: {}", e);
            return Err(e);
        }
        let params = RunParams {
            target: config.parse_target()?,
            population_size: config.population_size,
            mutation_rate: config.mutation_rate,
        };

        if self.schedule.take().is_some() {
            log::debug!("Cancelled previous schedule at generation {}", self.generation);
        }
        if let Some(seed) = config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let population = generate_population(params.population_size, params.target.len(), &mut self.rng);
        let scores = score_population(&population, &params.target)?;
        self.best = best_of(&population, &scores);
        self.changed_indices = (0..population.len()).collect();
        self.population = population;
        self.generation = 1;
        self.state = RunState::Running;

        if let Some(cb) = self.callback.as_mut() {
            cb.on_run_started(&config.target, params.population_size);
        }
        log::info!(
            "Starting run: target {:?}, population {}, mutation rate {}",
            config.target,
            params.population_size,
            params.mutation_rate
        );

        let converged = self.best_matches(&params.target);
        self.params = Some(params);
        if converged {
            self.finish(RunState::Converged);
        } else {
            self.schedule = Some(TickSchedule::new(self.tick_interval, now));
        }
        Ok(self.state)
    }

    /// Cancel scheduled stepping. No-op unless running.
    pub fn stop(&mut self) {
        if self.state.is_running() {
            self.finish(RunState::Stopped);
        }
    }

    /// Discard the run and return to `Idle`.
    pub fn reset(&mut self) {
        self.schedule = None;
        self.params = None;
        self.population.clear();
        self.best = None;
        self.changed_indices.clear();
        self.generation = 1;
        self.state = RunState::Idle;
    }

    /// Run one generation if the schedule is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Result<Option<GenerationReport>> {
        let due = self.schedule.as_mut().is_some_and(|s| s.fire(now));
        if due {
            self.step()
        } else {
            Ok(None)
        }
    }

    /// Time left until the next scheduled step, if one is scheduled.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.schedule.as_ref().map(|s| s.time_until_due(now))
    }

    /// Advance one generation: evaluate, select pairs, recombine, mutate, replace.
    ///
    /// Returns `None` without touching anything when the engine is not running.
    pub fn step(&mut self) -> Result<Option<GenerationReport>> {
        if !self.state.is_running() {
            return Ok(None);
        }
        let Some(params) = self.params.as_ref() else {
            return Ok(None);
        };

        let scores = score_population(&self.population, &params.target)?;

        let mut next_population = Vec::with_capacity(params.population_size);
        for _ in 0..params.population_size / 2 {
            let parent1 = select(&self.population, &scores, &mut self.rng);
            let parent2 = select(&self.population, &scores, &mut self.rng);
            let (child1, child2) = crossover(parent1, parent2, &mut self.rng);
            next_population.push(mutate(&child1, params.mutation_rate, &mut self.rng));
            next_population.push(mutate(&child2, params.mutation_rate, &mut self.rng));
        }

        // Best is taken from the new population only.
        let next_scores = score_population(&next_population, &params.target)?;
        let best = best_of(&next_population, &next_scores);

        self.changed_indices = self
            .population
            .iter()
            .zip(&next_population)
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(i, _)| i)
            .collect();
        self.population = next_population;
        self.best = best;
        self.generation += 1;

        let target = params.target.clone();
        let converged = self.best_matches(&target);
        if converged {
            self.state = RunState::Converged;
            self.schedule = None;
        }

        let report = self.report();
        if let (Some(report), Some(cb)) = (&report, self.callback.as_mut()) {
            cb.on_generation_complete(report);
        }
        if converged {
            self.finish(RunState::Converged);
        }
        Ok(report)
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn best_individual(&self) -> Option<&Individual> {
        self.best.as_ref().map(|(ind, _)| ind)
    }

    pub fn best_fitness(&self) -> FitnessScore {
        self.best.as_ref().map_or(0, |(_, f)| *f)
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn changed_indices(&self) -> &BTreeSet<usize> {
        &self.changed_indices
    }

    pub fn target(&self) -> Option<&Individual> {
        self.params.as_ref().map(|p| &p.target)
    }

    pub fn mutation_rate(&self) -> Option<f64> {
        self.params.as_ref().map(|p| p.mutation_rate)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Current state as a report, once a population exists.
    pub fn report(&self) -> Option<GenerationReport> {
        let (best, best_fitness) = self.best.clone()?;
        Some(GenerationReport {
            generation: self.generation,
            best,
            best_fitness,
            changed_indices: self.changed_indices.clone(),
            run_state: self.state,
        })
    }

    fn best_matches(&self, target: &Individual) -> bool {
        self.best_individual() == Some(target)
    }

    fn finish(&mut self, state: RunState) {
        self.schedule = None;
        self.state = state;
        match state {
            RunState::Converged => log::info!("Converged at generation {}", self.generation),
            _ => log::info!("Stopped at generation {}", self.generation),
        }
        if let Some(cb) = self.callback.as_mut() {
            cb.on_run_finished(state, self.generation);
        }
    }
}

fn best_of(population: &[Individual], scores: &[FitnessScore]) -> Option<(Individual, FitnessScore)> {
    best_index(scores).map(|i| (population[i].clone(), scores[i]))
}
