//! Paces a sort engine and keeps the state that gets drawn.
//!
//! The [`Driver`] owns the displayed array, the highlighted indices and the
//! run statistics. Each tick pulls exactly one [`Step`](crate::step::Step)
//! from the active engine. Between ticks it waits `config.step_delay()`, and
//! that gap is the only point where reconfiguration can take effect.
//!
//! A run always starts from a copy of whatever array is displayed at that
//! moment. Only a size change or a reset draws a fresh random array.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::{
    ConfigChange, VisualizerConfig, MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED,
};
use crate::generator;
use crate::sort::SortSteps;
use crate::stats::RunStats;

/// Upper bound on ticks caught up in one [`Driver::update`] call.
pub const MAX_TICKS_PER_UPDATE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Sorting,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing was pulled.
    Idle,
    /// One step was pulled and applied.
    Stepped,
    /// The engine ran dry and the array is now shown as fully sorted.
    Finished,
}

type StatsListener = Box<dyn FnMut(&RunStats)>;

pub struct Driver {
    config: VisualizerConfig,
    rng: ChaCha8Rng,
    array: Vec<u32>,
    comparing: Vec<usize>,
    sorted: Vec<usize>,
    engine: Option<SortSteps>,
    stats: RunStats,
    started_at: Option<Instant>,
    // None means the next tick is due immediately.
    next_due: Option<Instant>,
    finished: bool,
    listener: Option<StatsListener>,
}

impl Driver {
    pub fn new(config: VisualizerConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Driver whose random arrays are reproducible.
    pub fn with_seed(config: VisualizerConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: VisualizerConfig, mut rng: ChaCha8Rng) -> Self {
        let config = config.clamped();
        let array = generator::generate_with(&mut rng, config.array_size);
        Self::build(config, rng, array)
    }

    /// Driver that displays `values` instead of a random draw.
    ///
    /// `config.array_size` is set to `values.len()`; a later size change or
    /// reset goes back to random arrays.
    pub fn with_array(config: VisualizerConfig, values: Vec<u32>) -> Self {
        let config = VisualizerConfig {
            array_size: values.len(),
            ..config
        };
        Self::build(config, ChaCha8Rng::from_entropy(), values)
    }

    fn build(config: VisualizerConfig, rng: ChaCha8Rng, array: Vec<u32>) -> Self {
        Self {
            config,
            rng,
            array,
            comparing: Vec::new(),
            sorted: Vec::new(),
            engine: None,
            stats: RunStats::default(),
            started_at: None,
            next_due: None,
            finished: false,
            listener: None,
        }
    }

    /// Called with the cumulative stats after every pulled step.
    pub fn set_stats_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&RunStats) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn array(&self) -> &[u32] {
        &self.array
    }

    pub fn comparing(&self) -> &[usize] {
        &self.comparing
    }

    pub fn sorted(&self) -> &[usize] {
        &self.sorted
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn is_sorting(&self) -> bool {
        self.config.running
    }

    pub fn state(&self) -> RunState {
        if self.config.running {
            RunState::Sorting
        } else if self.finished {
            RunState::Finished
        } else {
            RunState::Idle
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.config.step_delay()
    }

    /// Apply one reconfiguration event.
    ///
    /// Size, algorithm and direction changes and `Running(false)` cancel the
    /// active run; its remaining steps are dropped. Speed changes only affect
    /// pacing.
    pub fn apply(&mut self, change: ConfigChange) {
        match change {
            ConfigChange::ArraySize(size) => {
                let size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
                if size != self.config.array_size {
                    self.cancel("array size changed");
                    self.config.array_size = size;
                    self.regenerate();
                }
            }
            ConfigChange::Algorithm(algorithm) => {
                if algorithm != self.config.algorithm {
                    self.cancel("algorithm changed");
                    self.config.algorithm = algorithm;
                }
            }
            ConfigChange::Direction(ascending) => {
                if ascending != self.config.ascending {
                    self.cancel("direction changed");
                    self.config.ascending = ascending;
                }
            }
            ConfigChange::Speed(speed) => {
                self.config.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
            }
            ConfigChange::Running(true) => {
                if !self.config.running {
                    self.config.running = true;
                    self.finished = false;
                    self.next_due = None;
                }
            }
            ConfigChange::Running(false) => self.cancel("paused"),
            ConfigChange::Reset => {
                self.cancel("reset");
                self.regenerate();
            }
        }
        debug!(?change, config = ?self.config, "applied config change");
    }

    /// Pull and apply a single step, starting a run first if one is armed.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        self.advance(now, now)
    }

    /// Run every tick that has come due by `now`.
    ///
    /// At most [`MAX_TICKS_PER_UPDATE`] ticks are run per call; if more were
    /// due the schedule restarts from `now` instead of trying to catch up.
    pub fn update(&mut self, now: Instant) -> TickOutcome {
        let mut last = TickOutcome::Idle;
        for _ in 0..MAX_TICKS_PER_UPDATE {
            if !self.config.running {
                return last;
            }
            let due = self.next_due.unwrap_or(now);
            if due > now {
                return last;
            }
            last = self.advance(due, now);
            if last == TickOutcome::Finished {
                return last;
            }
        }
        if self.config.running {
            self.next_due = Some(now + self.step_delay());
        }
        last
    }

    /// Drain the whole engine without pacing.
    pub fn run_to_completion(&mut self) -> RunStats {
        self.apply(ConfigChange::Running(true));
        loop {
            match self.tick(Instant::now()) {
                TickOutcome::Stepped => {}
                TickOutcome::Finished | TickOutcome::Idle => return self.stats,
            }
        }
    }

    fn advance(&mut self, scheduled: Instant, now: Instant) -> TickOutcome {
        if !self.config.running {
            return TickOutcome::Idle;
        }
        if self.engine.is_none() {
            self.start_run(now);
        }
        let Some(engine) = self.engine.as_mut() else {
            return TickOutcome::Idle;
        };

        match engine.next() {
            Some(step) => {
                self.array = step.array;
                self.comparing = step.comparing;
                self.sorted = step.sorted;
                self.stats.record_step(self.elapsed(now));
                if let Some(listener) = self.listener.as_mut() {
                    listener(&self.stats);
                }
                self.next_due = Some(scheduled + self.config.step_delay());
                TickOutcome::Stepped
            }
            None => {
                self.finish(now);
                TickOutcome::Finished
            }
        }
    }

    fn start_run(&mut self, now: Instant) {
        info!(
            algorithm = %self.config.algorithm,
            direction = %self.config.direction(),
            size = self.array.len(),
            speed = self.config.speed,
            "starting sort"
        );
        self.engine = Some(
            self.config
                .algorithm
                .steps(self.array.clone(), self.config.direction()),
        );
        self.comparing.clear();
        self.sorted.clear();
        self.stats = RunStats::default();
        self.started_at = Some(now);
    }

    fn finish(&mut self, now: Instant) {
        self.engine = None;
        self.sorted = (0..self.array.len()).collect();
        self.comparing.clear();
        self.stats.elapsed = self.elapsed(now);
        self.config.running = false;
        self.finished = true;
        self.next_due = None;
        info!(
            algorithm = %self.config.algorithm,
            steps = self.stats.steps(),
            elapsed_ms = self.stats.elapsed_ms() as u64,
            "sort finished"
        );
    }

    fn cancel(&mut self, reason: &str) {
        if self.engine.take().is_some() {
            debug!(reason, steps = self.stats.steps(), "run cancelled");
        }
        self.config.running = false;
        self.finished = false;
        self.next_due = None;
    }

    fn regenerate(&mut self) {
        self.array = generator::generate_with(&mut self.rng, self.config.array_size);
        self.comparing.clear();
        self.sorted.clear();
        self.stats = RunStats::default();
        self.started_at = None;
    }

    fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Algorithm;

    fn running(algorithm: Algorithm) -> VisualizerConfig {
        VisualizerConfig {
            algorithm,
            running: true,
            ..VisualizerConfig::default()
        }
    }

    #[test]
    fn idle_driver_pulls_nothing() {
        let mut driver = Driver::with_array(VisualizerConfig::default(), vec![3, 2, 1]);
        assert_eq!(driver.tick(Instant::now()), TickOutcome::Idle);
        assert_eq!(driver.array(), &[3, 2, 1]);
        assert_eq!(driver.state(), RunState::Idle);
    }

    #[test]
    fn tick_applies_one_step() {
        let mut driver = Driver::with_array(running(Algorithm::Bubble), vec![5, 3, 1]);
        assert_eq!(driver.tick(Instant::now()), TickOutcome::Stepped);
        assert_eq!(driver.array(), &[3, 5, 1]);
        assert_eq!(driver.comparing(), &[0, 1]);
        assert_eq!(driver.stats().comparisons, 1);
        assert_eq!(driver.stats().swaps, 1);
    }

    #[test]
    fn exhaustion_marks_everything_sorted() {
        let mut driver = Driver::with_array(running(Algorithm::Quick), vec![4, 1, 3, 2]);
        let now = Instant::now();
        while driver.tick(now) == TickOutcome::Stepped {
            assert!(driver.sorted().is_empty());
        }
        assert_eq!(driver.array(), &[1, 2, 3, 4]);
        assert_eq!(driver.sorted(), &[0, 1, 2, 3]);
        assert!(driver.comparing().is_empty());
        assert_eq!(driver.state(), RunState::Finished);
        assert!(!driver.config().running);
    }

    #[test]
    fn update_respects_delay() {
        let mut driver = Driver::with_array(running(Algorithm::Bubble), vec![5, 4, 3, 2, 1]);
        let start = Instant::now();
        assert_eq!(driver.update(start), TickOutcome::Stepped);
        assert_eq!(driver.stats().steps(), 1);

        // Default speed 50 gives a 51ms gap.
        driver.update(start + Duration::from_millis(50));
        assert_eq!(driver.stats().steps(), 1);
        driver.update(start + Duration::from_millis(51));
        assert_eq!(driver.stats().steps(), 2);

        // Three more gaps elapsed at once: all three ticks run.
        driver.update(start + Duration::from_millis(51 * 4));
        assert_eq!(driver.stats().steps(), 5);
    }

    #[test]
    fn update_caps_catch_up_and_reschedules_from_now() {
        let config = VisualizerConfig {
            speed: MAX_SPEED,
            ..running(Algorithm::Bubble)
        };
        let mut driver = Driver::with_array(config, (1..=200).rev().collect());
        let start = Instant::now();
        let late = start + Duration::from_secs(10);
        driver.next_due = Some(start);

        assert_eq!(driver.update(late), TickOutcome::Stepped);
        assert_eq!(driver.stats().steps(), MAX_TICKS_PER_UPDATE as u64);
        assert_eq!(driver.next_due, Some(late + Duration::from_millis(1)));

        // The backlog was dropped, so nothing more is due yet.
        assert_eq!(driver.update(late), TickOutcome::Idle);
        assert_eq!(driver.stats().steps(), MAX_TICKS_PER_UPDATE as u64);
        driver.update(late + Duration::from_millis(1));
        assert_eq!(driver.stats().steps(), MAX_TICKS_PER_UPDATE as u64 + 1);
    }

    #[test]
    fn speed_change_leaves_array_size_alone() {
        let mut driver = Driver::with_array(VisualizerConfig::default(), vec![4, 3, 2, 1]);
        driver.apply(ConfigChange::Speed(60));
        assert_eq!(driver.config().speed, 60);
        assert_eq!(driver.config().array_size, driver.array().len());

        driver.apply(ConfigChange::Speed(0));
        assert_eq!(driver.config().speed, MIN_SPEED);
        assert_eq!(driver.config().array_size, 4);
    }

    #[test]
    fn listener_sees_cumulative_counts() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut driver = Driver::with_array(running(Algorithm::Insertion), vec![2, 1, 3]);
        driver.set_stats_listener(move |stats| sink.borrow_mut().push(stats.comparisons));
        driver.run_to_completion();
        let steps = seen.borrow().clone();
        assert_eq!(steps, (1..=steps.len() as u64).collect::<Vec<_>>());
        assert!(!steps.is_empty());
    }
}
