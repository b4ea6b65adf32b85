//! # Simulation engine and hand condition observations
use crate::condition::HandCondition;
use crate::deck::Deck;
use crate::environment::CardEnvironment;
use crate::error::Error;
use crate::hand::Hand;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct SimulationConfig<'a> {
  /// Number of trials; each trial draws an independent hand
  pub run_count: usize,
  /// Opening hand size, drawn without replacement within a trial
  pub hand_size: usize,
  pub deck: &'a Deck,
  pub hand_conditions: &'a [HandCondition],
  pub env: &'a CardEnvironment,
  /// Optional cancel flag checked between trials. Trials are independent,
  /// so raising it mid-run aborts without corrupting anything.
  pub cancel: Option<&'a AtomicBool>,
}

#[derive(Debug, Default)]
pub struct Simulation {
  /// One entry per hand condition, in input order
  pub observations: Vec<ConditionObservations>,
}

#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct ConditionObservations {
  /// Number of trials in which the hand condition was satisfied
  pub successes: usize,
  pub total_runs: usize,
}

impl ConditionObservations {
  /// The empirical probability that a random opening hand satisfies the condition
  pub fn probability(&self) -> f64 {
    self.successes as f64 / self.total_runs as f64
  }
}

impl Simulation {
  /// Runs the full simulation with an entropy-seeded RNG
  pub fn from_config(config: &SimulationConfig) -> Result<Self, Error> {
    let mut rng = SmallRng::from_entropy();
    Self::from_config_with_rng(config, &mut rng)
  }

  /// Runs the full simulation with a caller-supplied RNG, which makes
  /// seeded runs reproducible
  pub fn from_config_with_rng(
    config: &SimulationConfig,
    rng: &mut impl Rng,
  ) -> Result<Self, Error> {
    assert!(config.run_count > 0);
    debug!(
      "simulating {} hands of {} cards against {} hand conditions",
      config.run_count,
      config.hand_size,
      config.hand_conditions.len()
    );
    let mut counters = vec![0usize; config.hand_conditions.len()];
    for _ in 0..config.run_count {
      if let Some(cancel) = config.cancel {
        if cancel.load(Ordering::Relaxed) {
          return Err(Error::Cancelled);
        }
      }
      let hand = Hand::draw(rng, config.deck, config.hand_size)?;
      for (counter, hand_condition) in counters.iter_mut().zip(config.hand_conditions) {
        if hand.passes(hand_condition, config.env)? {
          *counter += 1;
        }
      }
    }
    Ok(Simulation {
      observations: counters
        .into_iter()
        .map(|successes| ConditionObservations {
          successes,
          total_runs: config.run_count,
        })
        .collect(),
    })
  }

  /// Per-condition success counts, aligned by index to the input conditions
  pub fn counts(&self) -> Vec<usize> {
    self.observations.iter().map(|o| o.successes).collect()
  }
}
