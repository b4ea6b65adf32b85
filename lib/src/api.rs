//! # Serde-facing engine interface
//!
//! Defines the boundary between the engine and its display layer: a serde
//! `Input` carrying the deck and definitions, and an `Output` of success
//! counts aligned by index to the input hand conditions. Callers divide
//! counts by trials, or read the precomputed `probabilities`.
use crate::combo::{Combo, ComboPiece};
use crate::condition::{Condition, HandCondition};
use crate::deck::{CardId, Deck};
use crate::environment::CardEnvironment;
use crate::error::Error;
use crate::group::CardGroup;
use crate::simulation::{Simulation, SimulationConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn default_trials() -> usize {
  10_000
}

/// Simulation inputs as produced by the surrounding application state:
/// the spread-out main deck plus the current group/combo/condition definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
  pub main_deck: Vec<CardId>,
  pub hand_size: usize,
  #[serde(default = "default_trials")]
  pub trials: usize,
  #[serde(default)]
  pub card_groups: Vec<CardGroup>,
  #[serde(default)]
  pub combos: Vec<Combo>,
  pub hand_conditions: Vec<HandCondition>,
  /// Optional RNG seed for reproducible runs; seeded from entropy when absent
  #[serde(default)]
  pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
  pub trials: usize,
  /// counts[i] = trials in which hand_conditions[i] was satisfied
  pub counts: Vec<usize>,
  pub probabilities: Vec<f64>,
}

/// Runs a full simulation for the given input
pub fn run(input: &Input) -> Result<Output, Error> {
  if input.main_deck.is_empty() {
    return Err(Error::EmptyDeck);
  }
  let deck = Deck::from_cards(input.main_deck.iter().cloned());
  let env = CardEnvironment::new(input.card_groups.clone(), input.combos.clone());
  warn_on_dangling_groups(&env, &input.hand_conditions);
  let config = SimulationConfig {
    run_count: input.trials,
    hand_size: input.hand_size,
    deck: &deck,
    hand_conditions: &input.hand_conditions,
    env: &env,
    cancel: None,
  };
  let sim = match input.seed {
    Some(seed) => {
      let mut rng = SmallRng::seed_from_u64(seed);
      Simulation::from_config_with_rng(&config, &mut rng)?
    }
    None => Simulation::from_config(&config)?,
  };
  Ok(Output {
    trials: input.trials,
    counts: sim.counts(),
    probabilities: sim.observations.iter().map(|o| o.probability()).collect(),
  })
}

/// Group references that resolve to nothing evaluate to "no match" during the
/// run; surface them once up front so a stale definition is at least visible
fn warn_on_dangling_groups(env: &CardEnvironment, hand_conditions: &[HandCondition]) {
  let mut check = |condition: &Condition| {
    if let Condition::Group(group_id) = condition {
      if env.group(*group_id).is_none() {
        warn!("hand condition references unknown group id {}", group_id);
      }
    }
  };
  for hand_condition in hand_conditions {
    hand_condition
      .should_include_at_least_one_of
      .iter()
      .for_each(&mut check);
    hand_condition.must_not_include.iter().for_each(&mut check);
  }
  for combo in &env.combos {
    for piece in &combo.combo_pieces {
      if let ComboPiece::Group(group_id) = piece {
        if env.group(*group_id).is_none() {
          warn!("combo {} references unknown group id {}", combo.id, group_id);
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::api::*;
  use crate::combo::{Combo, ComboPiece};
  use crate::condition::{Condition, HandCondition};
  use crate::error::Error;
  use crate::group::CardGroup;

  fn fixture_input() -> Input {
    Input {
      main_deck: vec![
        "1", "1", "2", "10", "10", "11", "400", "1000", "1000", "1001", "1002", "1003", "1004",
        "1005", "1006",
      ]
      .into_iter()
      .map(String::from)
      .collect(),
      hand_size: 5,
      trials: 2000,
      card_groups: vec![
        CardGroup::new(1, "Combo Piece 1", vec!["1", "2"]),
        CardGroup::new(2, "Combo Piece 2", vec!["10", "11"]),
        CardGroup::new(3, "Bricks", vec!["400"]),
      ],
      combos: vec![Combo::new(
        1,
        "Two-card combo",
        vec![ComboPiece::Group(1), ComboPiece::Group(2)],
        2,
      )],
      hand_conditions: vec![HandCondition::new(
        1,
        "Open the combo, dodge the brick",
        vec![Condition::Combo(1)],
        vec![Condition::Group(3)],
      )],
      seed: Some(42),
    }
  }

  #[test]
  fn run_aligns_output_with_input_conditions() {
    let output = run(&fixture_input()).unwrap();
    assert_eq!(output.trials, 2000);
    assert_eq!(output.counts.len(), 1);
    assert_eq!(output.probabilities.len(), 1);
    assert!((output.probabilities[0] - output.counts[0] as f64 / 2000.0).abs() < f64::EPSILON);
  }

  #[test]
  fn run_with_same_seed_is_reproducible() {
    let input = fixture_input();
    let first = run(&input).unwrap();
    let second = run(&input).unwrap();
    assert_eq!(first.counts, second.counts);
  }

  #[test]
  fn empty_deck_is_rejected() {
    let mut input = fixture_input();
    input.main_deck.clear();
    assert_eq!(run(&input).unwrap_err(), Error::EmptyDeck);
  }

  #[test]
  fn input_json_defaults_trials() {
    let json = r#"{
      "mainDeck": ["1", "2", "3", "4", "5", "6", "7"],
      "handSize": 5,
      "handConditions": [{
        "id": 1,
        "name": "Draw the one",
        "shouldIncludeAtLeastOneOf": [{"type":"card","foreignId":"1"}],
        "mustNotInclude": []
      }]
    }"#;
    let input: Input = serde_json::from_str(json).unwrap();
    assert_eq!(input.trials, 10_000);
    assert!(input.card_groups.is_empty());
    assert!(input.seed.is_none());
    let output = run(&input).unwrap();
    assert_eq!(output.counts.len(), 1);
  }
}
