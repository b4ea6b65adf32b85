//! # Simulation hands and the condition satisfaction algorithms
use crate::combo::{ComboId, ComboPiece};
use crate::condition::{Condition, HandCondition};
use crate::deck::{CardId, Deck};
use crate::environment::CardEnvironment;
use crate::error::Error;
use crate::group::GroupId;
use rand::prelude::*;

/// Hand is the fixed-size random sample drawn from the deck for one trial.
/// Card order is arbitrary; only membership and multiplicity matter to the
/// evaluation routines below.
#[derive(Debug, Clone)]
pub struct Hand {
  cards: Vec<CardId>,
}

/// Draws `hand_size` distinct indices in `[0, deck_size)` by rejection
/// sampling: draw a uniform integer, keep it if unseen, repeat. The expected
/// draw count degrades as `hand_size` approaches `deck_size`, which is fine
/// for this domain (hands of at most ~10 from decks of at most ~60).
pub fn draw_indices(
  rng: &mut impl Rng,
  deck_size: usize,
  hand_size: usize,
) -> Result<Vec<usize>, Error> {
  if hand_size > deck_size {
    return Err(Error::HandSizeExceedsDeck {
      hand_size,
      deck_size,
    });
  }
  let mut indices: Vec<usize> = Vec::with_capacity(hand_size);
  while indices.len() < hand_size {
    let candidate = rng.gen_range(0, deck_size);
    if !indices.contains(&candidate) {
      indices.push(candidate);
    }
  }
  Ok(indices)
}

impl Hand {
  pub fn from_cards<I, S>(cards: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<CardId>,
  {
    Self {
      cards: cards.into_iter().map(|c| c.into()).collect(),
    }
  }

  /// Draws a random hand of `hand_size` cards from `deck` without replacement
  pub fn draw(rng: &mut impl Rng, deck: &Deck, hand_size: usize) -> Result<Self, Error> {
    let indices = draw_indices(rng, deck.len(), hand_size)?;
    Ok(Self {
      cards: indices.into_iter().map(|i| deck.cards[i].clone()).collect(),
    })
  }

  pub fn cards(&self) -> &[CardId] {
    &self.cards
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  pub fn contains(&self, card: &str) -> bool {
    self.cards.iter().any(|c| c == card)
  }

  /// True iff any card in the hand is a member of the group. A group id that
  /// resolves to nothing is tolerated and evaluates to "no match"; dangling
  /// group references are a recoverable editing state, not a broken run.
  pub fn includes_group(&self, group_id: GroupId, env: &CardEnvironment) -> bool {
    let group = match env.group(group_id) {
      Some(group) => group,
      None => {
        debug!("hand evaluated against unknown group id {}", group_id);
        return false;
      }
    };
    self.cards.iter().any(|card| group.contains(card))
  }

  /// Decides whether the hand satisfies the combo's minimum-required rule.
  ///
  /// The rule counts twice, and both counts must reach `number_required`:
  ///
  /// 1. piece-side: how many piece slots are matched by the hand as a whole;
  /// 2. card-side: how many hand cards each match at least one piece slot.
  ///
  /// The piece-side count alone is not enough. Two copies of one card can
  /// match two different group-type slots and fake a two-piece combo out of
  /// a single distinct card; the card-side count alone is fooled the same
  /// way in reverse. Requiring both keeps duplicate copies honest.
  pub fn includes_combo(&self, combo_id: ComboId, env: &CardEnvironment) -> Result<bool, Error> {
    let combo = env.combo(combo_id).ok_or(Error::UnknownCombo(combo_id))?;
    let piece_count = combo
      .combo_pieces
      .iter()
      .filter(|piece| self.matches_piece(piece, env))
      .count();
    let card_count = self
      .cards
      .iter()
      .filter(|card| {
        combo
          .combo_pieces
          .iter()
          .any(|piece| Self::card_matches_piece(card, piece, env))
      })
      .count();
    Ok(piece_count >= combo.number_required && card_count >= combo.number_required)
  }

  /// True iff the piece is present somewhere in the hand
  fn matches_piece(&self, piece: &ComboPiece, env: &CardEnvironment) -> bool {
    match piece {
      ComboPiece::Card(name) => self.contains(name),
      ComboPiece::Group(group_id) => self.includes_group(*group_id, env),
    }
  }

  /// True iff this single card satisfies the piece on its own
  fn card_matches_piece(card: &str, piece: &ComboPiece, env: &CardEnvironment) -> bool {
    match piece {
      ComboPiece::Card(name) => name == card,
      ComboPiece::Group(group_id) => env
        .group(*group_id)
        .map_or(false, |group| group.contains(card)),
    }
  }

  /// Evaluates one atomic condition against the hand
  pub fn satisfies(&self, condition: &Condition, env: &CardEnvironment) -> Result<bool, Error> {
    match condition {
      Condition::Card(name) => Ok(self.contains(name)),
      Condition::Group(group_id) => Ok(self.includes_group(*group_id, env)),
      Condition::Combo(combo_id) => self.includes_combo(*combo_id, env),
    }
  }

  /// Evaluates a full hand condition: the hand passes iff it matches none of
  /// the exclusions and at least one inclusion. An empty inclusion set can
  /// never pass, which guards against vacuously true conditions.
  pub fn passes(&self, hand_condition: &HandCondition, env: &CardEnvironment) -> Result<bool, Error> {
    if hand_condition.should_include_at_least_one_of.is_empty() {
      return Ok(false);
    }
    // Exclusion wins over inclusion, so check it first
    for condition in &hand_condition.must_not_include {
      if self.satisfies(condition, env)? {
        return Ok(false);
      }
    }
    for condition in &hand_condition.should_include_at_least_one_of {
      if self.satisfies(condition, env)? {
        return Ok(true);
      }
    }
    Ok(false)
  }
}
