//! # Engine error taxonomy
//!
//! Every variant except dangling group references is fatal: it aborts the
//! simulation run in flight, since continuing after a data-integrity fault
//! would produce misleading statistics. A group id that resolves to nothing
//! is the sole recoverable case and evaluates to "no match" instead.
use crate::combo::ComboId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  /// A hand cannot be drawn without replacement from a smaller deck
  #[error("hand size {hand_size} exceeds deck size {deck_size}")]
  HandSizeExceedsDeck { hand_size: usize, deck_size: usize },
  /// A condition or piece referenced a combo id absent from the environment
  #[error("no combo with id {0} in the card environment")]
  UnknownCombo(ComboId),
  /// A combo piece's declared kind does not match its foreign id shape
  #[error("invalid combo piece: {0}")]
  InvalidComboPiece(String),
  /// A condition's declared kind is unrecognized or mismatched
  #[error("invalid condition type: {0}")]
  InvalidConditionType(String),
  /// Simulation inputs contained no cards to draw from
  #[error("deck is empty")]
  EmptyDeck,
  /// The cancel flag was raised between trials
  #[error("simulation cancelled")]
  Cancelled,
}
