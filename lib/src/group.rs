//! # Card groups
use crate::deck::CardId;
use std::collections::HashSet;

pub type GroupId = u32;

/// A CardGroup is a named equivalence set of cards treated as interchangeable
/// for matching purposes, e.g. every one-card starter of a given combo line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGroup {
  pub id: GroupId,
  pub name: String,
  pub cards: HashSet<CardId>,
}

impl CardGroup {
  pub fn new<I, S>(id: GroupId, name: &str, cards: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<CardId>,
  {
    Self {
      id,
      name: name.to_string(),
      cards: cards.into_iter().map(|c| c.into()).collect(),
    }
  }

  pub fn contains(&self, card: &str) -> bool {
    self.cards.contains(card)
  }
}
