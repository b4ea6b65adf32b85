//! # Deck representation and deck list parsing
use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Deref;
use thiserror::Error;

/// The canonical card identity is the card name. Alternate-art prints carry
/// distinct passcodes but must collapse to a single identity for matching,
/// so passcode-to-name resolution happens upstream of the engine.
pub type CardId = String;

/// A Deck is the spread-out main deck: one entry per physical copy,
/// so a card at three copies appears three times
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
  pub cards: Vec<CardId>,
}

#[derive(Debug, Default, Clone)]
pub struct DeckBuilder {
  pub cards: BTreeMap<CardId, usize>,
}

#[derive(Debug, Error, PartialEq)]
#[error("{0}")]
pub struct DecklistError(pub String);

impl DeckBuilder {
  pub fn new() -> Self {
    Self {
      cards: BTreeMap::new(),
    }
  }

  pub fn insert(self, card: CardId) -> Self {
    self.insert_count(card, 1)
  }

  pub fn insert_count(mut self, card: CardId, count: usize) -> Self {
    let total_count = self.cards.entry(card).or_insert(0);
    *total_count += count;
    Self { cards: self.cards }
  }

  pub fn build(self) -> Deck {
    let mut cards = Vec::new();
    for (card, count) in self.cards {
      for _ in 0..count {
        cards.push(card.clone());
      }
    }
    Deck { cards }
  }
}

impl Deck {
  pub fn new() -> Self {
    Self { cards: Vec::new() }
  }

  pub fn from_cards<I>(cards: I) -> Self
  where
    I: IntoIterator<Item = CardId>,
  {
    Self {
      cards: cards.into_iter().collect(),
    }
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  /// Returns the number of physical copies of the named card
  pub fn count_of(&self, name: &str) -> usize {
    self.cards.iter().filter(|c| c.as_str() == name).count()
  }

  /// Parses a plain text deck list of `<amount> <card name>` lines.
  /// Empty lines and `#` comment lines are ignored.
  pub fn from_list(list: &str) -> Result<Self, DecklistError> {
    lazy_static! {
      static ref LIST_LINE_REGEX: Regex = Regex::new(r"^\s*(?P<amount>\d+)\s+(?P<name>[^#\n\r]+)")
        .expect("Failed to compile LIST_LINE_REGEX regex");
    }
    let mut builder = DeckBuilder::new();
    for line in list.trim().lines() {
      let trimmed = line.trim();
      if trimmed.is_empty() {
        continue;
      }
      // Ignore line comments
      if trimmed.starts_with('#') {
        continue;
      }
      let caps = LIST_LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| DecklistError(format!("Cannot regex capture deck list line: {}", line)))?;
      let amount = caps["amount"].parse::<usize>().map_err(|_| {
        DecklistError(format!(
          "Cannot parse usize card amount from deck list line: {}",
          line
        ))
      })?;
      let name = caps["name"].trim().to_string();
      builder = builder.insert_count(name, amount);
    }
    Ok(builder.build())
  }
}

impl Deref for Deck {
  type Target = [CardId];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}

#[macro_export]
macro_rules! decklist {
  ($list:expr) => {
    $crate::deck::Deck::from_list($list).unwrap_or_else(|_| panic!("Bad deck list"))
  };
}
