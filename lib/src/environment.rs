//! # Card environment
use crate::combo::{Combo, ComboId};
use crate::group::{CardGroup, GroupId};

/// The read-only bundle of group and combo definitions that condition and
/// combo evaluation resolve foreign references against. It is built fresh
/// from the current definitions before a simulation run and never mutated
/// during evaluation; hosts that allow concurrent edits must snapshot first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEnvironment {
  pub card_groups: Vec<CardGroup>,
  pub combos: Vec<Combo>,
}

impl CardEnvironment {
  pub fn new(card_groups: Vec<CardGroup>, combos: Vec<Combo>) -> Self {
    Self {
      card_groups,
      combos,
    }
  }

  pub fn group(&self, id: GroupId) -> Option<&CardGroup> {
    self.card_groups.iter().find(|group| group.id == id)
  }

  pub fn combo(&self, id: ComboId) -> Option<&Combo> {
    self.combos.iter().find(|combo| combo.id == id)
  }
}
