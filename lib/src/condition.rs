//! # Atomic conditions and hand conditions
use crate::combo::{ComboId, ForeignId};
use crate::deck::CardId;
use crate::error::Error;
use crate::group::GroupId;

/// An atomic yes/no test against a hand: a direct card, a group, or a combo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "foreignId", rename_all = "camelCase")]
pub enum Condition {
  Card(CardId),
  Group(GroupId),
  Combo(ComboId),
}

impl Condition {
  /// Builds a condition from an untyped `{ type, foreignId }` pair,
  /// rejecting unrecognized kinds and mismatched id shapes up front
  pub fn from_raw(kind: &str, foreign_id: ForeignId) -> Result<Self, Error> {
    match (kind, foreign_id) {
      ("card", ForeignId::Name(name)) => Ok(Condition::Card(name)),
      ("group", ForeignId::Id(id)) => Ok(Condition::Group(id)),
      ("combo", ForeignId::Id(id)) => Ok(Condition::Combo(id)),
      ("card", ForeignId::Id(id)) => Err(Error::InvalidConditionType(format!(
        "foreign id {} of condition of type card is not a card name",
        id
      ))),
      (kind @ "group", ForeignId::Name(name)) | (kind @ "combo", ForeignId::Name(name)) => {
        Err(Error::InvalidConditionType(format!(
          "foreign id {:?} of condition of type {} is not a numeric id",
          name, kind
        )))
      }
      (other, _) => Err(Error::InvalidConditionType(format!(
        "unrecognized condition type {:?}",
        other
      ))),
    }
  }
}

/// A HandCondition is a named rule over a drawn hand: the hand passes iff it
/// matches none of `must_not_include` and at least one of
/// `should_include_at_least_one_of`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandCondition {
  pub id: u32,
  pub name: String,
  pub should_include_at_least_one_of: Vec<Condition>,
  pub must_not_include: Vec<Condition>,
}

impl HandCondition {
  pub fn new(
    id: u32,
    name: &str,
    should_include_at_least_one_of: Vec<Condition>,
    must_not_include: Vec<Condition>,
  ) -> Self {
    Self {
      id,
      name: name.to_string(),
      should_include_at_least_one_of,
      must_not_include,
    }
  }
}
