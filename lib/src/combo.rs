//! # Combos and combo pieces
use crate::deck::CardId;
use crate::error::Error;
use crate::group::GroupId;

pub type ComboId = u32;

/// The loosely typed foreign id shape the persistence layer produces:
/// either a card name or a numeric group/combo id. Which one is legal is
/// decided by the declared kind it is paired with, see `ComboPiece::from_raw`
/// and `Condition::from_raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForeignId {
  Id(u32),
  Name(CardId),
}

/// A single slot in a combo definition, referring either directly to a card
/// or to a group of interchangeable cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "foreignId", rename_all = "camelCase")]
pub enum ComboPiece {
  Card(CardId),
  Group(GroupId),
}

impl ComboPiece {
  /// Builds a piece from an untyped `{ type, foreignId }` pair. A kind that
  /// is unrecognized or mismatched with the id shape is a data-construction
  /// bug in the caller and is rejected before any evaluation runs.
  pub fn from_raw(kind: &str, foreign_id: ForeignId) -> Result<Self, Error> {
    match (kind, foreign_id) {
      ("card", ForeignId::Name(name)) => Ok(ComboPiece::Card(name)),
      ("group", ForeignId::Id(id)) => Ok(ComboPiece::Group(id)),
      ("card", ForeignId::Id(id)) => Err(Error::InvalidComboPiece(format!(
        "foreign id {} of combo piece of type card is not a card name",
        id
      ))),
      ("group", ForeignId::Name(name)) => Err(Error::InvalidComboPiece(format!(
        "foreign id {:?} of combo piece of type group is not a group id",
        name
      ))),
      (other, _) => Err(Error::InvalidComboPiece(format!(
        "unrecognized combo piece type {:?}",
        other
      ))),
    }
  }
}

/// A Combo names a set of piece slots and the minimum number of them that
/// must be present in a hand. `number_required` greater than the piece count
/// is representable but unsatisfiable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
  pub id: ComboId,
  pub name: String,
  pub combo_pieces: Vec<ComboPiece>,
  pub number_required: usize,
}

impl Combo {
  pub fn new(id: ComboId, name: &str, combo_pieces: Vec<ComboPiece>, number_required: usize) -> Self {
    Self {
      id,
      name: name.to_string(),
      combo_pieces,
      number_required,
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::combo::*;

  #[test]
  fn from_raw_accepts_matched_pairs() {
    let piece = ComboPiece::from_raw("card", ForeignId::Name("Raigeki".to_string())).unwrap();
    assert_eq!(piece, ComboPiece::Card("Raigeki".to_string()));
    let piece = ComboPiece::from_raw("group", ForeignId::Id(2)).unwrap();
    assert_eq!(piece, ComboPiece::Group(2));
  }

  #[test]
  fn from_raw_rejects_mismatched_pairs() {
    assert!(matches!(
      ComboPiece::from_raw("card", ForeignId::Id(7)),
      Err(Error::InvalidComboPiece(_))
    ));
    assert!(matches!(
      ComboPiece::from_raw("group", ForeignId::Name("Raigeki".to_string())),
      Err(Error::InvalidComboPiece(_))
    ));
  }

  #[test]
  fn from_raw_rejects_unknown_kind() {
    assert!(matches!(
      ComboPiece::from_raw("deck", ForeignId::Id(1)),
      Err(Error::InvalidComboPiece(_))
    ));
  }

  #[test]
  fn serde_uses_tagged_foreign_id_shape() {
    let piece: ComboPiece = serde_json::from_str(r#"{"type":"group","foreignId":2}"#).unwrap();
    assert_eq!(piece, ComboPiece::Group(2));
    let piece: ComboPiece =
      serde_json::from_str(r#"{"type":"card","foreignId":"Ash Blossom & Joyous Spring"}"#).unwrap();
    assert_eq!(piece, ComboPiece::Card("Ash Blossom & Joyous Spring".to_string()));
    // A group id must be numeric
    let malformed = serde_json::from_str::<ComboPiece>(r#"{"type":"group","foreignId":"2"}"#);
    assert!(malformed.is_err());
  }

  #[test]
  fn combo_serde_round_trip() {
    let combo = Combo::new(
      1,
      "Two-card starter",
      vec![ComboPiece::Group(1), ComboPiece::Group(2)],
      2,
    );
    let json = serde_json::to_string(&combo).unwrap();
    assert!(json.contains("\"comboPieces\""));
    assert!(json.contains("\"numberRequired\":2"));
    let back: Combo = serde_json::from_str(&json).unwrap();
    assert_eq!(back.combo_pieces.len(), 2);
    assert_eq!(back.number_required, 2);
  }
}
