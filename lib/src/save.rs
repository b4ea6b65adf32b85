//! # Named deck saves
//!
//! The surrounding application persists the whole working state as a named,
//! timestamped blob: the spread-out main deck plus the group, combo, and hand
//! condition definitions. JSON is the interchange shape; `to_bytes` /
//! `from_bytes` give a compact gzipped bincode form for export files.
use crate::combo::Combo;
use crate::condition::HandCondition;
use crate::deck::CardId;
use crate::environment::CardEnvironment;
use crate::group::CardGroup;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
  #[error("save blob serialization failed: {0}")]
  Bincode(#[from] bincode::Error),
  #[error("save blob io failed: {0}")]
  Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFile {
  pub name: String,
  pub saved_at: DateTime<Utc>,
  pub main_deck: Vec<CardId>,
  pub groups: Vec<CardGroup>,
  pub combos: Vec<Combo>,
  pub hand_conditions: Vec<HandCondition>,
}

impl SaveFile {
  pub fn new(
    name: &str,
    main_deck: Vec<CardId>,
    groups: Vec<CardGroup>,
    combos: Vec<Combo>,
    hand_conditions: Vec<HandCondition>,
  ) -> Self {
    Self {
      name: name.to_string(),
      saved_at: Utc::now(),
      main_deck,
      groups,
      combos,
      hand_conditions,
    }
  }

  /// The per-run evaluation environment reconstructed from this save
  pub fn environment(&self) -> CardEnvironment {
    CardEnvironment::new(self.groups.clone(), self.combos.clone())
  }

  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  /// Gzipped bincode export blob
  pub fn to_bytes(&self) -> Result<Vec<u8>, SaveError> {
    let encoded = bincode::serialize(self)?;
    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    gz.write_all(&encoded)?;
    Ok(gz.finish()?)
  }

  pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaveError> {
    let mut gz = GzDecoder::new(bytes);
    let mut decoded: Vec<u8> = Vec::new();
    gz.read_to_end(&mut decoded)?;
    Ok(bincode::deserialize(&decoded)?)
  }
}
