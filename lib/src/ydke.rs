//! # YDKE deck code parsing
//!
//! Deck sharing URLs of the form `ydke://<main>!<extra>!<side>!`, where each
//! section is the base64 encoding of a little-endian `u32` passcode array.
//! Passcode-to-name resolution belongs to the card metadata layer; the engine
//! boundary value is the three raw id lists.
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum YdkeError {
  #[error("deck code does not start with ydke://")]
  MissingPrefix,
  #[error("deck code does not contain three !-terminated sections")]
  MissingSections,
  #[error("bad base64 in deck code section: {0}")]
  Base64(#[from] base64::DecodeError),
  #[error("deck code section length {0} is not a multiple of 4")]
  TruncatedId(usize),
}

/// The three id lists carried by a YDKE URL
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct YdkeDeck {
  pub main: Vec<u32>,
  pub extra: Vec<u32>,
  pub side: Vec<u32>,
}

pub fn parse_url(url: &str) -> Result<YdkeDeck, YdkeError> {
  let body = url.strip_prefix("ydke://").ok_or(YdkeError::MissingPrefix)?;
  let mut sections = body.split('!');
  let mut next_section = || sections.next().ok_or(YdkeError::MissingSections);
  let main = decode_section(next_section()?)?;
  let extra = decode_section(next_section()?)?;
  let side = decode_section(next_section()?)?;
  Ok(YdkeDeck { main, extra, side })
}

pub fn to_url(deck: &YdkeDeck) -> String {
  format!(
    "ydke://{}!{}!{}!",
    encode_section(&deck.main),
    encode_section(&deck.extra),
    encode_section(&deck.side)
  )
}

fn decode_section(section: &str) -> Result<Vec<u32>, YdkeError> {
  let bytes = base64::decode(section)?;
  if bytes.len() % 4 != 0 {
    return Err(YdkeError::TruncatedId(bytes.len()));
  }
  Ok(
    bytes
      .chunks_exact(4)
      .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
      .collect(),
  )
}

fn encode_section(ids: &[u32]) -> String {
  let mut bytes = Vec::with_capacity(ids.len() * 4);
  for id in ids {
    bytes.extend_from_slice(&id.to_le_bytes());
  }
  base64::encode(&bytes)
}
