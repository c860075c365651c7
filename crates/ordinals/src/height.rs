use super::*;

/// A Bitcoin block height.
#[derive(
  Debug,
  PartialEq,
  Copy,
  Clone,
  Hash,
  Eq,
  PartialOrd,
  Ord,
  Default,
  DeserializeFromStr,
  SerializeDisplay,
  derive_more::Display,
  derive_more::FromStr,
)]
pub struct Height(pub u64);

impl From<u64> for Height {
  fn from(n: u64) -> Self {
    Self(n)
  }
}

impl From<Height> for u64 {
  fn from(height: Height) -> Self {
    height.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(Height(0).to_string(), "0");
    assert_eq!(Height(840_000).to_string(), "840000");
  }

  #[test]
  fn from_str() {
    assert_eq!("840000".parse::<Height>().unwrap(), Height(840_000));
  }
}
