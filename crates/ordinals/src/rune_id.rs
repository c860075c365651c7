use super::*;

/// The identity of an etched rune: the height of the block it was etched in
/// and its index among the etchings in that block's transaction order.
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
)]
pub struct RuneId {
  pub block: u64,
  pub tx: u32,
}

#[derive(Debug, PartialEq, Copy, Clone, thiserror::Error)]
pub enum RuneIdError {
  #[error("invalid format")]
  Separator,
  #[error("invalid block: {0}")]
  Block(ParseIntError),
  #[error("invalid tx: {0}")]
  Tx(ParseIntError),
}

impl Serialize for RuneIdError {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl RuneId {
  /// `block == 0` is reserved for the genesis block, which cannot hold an
  /// etching transaction other than the coinbase, so `tx` must be zero too.
  pub fn new(block: u64, tx: u32) -> Option<RuneId> {
    let id = RuneId { block, tx };

    (id.block > 0 || id.tx == 0).then_some(id)
  }

  /// Delta-encode `self` against a later id `next`: `next` must not be
  /// earlier than `self`. When the block advances, `tx` is carried
  /// absolute; when the block doesn't move, `tx` is carried relative.
  pub fn delta(self, next: RuneId) -> Option<(u128, u128)> {
    let block = next.block.checked_sub(self.block)?;

    let tx = if block == 0 {
      next.tx.checked_sub(self.tx)?
    } else {
      next.tx
    };

    Some((u128::from(block), u128::from(tx)))
  }

  /// Inverse of `delta`: reconstruct the following id from deltas encoded
  /// relative to `self`.
  pub fn next(self, block: u128, tx: u128) -> Option<RuneId> {
    RuneId::new(
      self.block.checked_add(u64::try_from(block).ok()?)?,
      if block == 0 {
        self.tx.checked_add(u32::try_from(tx).ok()?)?
      } else {
        u32::try_from(tx).ok()?
      },
    )
  }
}

impl Display for RuneId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.block, self.tx)
  }
}

impl FromStr for RuneId {
  type Err = RuneIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (block, tx) = s.split_once(':').ok_or(RuneIdError::Separator)?;

    Ok(Self {
      block: block.parse().map_err(RuneIdError::Block)?,
      tx: tx.parse().map_err(RuneIdError::Tx)?,
    })
  }
}

impl cmp::PartialEq<(u64, u32)> for RuneId {
  fn eq(&self, (block, tx): &(u64, u32)) -> bool {
    self.block == *block && self.tx == *tx
  }
}
