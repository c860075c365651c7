use super::*;

/// A reason a message that parsed as a runestone was nonetheless rejected.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum Flaw {
  #[error("edict output greater than transaction output count")]
  EdictOutput,
  #[error("invalid rune ID in edict")]
  EdictRuneId,
  #[error("invalid script in OP_RETURN")]
  InvalidScript,
  #[error("non-pushdata opcode in OP_RETURN")]
  Opcode,
  #[error("supply overflows u128")]
  SupplyOverflow,
  #[error("trailing integers in body")]
  TrailingIntegers,
  #[error("field with missing value")]
  TruncatedField,
  #[error("unrecognized even tag")]
  UnrecognizedEvenTag,
  #[error("unrecognized field")]
  UnrecognizedFlag,
  #[error("invalid varint")]
  Varint,
}

/// A single first-write-wins slot for the flaw a `Decipher` pass is allowed
/// to record. The parser's flaw, if any, is always offered first; once set,
/// later offers are no-ops (spec: "the parser's flaw wins").
#[derive(Debug, Default)]
pub(crate) struct FlawSlot(Option<Flaw>);

impl FlawSlot {
  pub(crate) fn set(&mut self, flaw: Flaw) {
    self.0.get_or_insert(flaw);
  }

  pub(crate) fn get(self) -> Option<Flaw> {
    self.0
  }

  pub(crate) fn is_set(&self) -> bool {
    self.0.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_write_wins() {
    let mut slot = FlawSlot::default();
    slot.set(Flaw::Varint);
    slot.set(Flaw::Opcode);
    assert_eq!(slot.get(), Some(Flaw::Varint));
  }

  #[test]
  fn display_matches_canonical_strings() {
    assert_eq!(Flaw::EdictOutput.to_string(), "edict output greater than transaction output count");
    assert_eq!(Flaw::Varint.to_string(), "invalid varint");
  }
}
