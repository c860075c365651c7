use super::*;

/// An instruction to transfer `amount` of the rune identified by `id` to
/// the transaction output at index `output`.
#[serde_with::serde_as]
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Edict {
  pub id: RuneId,
  #[serde_as(as = "DisplayFromStr")]
  pub amount: u128,
  pub output: u32,
}

impl Edict {
  /// Build an edict, rejecting an `output` that points past the end of
  /// the transaction's output vector. Equality with the output count is
  /// permitted — it is how edicts reference "the rest" as a pseudo-output
  /// in consumers outside this codec's scope.
  pub fn from_integers(tx: &Transaction, id: RuneId, amount: u128, output: u128) -> Option<Self> {
    let output = u32::try_from(output).ok()?;

    if output as usize > tx.output.len() {
      return None;
    }

    Some(Self { id, amount, output })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bitcoin::{absolute::LockTime, transaction::Version, Amount, ScriptBuf, TxOut};

  fn tx(outputs: usize) -> Transaction {
    Transaction {
      version: Version(2),
      lock_time: LockTime::ZERO,
      input: Vec::new(),
      output: vec![
        TxOut {
          value: Amount::ZERO,
          script_pubkey: ScriptBuf::new()
        };
        outputs
      ],
    }
  }

  #[test]
  fn output_within_range_is_accepted() {
    let id = RuneId { block: 1, tx: 1 };
    assert!(Edict::from_integers(&tx(2), id, 10, 1).is_some());
  }

  #[test]
  fn output_equal_to_count_is_accepted() {
    let id = RuneId { block: 1, tx: 1 };
    assert!(Edict::from_integers(&tx(2), id, 10, 2).is_some());
  }

  #[test]
  fn output_past_count_is_rejected() {
    let id = RuneId { block: 1, tx: 1 };
    assert!(Edict::from_integers(&tx(2), id, 10, 3).is_none());
  }

  #[test]
  fn output_overflowing_u32_is_rejected() {
    let id = RuneId { block: 1, tx: 1 };
    assert!(Edict::from_integers(&tx(2), id, 10, u128::from(u32::MAX) + 1).is_none());
  }
}
