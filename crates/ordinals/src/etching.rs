use super::*;

/// The operation that defines a new rune: its divisibility, premine, mint
/// terms and display symbol. Every field is optional — an absent field
/// falls back to the protocol default.
#[serde_with::serde_as]
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Etching {
  pub divisibility: Option<u8>,
  #[serde_as(as = "Option<DisplayFromStr>")]
  pub premine: Option<u128>,
  pub rune: Option<Rune>,
  pub spacers: Option<u32>,
  pub symbol: Option<char>,
  pub terms: Option<Terms>,
  pub turbo: bool,
}

impl Etching {
  pub const MAX_DIVISIBILITY: u8 = 38;
  pub const MAX_SPACERS: u32 = 0b0000_0111_1111_1111_1111_1111_1111_1111;

  /// Total supply this etching can ever bring into existence: the
  /// premine plus however much the mint terms allow (`cap * amount`).
  /// Checked arithmetic throughout — any overflow of either the
  /// multiplication or the final addition means the supply cannot be
  /// represented and the etching is invalid.
  pub fn supply(&self) -> Option<u128> {
    let premine = self.premine.unwrap_or_default();

    let (cap, amount) = self
      .terms
      .map(|terms| (terms.cap.unwrap_or_default(), terms.amount.unwrap_or_default()))
      .unwrap_or_default();

    premine.checked_add(cap.checked_mul(amount)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn supply_with_no_terms_is_premine() {
    let etching = Etching {
      premine: Some(100),
      ..Default::default()
    };
    assert_eq!(etching.supply(), Some(100));
  }

  #[test]
  fn supply_combines_premine_and_terms() {
    let etching = Etching {
      premine: Some(10),
      terms: Some(Terms {
        cap: Some(5),
        amount: Some(3),
        ..Default::default()
      }),
      ..Default::default()
    };
    assert_eq!(etching.supply(), Some(25));
  }

  #[test]
  fn supply_overflow_in_multiplication_is_none() {
    let etching = Etching {
      terms: Some(Terms {
        cap: Some(u128::MAX),
        amount: Some(2),
        ..Default::default()
      }),
      ..Default::default()
    };
    assert_eq!(etching.supply(), None);
  }

  #[test]
  fn supply_overflow_in_addition_is_none() {
    let etching = Etching {
      premine: Some(u128::MAX),
      terms: Some(Terms {
        cap: Some(1),
        amount: Some(1),
        ..Default::default()
      }),
      ..Default::default()
    };
    assert_eq!(etching.supply(), None);
  }

  #[test]
  fn supply_saturates_to_max_exactly() {
    let etching = Etching {
      premine: Some(u128::MAX / 2 + 1),
      terms: Some(Terms {
        cap: Some(1),
        amount: Some(u128::MAX / 2),
        ..Default::default()
      }),
      ..Default::default()
    };
    assert_eq!(etching.supply(), Some(u128::MAX));
  }
}
