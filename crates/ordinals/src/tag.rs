use super::*;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Tag {
  Body = 0,
  Divisibility = 1,
  Flags = 2,
  Spacers = 3,
  Rune = 4,
  Symbol = 5,
  Premine = 6,
  Cap = 8,
  Amount = 10,
  HeightStart = 12,
  HeightEnd = 14,
  OffsetStart = 16,
  OffsetEnd = 18,
  Mint = 20,
  Pointer = 22,
  Cenotaph = 126,
  #[allow(unused)]
  Nop = 127,
}

impl Tag {
  pub fn from_u128(n: u128) -> Option<Tag> {
    Some(match n {
      0 => Tag::Body,
      1 => Tag::Divisibility,
      2 => Tag::Flags,
      3 => Tag::Spacers,
      4 => Tag::Rune,
      5 => Tag::Symbol,
      6 => Tag::Premine,
      8 => Tag::Cap,
      10 => Tag::Amount,
      12 => Tag::HeightStart,
      14 => Tag::HeightEnd,
      16 => Tag::OffsetStart,
      18 => Tag::OffsetEnd,
      20 => Tag::Mint,
      22 => Tag::Pointer,
      126 => Tag::Cenotaph,
      127 => Tag::Nop,
      _ => return None,
    })
  }

  pub fn is_even(n: u128) -> bool {
    n % 2 == 0
  }

  /// Consume exactly `N` values under this tag from `fields` and narrow them
  /// with `with`. Under-supply (fewer than `N` values queued) leaves the map
  /// untouched and returns `None`. Once `N` values are available they are
  /// always removed, even if `with` rejects them as out of range — a
  /// narrowing failure still counts as "the tag was seen".
  pub fn take<const N: usize>(
    self,
    fields: &mut HashMap<u128, Vec<u128>>,
    with: impl FnOnce([u128; N]) -> Option<[u128; N]>,
  ) -> Option<[u128; N]> {
    let tag = self as u128;
    let values = fields.get_mut(&tag)?;

    if values.len() < N {
      return None;
    }

    let mut array = [0u128; N];
    array.copy_from_slice(&values[..N]);

    let taken = with(array);

    values.drain(..N);
    if values.is_empty() {
      fields.remove(&tag);
    }

    taken
  }

  pub fn encode(self, values: &[u128], payload: &mut Vec<u8>) {
    for value in values {
      varint::encode_to_vec(self as u128, payload);
      varint::encode_to_vec(*value, payload);
    }
  }

  pub fn encode_option(self, value: Option<u128>, payload: &mut Vec<u8>) {
    if let Some(value) = value {
      self.encode(&[value], payload);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn map(pairs: &[(u128, &[u128])]) -> HashMap<u128, Vec<u128>> {
    pairs
      .iter()
      .map(|(tag, values)| (*tag, values.to_vec()))
      .collect()
  }

  #[test]
  fn under_supply_leaves_map_untouched() {
    let mut fields = map(&[(Tag::Mint as u128, &[5])]);
    let taken = Tag::Mint.take::<2>(&mut fields, Some);
    assert_eq!(taken, None);
    assert_eq!(fields.get(&(Tag::Mint as u128)).unwrap(), &[5]);
  }

  #[test]
  fn narrowing_failure_still_consumes() {
    let mut fields = map(&[(Tag::Divisibility as u128, &[100])]);
    let taken = Tag::Divisibility.take::<1>(&mut fields, |[v]| if v <= 38 { Some([v]) } else { None });
    assert_eq!(taken, None);
    assert!(!fields.contains_key(&(Tag::Divisibility as u128)));
  }

  #[test]
  fn exact_supply_is_drained() {
    let mut fields = map(&[(Tag::Mint as u128, &[1, 2])]);
    let taken = Tag::Mint.take::<2>(&mut fields, Some);
    assert_eq!(taken, Some([1, 2]));
    assert!(fields.is_empty());
  }

  #[test]
  fn excess_values_remain_queued() {
    let mut fields = map(&[(Tag::Rune as u128, &[4, 5])]);
    let taken = Tag::Rune.take::<1>(&mut fields, Some);
    assert_eq!(taken, Some([4]));
    assert_eq!(fields.get(&(Tag::Rune as u128)).unwrap(), &[5]);
  }
}
