use super::*;

/// A [`Rune`] together with a spacer bitmask recording where cosmetic
/// separators (`•` or `.`) fall in its canonical printable form. Bit `i` of
/// `spacers` marks a spacer immediately after the rune string's `i`-th
/// letter.
#[derive(Debug, PartialEq, Copy, Clone, Hash, Eq, Default, DeserializeFromStr, SerializeDisplay)]
pub struct SpacedRune {
  pub rune: Rune,
  pub spacers: u32,
}

impl SpacedRune {
  pub fn new(rune: Rune, spacers: u32) -> Self {
    Self { rune, spacers }
  }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SpacedRuneParseError {
  #[error("invalid character `{0}`")]
  Character(char),
  #[error("leading spacer")]
  LeadingSpacer,
  #[error("trailing spacer")]
  TrailingSpacer,
  #[error("double spacer")]
  DoubleSpacer,
  #[error(transparent)]
  Rune(RuneParseError),
}

impl Serialize for SpacedRuneParseError {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl FromStr for SpacedRune {
  type Err = SpacedRuneParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut rune = String::new();
    let mut spacers = 0u32;

    for c in s.chars() {
      match c {
        'A'..='Z' => rune.push(c),
        '.' | '•' => {
          let i = rune
            .len()
            .checked_sub(1)
            .ok_or(SpacedRuneParseError::LeadingSpacer)?;

          let flag = 1 << i;

          if spacers & flag != 0 {
            return Err(SpacedRuneParseError::DoubleSpacer);
          }

          spacers |= flag;
        }
        _ => return Err(SpacedRuneParseError::Character(c)),
      }
    }

    if 32 - spacers.leading_zeros() >= u32::try_from(rune.len()).unwrap_or(u32::MAX) {
      return Err(SpacedRuneParseError::TrailingSpacer);
    }

    Ok(SpacedRune {
      rune: rune.parse().map_err(SpacedRuneParseError::Rune)?,
      spacers,
    })
  }
}

impl Display for SpacedRune {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let rune = self.rune.to_string();

    for (i, c) in rune.chars().enumerate() {
      write!(f, "{c}")?;

      if i < rune.len() - 1 && self.spacers & (1 << i) != 0 {
        write!(f, "•")?;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip() {
    for s in ["A", "A•B", "A•B•C", "AB•CD•EF", "X.Y.Z"] {
      let parsed: SpacedRune = s.parse().unwrap();
      // canonical form always uses the bullet
      let canonical = s.replace('.', "•");
      assert_eq!(parsed.to_string(), canonical);
    }
  }

  #[test]
  fn empty_string_is_rejected() {
    // Caught as a trailing spacer before the empty rune name ever reaches
    // Rune::from_str, but must still be rejected rather than yielding
    // SpacedRune { rune: Rune(0), .. }.
    assert_eq!("".parse::<SpacedRune>(), Err(SpacedRuneParseError::TrailingSpacer));
  }

  #[test]
  fn leading_spacer_rejected() {
    assert_eq!("•A".parse::<SpacedRune>(), Err(SpacedRuneParseError::LeadingSpacer));
  }

  #[test]
  fn trailing_spacer_rejected() {
    assert_eq!("A•".parse::<SpacedRune>(), Err(SpacedRuneParseError::TrailingSpacer));
  }

  #[test]
  fn double_spacer_rejected() {
    assert_eq!("A••B".parse::<SpacedRune>(), Err(SpacedRuneParseError::DoubleSpacer));
  }

  #[test]
  fn invalid_character_rejected() {
    assert_eq!("A1B".parse::<SpacedRune>(), Err(SpacedRuneParseError::Character('1')));
  }

  #[test]
  fn invalid_rune_propagates() {
    assert!(matches!(
      "a".parse::<SpacedRune>(),
      Err(SpacedRuneParseError::Character('a'))
    ));
  }

  #[test]
  fn bit_positions() {
    let spaced: SpacedRune = "A•BC•D".parse().unwrap();
    assert_eq!(spaced.rune, "ABCD".parse().unwrap());
    assert_eq!(spaced.spacers, 0b101);
  }
}
