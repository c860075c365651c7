use super::*;

/// An output recognized as carrying a rune protocol message that failed
/// validation. Salvages whatever of the message could still be trusted:
/// a parsed mint claim and the rune name of a partially-constructed
/// etching, nothing else.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Cenotaph {
  pub flaw: Flaw,
  pub mint: Option<RuneId>,
  pub etching: Option<Rune>,
}
