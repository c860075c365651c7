use super::*;

/// Mint constraints attached to an [`Etching`]. All fields are optional;
/// an absent bound imposes no restriction.
#[serde_with::serde_as]
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Terms {
  #[serde_as(as = "Option<DisplayFromStr>")]
  pub amount: Option<u128>,
  #[serde_as(as = "Option<DisplayFromStr>")]
  pub cap: Option<u128>,
  pub height: (Option<u64>, Option<u64>),
  pub offset: (Option<u64>, Option<u64>),
}
