//! Library for interoperating with the rune protocol carried inside Bitcoin
//! `OP_RETURN` outputs: encoding and decoding runestones, the rune name
//! codec, and the supporting value types.
//!
//! The codec is pure and synchronous (see `Runestone::decipher` /
//! `Runestone::encipher`): it never touches the network, never persists
//! state, and never panics on malformed input — malformed-but-recognizable
//! input decodes to a [`Cenotaph`] rather than an error.

use {
  self::{flag::Flag, flaw::FlawSlot, message::Message, rune::RuneParseError, tag::Tag},
  bitcoin::{
    constants::SUBSIDY_HALVING_INTERVAL,
    script::{self, Instruction},
    Network, ScriptBuf, Transaction,
  },
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, DisplayFromStr, SerializeDisplay},
  std::{
    cmp,
    collections::HashMap,
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
  },
};

pub use self::{
  artifact::Artifact,
  cenotaph::Cenotaph,
  edict::Edict,
  etching::Etching,
  flaw::Flaw,
  height::Height,
  rune::Rune,
  rune_id::RuneId,
  runestone::Runestone,
  spaced_rune::SpacedRune,
  terms::Terms,
};

pub mod artifact;
pub mod cenotaph;
pub mod edict;
pub mod etching;
mod flag;
pub mod flaw;
pub mod height;
mod message;
pub mod rune;
pub mod rune_id;
pub mod runestone;
pub mod spaced_rune;
mod tag;
pub mod terms;
pub mod varint;
