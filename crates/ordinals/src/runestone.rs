use {
  super::*,
  bitcoin::script::{self, PushBytesBuf},
};

/// `OP_13`, the protocol magic that marks a return-only output as carrying
/// a runestone payload.
const MAGIC_NUMBER: bitcoin::Opcode = bitcoin::opcodes::all::OP_PUSHNUM_13;

/// Maximum number of bytes Bitcoin Script permits in a single push.
const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

/// A well-formed rune protocol message: edicts to execute, an optional new
/// etching, an optional mint claim, and an optional output pointer for
/// unallocated runes.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Runestone {
  pub edicts: Vec<Edict>,
  pub etching: Option<Etching>,
  pub mint: Option<RuneId>,
  pub pointer: Option<u32>,
}

enum Payload {
  Valid(Vec<u8>),
  Invalid(Flaw),
}

impl Runestone {
  /// Number of confirmations a commitment output must accrue before the
  /// reveal transaction that etches against it is considered safe to
  /// broadcast.
  pub const COMMIT_CONFIRMATIONS: u16 = 6;

  /// Recover the [`Artifact`] embedded in `transaction`, if any. Returns
  /// `None` when no output carries the protocol magic — that is not a
  /// flaw, merely the absence of a runestone. Once the magic is found,
  /// the result is always `Some`, holding either a [`Runestone`] or a
  /// [`Cenotaph`].
  pub fn decipher(transaction: &Transaction) -> Option<Artifact> {
    let payload = Runestone::payload(transaction)?;

    let payload = match payload {
      Payload::Invalid(flaw) => {
        return Some(Artifact::Cenotaph(Cenotaph {
          flaw,
          mint: None,
          etching: None,
        }));
      }
      Payload::Valid(payload) => payload,
    };

    let integers = match Runestone::integers(&payload) {
      Ok(integers) => integers,
      Err(flaw) => {
        return Some(Artifact::Cenotaph(Cenotaph {
          flaw,
          mint: None,
          etching: None,
        }));
      }
    };

    let Message {
      flaw: parser_flaw,
      edicts,
      mut fields,
    } = Message::from_integers(transaction, &integers);

    let mut flaw = FlawSlot::default();
    if let Some(parser_flaw) = parser_flaw {
      flaw.set(parser_flaw);
    }

    let mut flags = Tag::Flags
      .take(&mut fields, |[flags]| Some([flags]))
      .map(|[flags]| flags)
      .unwrap_or_default();

    let etching = Flag::Etching.take(&mut flags).then(|| {
      let divisibility = Tag::Divisibility
        .take(&mut fields, |[divisibility]| {
          let divisibility = u8::try_from(divisibility).ok()?;
          (divisibility <= Etching::MAX_DIVISIBILITY).then_some([u128::from(divisibility)])
        })
        .map(|[divisibility]| u8::try_from(divisibility).unwrap());

      let premine = Tag::Premine.take(&mut fields, |[premine]| Some([premine])).map(|[premine]| premine);

      let rune = Tag::Rune.take(&mut fields, |[rune]| Some([rune])).map(|[rune]| Rune(rune));

      let spacers = Tag::Spacers
        .take(&mut fields, |[spacers]| {
          (spacers <= u128::from(Etching::MAX_SPACERS)).then_some([spacers])
        })
        .map(|[spacers]| u32::try_from(spacers).unwrap());

      let symbol = Tag::Symbol
        .take(&mut fields, |[symbol]| {
          char::from_u32(u32::try_from(symbol).ok()?).map(|c| [u128::from(c)])
        })
        .map(|[symbol]| char::from_u32(u32::try_from(symbol).unwrap()).unwrap());

      let terms = Flag::Terms.take(&mut flags).then(|| Terms {
        amount: Tag::Amount.take(&mut fields, |[amount]| Some([amount])).map(|[amount]| amount),
        cap: Tag::Cap.take(&mut fields, |[cap]| Some([cap])).map(|[cap]| cap),
        height: (
          Tag::HeightStart
            .take(&mut fields, |[start]| u64::try_from(start).ok().map(|start| [u128::from(start)]))
            .map(|[start]| u64::try_from(start).unwrap()),
          Tag::HeightEnd
            .take(&mut fields, |[end]| u64::try_from(end).ok().map(|end| [u128::from(end)]))
            .map(|[end]| u64::try_from(end).unwrap()),
        ),
        offset: (
          Tag::OffsetStart
            .take(&mut fields, |[start]| u64::try_from(start).ok().map(|start| [u128::from(start)]))
            .map(|[start]| u64::try_from(start).unwrap()),
          Tag::OffsetEnd
            .take(&mut fields, |[end]| u64::try_from(end).ok().map(|end| [u128::from(end)]))
            .map(|[end]| u64::try_from(end).unwrap()),
        ),
      });

      let turbo = Flag::Turbo.take(&mut flags);

      Etching {
        divisibility,
        premine,
        rune,
        spacers,
        symbol,
        terms,
        turbo,
      }
    });

    let mint = Tag::Mint
      .take(&mut fields, |[block, tx]| {
        RuneId::new(u64::try_from(block).ok()?, u32::try_from(tx).ok()?)?;
        Some([block, tx])
      })
      .and_then(|[block, tx]| RuneId::new(u64::try_from(block).unwrap(), u32::try_from(tx).unwrap()));

    let output_count = u128::try_from(transaction.output.len()).unwrap();

    let pointer = Tag::Pointer
      .take(&mut fields, |[pointer]| {
        (pointer < output_count).then_some([pointer])
      })
      .map(|[pointer]| u32::try_from(pointer).unwrap());

    if let Some(etching) = etching {
      if etching.supply().is_none() {
        flaw.set(Flaw::SupplyOverflow);
      }
    }

    if flags != 0 {
      flaw.set(Flaw::UnrecognizedFlag);
    }

    if fields.keys().any(|tag| Tag::is_even(*tag)) {
      flaw.set(Flaw::UnrecognizedEvenTag);
    }

    Some(match flaw.get() {
      Some(flaw) => Artifact::Cenotaph(Cenotaph {
        flaw,
        mint,
        etching: etching.and_then(|etching| etching.rune),
      }),
      None => Artifact::Runestone(Runestone {
        edicts,
        etching,
        mint,
        pointer,
      }),
    })
  }

  /// Serialize `self` into the canonical `OP_RETURN` script that decodes
  /// back to an equal [`Runestone`].
  pub fn encipher(&self) -> ScriptBuf {
    let mut payload = Vec::new();

    if let Some(etching) = self.etching {
      let mut flags = 0u128;
      Flag::Etching.set(&mut flags);

      if etching.terms.is_some() {
        Flag::Terms.set(&mut flags);
      }

      if etching.turbo {
        Flag::Turbo.set(&mut flags);
      }

      Tag::Flags.encode(&[flags], &mut payload);

      Tag::Rune.encode_option(etching.rune.map(|rune| rune.0), &mut payload);
      Tag::Divisibility.encode_option(etching.divisibility.map(u128::from), &mut payload);
      Tag::Spacers.encode_option(etching.spacers.map(u128::from), &mut payload);
      Tag::Symbol.encode_option(etching.symbol.map(u128::from), &mut payload);
      Tag::Premine.encode_option(etching.premine, &mut payload);

      if let Some(terms) = etching.terms {
        Tag::Amount.encode_option(terms.amount, &mut payload);
        Tag::Cap.encode_option(terms.cap, &mut payload);
        Tag::HeightStart.encode_option(terms.height.0.map(u128::from), &mut payload);
        Tag::HeightEnd.encode_option(terms.height.1.map(u128::from), &mut payload);
        Tag::OffsetStart.encode_option(terms.offset.0.map(u128::from), &mut payload);
        Tag::OffsetEnd.encode_option(terms.offset.1.map(u128::from), &mut payload);
      }
    }

    if let Some(RuneId { block, tx }) = self.mint {
      Tag::Mint.encode(&[u128::from(block), u128::from(tx)], &mut payload);
    }

    Tag::Pointer.encode_option(self.pointer.map(u128::from), &mut payload);

    if !self.edicts.is_empty() {
      varint::encode_to_vec(Tag::Body as u128, &mut payload);

      let mut edicts = self.edicts.clone();
      edicts.sort_by_key(|edict| edict.id);

      let mut id = RuneId::default();
      for edict in edicts {
        let (block, tx) = id.delta(edict.id).unwrap();
        varint::encode_to_vec(block, &mut payload);
        varint::encode_to_vec(tx, &mut payload);
        varint::encode_to_vec(edict.amount, &mut payload);
        varint::encode_to_vec(u128::from(edict.output), &mut payload);
        id = edict.id;
      }
    }

    let mut builder = script::Builder::new()
      .push_opcode(bitcoin::opcodes::all::OP_RETURN)
      .push_opcode(MAGIC_NUMBER);

    for chunk in payload.chunks(MAX_SCRIPT_ELEMENT_SIZE) {
      let mut buf = PushBytesBuf::new();
      buf.extend_from_slice(chunk).unwrap();
      builder = builder.push_slice(buf);
    }

    builder.into_script()
  }

  fn payload(transaction: &Transaction) -> Option<Payload> {
    for output in &transaction.output {
      let mut instructions = output.script_pubkey.instructions();

      match instructions.next() {
        Some(Ok(Instruction::Op(bitcoin::opcodes::all::OP_RETURN))) => {}
        _ => continue,
      }

      match instructions.next() {
        Some(Ok(Instruction::Op(MAGIC_NUMBER))) => {}
        _ => continue,
      }

      let mut payload = Vec::new();

      for result in instructions {
        match result {
          Ok(Instruction::PushBytes(push)) => payload.extend_from_slice(push.as_bytes()),
          Ok(Instruction::Op(_)) => return Some(Payload::Invalid(Flaw::Opcode)),
          Err(_) => return Some(Payload::Invalid(Flaw::InvalidScript)),
        }
      }

      return Some(Payload::Valid(payload));
    }

    None
  }

  fn integers(payload: &[u8]) -> Result<Vec<u128>, Flaw> {
    let mut integers = Vec::new();
    let mut i = 0;

    while i < payload.len() {
      let (integer, length) = varint::decode(&payload[i..]).ok_or(Flaw::Varint)?;
      integers.push(integer);
      i += length;
    }

    Ok(integers)
  }
}
