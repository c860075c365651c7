use super::*;

/// The result of walking a runestone payload's integer stream: a map from
/// tag to the ordered values seen under it, the edicts parsed from the
/// body (if any), and the first flaw encountered along the way.
#[derive(Debug, PartialEq)]
pub(crate) struct Message {
  pub(crate) flaw: Option<Flaw>,
  pub(crate) edicts: Vec<Edict>,
  pub(crate) fields: HashMap<u128, Vec<u128>>,
}

impl Message {
  pub(crate) fn from_integers(tx: &Transaction, payload: &[u128]) -> Self {
    let mut edicts = Vec::new();
    let mut fields = HashMap::<u128, Vec<u128>>::new();
    let mut flaw = None;

    for i in (0..payload.len()).step_by(2) {
      let tag = payload[i];

      if tag == Tag::Body as u128 {
        let mut id = RuneId::default();

        for chunk in payload[i + 1..].chunks(4) {
          if chunk.len() != 4 {
            flaw.get_or_insert(Flaw::TrailingIntegers);
            break;
          }

          let Some(next) = id.next(chunk[0], chunk[1]) else {
            flaw.get_or_insert(Flaw::EdictRuneId);
            break;
          };

          let Some(edict) = Edict::from_integers(tx, next, chunk[2], chunk[3]) else {
            flaw.get_or_insert(Flaw::EdictOutput);
            break;
          };

          id = next;
          edicts.push(edict);
        }

        break;
      }

      let Some(&value) = payload.get(i + 1) else {
        flaw.get_or_insert(Flaw::TruncatedField);
        break;
      };

      fields.entry(tag).or_default().push(value);
    }

    Self {
      flaw,
      edicts,
      fields,
    }
  }
}
