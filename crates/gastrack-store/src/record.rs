use gastrack_types::{EntryId, FuelEntry};
use serde_json::Value;

use crate::Result;

/// Entries decoded from the stored payload
pub(crate) struct Decoded {
    pub entries: Vec<FuelEntry>,
    /// How many records arrived without an id and were given a fresh one
    pub backfilled: usize,
}

/// Decode the stored JSON array, repairing records that predate identifiers.
///
/// A record whose `id` is absent, null or empty gets a newly generated id;
/// every other field must still be well-formed or the whole payload is
/// rejected.
pub(crate) fn decode_entries(payload: &str) -> Result<Decoded> {
    let raw: Vec<Value> = serde_json::from_str(payload)?;
    let mut entries = Vec::with_capacity(raw.len());
    let mut backfilled = 0;

    for mut record in raw {
        if let Value::Object(fields) = &mut record {
            let has_id = matches!(fields.get("id"), Some(Value::String(id)) if !id.is_empty());
            if !has_id {
                fields.insert(
                    "id".to_string(),
                    Value::String(EntryId::generate().to_string()),
                );
                backfilled += 1;
            }
        }
        entries.push(serde_json::from_value(record)?);
    }

    Ok(Decoded {
        entries,
        backfilled,
    })
}

pub(crate) fn encode_entries(entries: &[FuelEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}
