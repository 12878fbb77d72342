use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines restaurant record data structure.
///
/// Records are created by the server; the client never mutates one once
/// stored. The `id` is an opaque server-assigned identifier.
///
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
}
