//! # Storage Layer
//!
//! The backing store is injected into the dispatcher as a [`DataStore`]: a
//! capability that can load the whole collection and persist the whole
//! collection. There are no partial reads or partial writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production store, one JSON file
//!   - Empty file content means an empty collection
//!   - Every persist truncates the file and rewrites it from offset 0
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - Keeps the last persisted collection and counts persists
//!
//! ## Storage Format
//!
//! ```text
//! users.json     [{"id":"1","email":"a@b.com","age":30}]
//! ```
//!
//! Records keep insertion order. Nothing enforces unique ids.

use crate::error::{Result, UserStoreError};
use crate::model::User;
use serde::Serialize;

pub mod fs;
pub mod memory;

/// Abstract interface for the user collection's persistence.
pub trait DataStore {
    /// Load the full collection, in stored order.
    fn load(&self) -> Result<Vec<User>>;

    /// Replace the stored collection with `users`.
    fn persist(&mut self, users: &[User]) -> Result<()>;
}

/// Encode a value the way the store writes it.
///
/// `<`, `>`, `&`, U+2028 and U+2029 are written as `\u` escapes, so the
/// bytes match what other JSON writers of this file format produce.
pub fn encode<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    encoded.map(escape_html).map_err(UserStoreError::Encode)
}

// These characters can only occur inside string literals of encoded JSON,
// so escaping them anywhere in the output is safe.
fn escape_html(encoded: Vec<u8>) -> Vec<u8> {
    const LS: &[u8] = "\u{2028}".as_bytes();
    const PS: &[u8] = "\u{2029}".as_bytes();

    let mut out = Vec::with_capacity(encoded.len());
    let mut i = 0;
    while i < encoded.len() {
        let rest = &encoded[i..];
        match rest[0] {
            b'<' => out.extend_from_slice(br"\u003c"),
            b'>' => out.extend_from_slice(br"\u003e"),
            b'&' => out.extend_from_slice(br"\u0026"),
            _ if rest.starts_with(LS) => {
                out.extend_from_slice(br"\u2028");
                i += LS.len();
                continue;
            }
            _ if rest.starts_with(PS) => {
                out.extend_from_slice(br"\u2029");
                i += PS.len();
                continue;
            }
            b => out.push(b),
        }
        i += 1;
    }
    out
}

/// Decode stored bytes into a collection. Empty input and `null` are an
/// empty collection; a `null` element is a zero-valued user.
pub fn decode(bytes: &[u8]) -> Result<Vec<User>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let users: Option<Vec<Option<User>>> =
        serde_json::from_slice(bytes).map_err(UserStoreError::Decode)?;
    Ok(users
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
