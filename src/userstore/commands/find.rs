use crate::commands::{CmdResult, Payload};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{find_position, require_flag};

/// Look up the first user with `id`. A miss yields an empty result.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let users = store.load()?;
    let id = require_flag("id", id)?;

    let result = CmdResult::default();
    match find_position(&users, id) {
        Some(pos) => Ok(result.with_payload(Payload::Record(users[pos].clone()))),
        None => {
            tracing::debug!(id, "no user with id");
            Ok(result)
        }
    }
}
