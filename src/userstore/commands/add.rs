use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::User;
use crate::store::DataStore;

use super::helpers::{find_position, require_flag};

/// Append the user encoded in `item` and rewrite the collection.
///
/// A user with the same id is reported but not rejected: both records are
/// kept.
pub fn run<S: DataStore>(store: &mut S, item: &str) -> Result<CmdResult> {
    let mut users = store.load()?;
    let item = require_flag("item", item)?;
    let user = User::from_json(item)?;

    let mut result = CmdResult::default();
    if let Some(pos) = find_position(&users, &user.id) {
        result.add_message(CmdMessage::warning(format!(
            "Item with id {} already exists",
            users[pos].id
        )));
    }

    tracing::debug!(id = %user.id, records = users.len() + 1, "adding user");
    users.push(user);
    store.persist(&users)?;

    Ok(result)
}
