use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{find_position, require_flag};

/// Remove the first user with `id` and rewrite the collection.
///
/// The collection is rewritten even when nothing matched.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut users = store.load()?;
    let id = require_flag("id", id)?;

    let mut result = CmdResult::default();
    match find_position(&users, id) {
        Some(pos) => {
            users.remove(pos);
            tracing::info!(id, position = pos, "user removed");
        }
        None => {
            result.add_message(CmdMessage::info(format!("Item with id {} not found", id)));
        }
    }

    store.persist(&users)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::commands::Payload;
    use crate::error::UserStoreError;
    use crate::model::User;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removing_only_user_leaves_empty_list() {
        let mut store = StoreFixture::new().with_user("1", "a@b.com", 30).build();
        let result = run(&mut store, "1").unwrap();

        assert!(result.messages.is_empty());
        let listed = list::run(&store).unwrap();
        assert_eq!(listed.payload, Some(Payload::Collection(Vec::new())));
        assert_eq!(store.contents(), b"[]");
    }

    #[test]
    fn removal_shifts_later_users_left() {
        let mut store = StoreFixture::new().with_users(3).build();
        run(&mut store, "2").unwrap();

        let ids: Vec<_> = store.load().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn only_first_duplicate_is_removed() {
        let mut store = StoreFixture::new()
            .with_user("1", "first@b.com", 30)
            .with_user("2", "other@b.com", 40)
            .with_user("1", "second@b.com", 31)
            .build();
        run(&mut store, "1").unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![
                User::new("2", "other@b.com", 40),
                User::new("1", "second@b.com", 31),
            ]
        );
    }

    #[test]
    fn miss_reports_and_still_rewrites() {
        let mut store = StoreFixture::new().with_users(2).build();
        let before = store.load().unwrap();

        let result = run(&mut store, "42").unwrap();

        assert_eq!(
            result.messages,
            vec![CmdMessage::info("Item with id 42 not found")]
        );
        assert_eq!(store.persist_count(), 1);
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn miss_on_empty_store_writes_empty_array() {
        let mut store = InMemoryStore::new();
        run(&mut store, "1").unwrap();
        assert_eq!(store.contents(), b"[]");
    }

    #[test]
    fn missing_id_is_rejected_without_writing() {
        let mut store = StoreFixture::new().with_users(1).build();
        let err = run(&mut store, "").unwrap_err();
        assert!(matches!(err, UserStoreError::Validation(_)));
        assert_eq!(store.persist_count(), 0);
    }
}
