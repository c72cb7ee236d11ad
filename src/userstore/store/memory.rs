use super::{decode, encode, DataStore};
use crate::error::Result;
use crate::model::User;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Holds the encoded collection as bytes so loads go through the same
/// decoding as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Vec<u8>,
    persist_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored content, valid or not.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into(),
            persist_count: 0,
        }
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// How many times the collection has been persisted.
    pub fn persist_count(&self) -> usize {
        self.persist_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<User>> {
        decode(&self.contents)
    }

    fn persist(&mut self, users: &[User]) -> Result<()> {
        self.contents = encode(users, false)?;
        self.persist_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        users: Vec<User>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                users: Vec::new(),
            }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for _ in 0..count {
                let n = self.users.len() + 1;
                self.users.push(User::new(
                    n.to_string(),
                    format!("user{}@example.com", n),
                    20 + n as i64,
                ));
            }
            self.sync()
        }

        pub fn with_user(mut self, id: &str, email: &str, age: i64) -> Self {
            self.users.push(User::new(id, email, age));
            self.sync()
        }

        fn sync(mut self) -> Self {
            self.store.contents = encode(&self.users, false).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
