//! # API Facade
//!
//! The API layer is the operation dispatcher. It is the single entry point
//! for the four operations regardless of the front-end driving them.
//!
//! ## Role and Responsibilities
//!
//! - **Validates** the request in a fixed order: operation present,
//!   operation supported, file name present
//! - **Opens** the backing store only once the request is valid
//! - **Dispatches** to exactly one command in `commands/*.rs`
//! - **Emits** the command's messages and JSON payload to a writer
//!
//! Per-operation flags (`item`, `id`) are checked by the commands after the
//! collection is loaded, so a corrupt store is reported first.
//!
//! ## Generic Over DataStore
//!
//! `UserStoreApi<S: DataStore>` is generic over the storage backend:
//! - Production: `UserStoreApi<FileStore>`, built by [`perform`]
//! - Testing: `UserStoreApi<InMemoryStore>`

use crate::commands::helpers::require_flag;
use crate::commands::{self, CmdResult, MessageLevel, Payload};
use crate::config::UserStoreConfig;
use crate::error::Result;
use crate::model::Operation;
use crate::store::fs::FileStore;
use crate::store::{encode, DataStore};
use std::io::Write;

/// The raw request, one field per command-line flag. Unset flags are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub operation: String,
    pub file_name: String,
    pub id: String,
    pub item: String,
}

impl Arguments {
    pub fn new(operation: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }
}

/// Check the request-level flags and resolve the operation.
pub fn validate(args: &Arguments) -> Result<Operation> {
    let operation: Operation = require_flag("operation", &args.operation)?.parse()?;
    require_flag("fileName", &args.file_name)?;
    Ok(operation)
}

/// Run one request against the file named in `args`, writing any output
/// to `out`.
pub fn perform<W: Write>(args: &Arguments, config: &UserStoreConfig, out: &mut W) -> Result<()> {
    let operation = validate(args)?;
    let store = FileStore::open(&args.file_name)?.with_pretty(config.pretty);
    let mut api = UserStoreApi::new(store).with_pretty(config.pretty);

    let result = api.execute(operation, args)?;
    api.emit(&result, out)
}

/// The main API facade for userstore operations.
pub struct UserStoreApi<S: DataStore> {
    store: S,
    pretty: bool,
}

impl<S: DataStore> UserStoreApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pretty: false,
        }
    }

    /// Emit payloads as indented JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_user(&mut self, item: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, item)
    }

    pub fn list_users(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_user(&self, id: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn remove_user(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn execute(&mut self, operation: Operation, args: &Arguments) -> Result<CmdResult> {
        tracing::debug!(%operation, mutating = operation.is_mutating(), "dispatching");
        match operation {
            Operation::Add => self.add_user(&args.item),
            Operation::List => self.list_users(),
            Operation::FindById => self.find_user(&args.id),
            Operation::Remove => self.remove_user(&args.id),
        }
    }

    /// Write messages, then the payload, exactly as produced. Nothing is
    /// written for an empty result. Messages are also logged at their level.
    pub fn emit<W: Write>(&self, result: &CmdResult, out: &mut W) -> Result<()> {
        for message in &result.messages {
            match message.level {
                MessageLevel::Info => tracing::info!("{}", message.content),
                MessageLevel::Warning => tracing::warn!("{}", message.content),
            }
            out.write_all(message.content.as_bytes())?;
        }
        match &result.payload {
            Some(Payload::Collection(users)) => out.write_all(&encode(users, self.pretty)?)?,
            Some(Payload::Record(user)) => out.write_all(&encode(user, self.pretty)?)?,
            None => {}
        }
        out.flush()?;
        Ok(())
    }
}
