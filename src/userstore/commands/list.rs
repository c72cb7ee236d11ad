use crate::commands::{CmdResult, Payload};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let users = store.load()?;
    Ok(CmdResult::default().with_payload(Payload::Collection(users)))
}
