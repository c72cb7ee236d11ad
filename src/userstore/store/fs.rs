use super::{decode, encode, DataStore};
use crate::error::Result;
use crate::model::User;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// File-backed store holding the collection as one JSON array.
///
/// The file is opened once, read/write, and stays open for the lifetime of
/// the store. Dropping the store closes it.
pub struct FileStore {
    path: PathBuf,
    file: File,
    pretty: bool,
}

impl FileStore {
    /// Open the backing file, creating it empty if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        tracing::debug!(path = %path.display(), "opened backing file");
        Ok(Self {
            path,
            file,
            pretty: false,
        })
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<User>> {
        let mut file = &self.file;
        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        let users = decode(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            records = users.len(),
            "loaded collection"
        );
        Ok(users)
    }

    fn persist(&mut self, users: &[User]) -> Result<()> {
        let bytes = encode(users, self.pretty)?;
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&bytes)?;
        self.file.flush()?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            records = users.len(),
            "persisted collection"
        );
        Ok(())
    }
}

/// Create `path` as an empty file if nothing exists there yet.
///
/// Returns whether the file was created.
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    File::create(path)?;
    tracing::debug!(path = %path.display(), "created empty store file");
    Ok(true)
}
