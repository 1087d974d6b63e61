//! std::fs による FileSystem 実装

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

/// エラーメッセージに操作とパスを含める
fn io_error(action: &str, path: &Path, e: std::io::Error) -> Error {
    Error::io_msg(format!("{} '{}': {}", action, path.display(), e))
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path).map_err(|e| io_error("cannot read", path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| io_error("cannot write", path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to)
            .map_err(|e| io_error(&format!("cannot move to '{}' from", to.display()), from, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| io_error("cannot create directory", path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| io_error("cannot open for append", path, e))?;
        Ok(Box::new(file))
    }
}
