//! 履歴ファイル（JSON 配列）の読み書き
//!
//! 書き込みは FileSystem::replace_contents で丸ごと置き換える。読み込みは壊れたエントリを捨てて警告ログを出す。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::audit::{decode_history, encode_history, History};
use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};

use crate::ports::outbound::HistoryStore;

pub struct FileHistoryStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    log: Arc<dyn Log>,
}

impl FileHistoryStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>, log: Arc<dyn Log>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
            log,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn warn(&self, message: &str, detail: serde_json::Value) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, message, "adapter", "history")
                .with_field("path", self.path.display().to_string())
                .with_field("detail", detail),
        );
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<History, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(History::new());
        }
        let contents = self.fs.read_to_string(&self.path)?;
        let value: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(v) => v,
            Err(e) => {
                self.warn("history file is not valid JSON; starting empty", e.to_string().into());
                return Ok(History::new());
            }
        };
        if !value.is_array() {
            self.warn("history file is not a JSON array; starting empty", serde_json::Value::Null);
            return Ok(History::new());
        }
        let load = decode_history(&value);
        if load.dropped > 0 {
            self.warn("dropped malformed history entries", load.dropped.into());
        }
        Ok(load.history)
    }

    fn save(&self, history: &History) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&encode_history(history)?)?;
        self.fs.replace_contents(&self.path, &json)
    }
}
