//! Log 実装: ファイル追記（JSONL）・stderr ミラー・分岐・何もしない

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// `-v` 指定時に stderr へ 1 行ずつ出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let level = match record.level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        let mut line = format!("[{}] {}", level, record.message);
        if let Some(fields) = &record.fields {
            line.push(' ');
            line.push_str(&serde_json::to_string(fields)?);
        }
        eprintln!("{}", line);
        Ok(())
    }
}

/// 複数の Log へ配る。1 つが失敗しても残りには書き、最初のエラーを返す。
pub struct TeeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use std::sync::Mutex;

    struct Collect(Mutex<Vec<String>>);

    impl Log for Collect {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct Failing;

    impl Log for Failing {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("disk full"))
        }
    }

    fn record(message: &str) -> LogRecord {
        LogRecord::new(LogLevel::Info, message, "cli", "lifecycle")
    }

    #[test]
    fn test_noop_log() {
        assert!(NoopLog.log(&record("test")).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_lines_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("athenea.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);
        log.log(&record("command started")).unwrap();
        log.log(&record("command finished").with_field("exit_code", 0)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["message"], "command started");
        assert_eq!(lines[1]["fields"]["exit_code"], 0);
    }

    #[test]
    fn test_tee_log_reaches_all_sinks_despite_failure() {
        let collect = Arc::new(Collect(Mutex::new(Vec::new())));
        let sinks: Vec<Arc<dyn Log>> = vec![Arc::new(Failing), collect.clone()];
        let tee = TeeLog::new(sinks);
        let err = tee.log(&record("hello")).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(*collect.0.lock().unwrap(), vec!["hello".to_string()]);
    }
}
