//! テスト共通の部品（固定時計・記録用 Narrator / Log・環境変数のモック）

mod history_store_tests;
mod run_app_tests;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use common::audit::NarrationTone;
use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, Log, LogLevel, LogRecord};

use crate::ports::outbound::{InterruptChecker, Narrator};

pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 6, 9, 30, 0).unwrap()
}

pub(crate) struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_time()
    }
}

#[derive(Default)]
pub(crate) struct RecordingNarrator {
    lines: Mutex<Vec<(String, NarrationTone)>>,
}

impl RecordingNarrator {
    pub fn lines(&self) -> Vec<(String, NarrationTone)> {
        self.lines.lock().unwrap().clone()
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&self, text: &str, tone: NarrationTone) -> Result<(), Error> {
        self.lines.lock().unwrap().push((text.to_string(), tone));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct CollectLog {
    records: Mutex<Vec<LogRecord>>,
}

impl CollectLog {
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for CollectLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FlagInterrupt(pub AtomicBool);

impl InterruptChecker for FlagInterrupt {
    fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// ホームと環境変数を固定した EnvResolver
pub(crate) struct TestEnv {
    pub home: PathBuf,
    pub vars: HashMap<String, String>,
}

impl TestEnv {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            vars: HashMap::new(),
        }
    }
}

impl EnvResolver for TestEnv {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        Ok(HomeDir::new(self.home.clone()))
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// CTS 80 / HRL 70 / PENSUM 60 / SÓNICA 90 の主監査応答（フェンスつき）
pub(crate) fn supremacy_response(target: &str) -> String {
    format!(
        "```json\n{{\"target\":\"{}\",\"cts\":{{\"score\":80,\"analysis\":\"arquitectura sólida\"}},\"hrl\":{{\"score\":70,\"analysis\":\"decisiones ágiles\"}},\"pensum\":{{\"score\":60,\"prediction\":\"nuevo producto en Q3\"}},\"sonica\":{{\"score\":90,\"recommendation\":\"reducir peso de imágenes\"}}}}\n```",
        target
    )
}
