//! Ctrl+C（SIGINT）による中断を検知する InterruptChecker 実装
//!
//! ハンドラはプロセスで 1 度だけ登録し、フラグはプロセス全体で共有する。
//! 同じプロセスで何度 wiring しても同じフラグを読む。

use crate::ports::outbound::InterruptChecker;
use common::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static HANDLER: OnceLock<Result<(), String>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub struct SigintChecker {
    _installed: (),
}

impl SigintChecker {
    /// ハンドラを登録して checker を返す（登録済みなら再利用）
    pub fn install() -> Result<Self, Error> {
        HANDLER
            .get_or_init(|| {
                ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map(|()| Self { _installed: () })
            .map_err(|e| Error::system(format!("failed to install Ctrl+C handler: {}", e)))
    }
}

impl InterruptChecker for SigintChecker {
    fn is_interrupted(&self) -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

/// 中断を検知しない実装（ハンドラを登録できなかったとき）
#[derive(Debug, Clone, Default)]
pub struct NoopInterruptChecker;

impl InterruptChecker for NoopInterruptChecker {
    fn is_interrupted(&self) -> bool {
        false
    }
}
