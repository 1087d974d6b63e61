//! Ctrl+C（SIGINT）等による割り込みを検知する Outbound ポート
//!
//! 応答待ちの間にユーザーが中断した場合、届いた応答を状態にも履歴にも反映せずに捨てるために使用する。

/// 割り込みが要求されたかどうかを返す能力
///
/// usecase は completion が返った直後にこの trait を参照し、true なら結果を破棄する。
pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
