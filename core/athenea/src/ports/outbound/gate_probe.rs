//! アクセスゲートの端末プローブ Outbound ポート
//!
//! 結果は表示用で、ゲートの通過条件には使わない。

pub trait GateProbe: Send + Sync {
    /// 画面に出す見出し
    fn label(&self) -> &str;
    fn probe(&self) -> bool;
}
