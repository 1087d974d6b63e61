//! ATHENEA 共通ライブラリ
//!
//! `athenea` コマンドから使う機能を提供します。
//! 監査コア（プロンプト生成・応答検証・結果型・履歴）は I/O を持たない純粋な層で、
//! ファイル・時刻・環境変数・ログ・LLM は ports/adapter 経由で扱います。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// 監査コア
pub mod audit;

/// config.json の設定型
pub mod config;

/// 起動時のアクセスゲート
pub mod gate;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
