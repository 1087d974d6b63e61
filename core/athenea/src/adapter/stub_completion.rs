//! テスト用: 固定の応答を順に返す Completion 実装


#[cfg(test)]
pub use stub::StubCompletion;
