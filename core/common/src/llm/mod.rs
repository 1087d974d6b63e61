//! LLM ドライバーとプロバイダ
//!
//! 監査ごとに 1 回だけ呼ぶ非ストリーミングの completion。リトライはしない。

pub mod driver;
pub mod echo;
pub mod factory;
pub mod gemini;
pub mod provider;
pub mod resolver;

pub use driver::LlmDriver;
pub use factory::{create_driver, create_provider, ProviderType};
pub use provider::LlmProvider;
pub use resolver::{load_config, resolve_provider, ResolvedProvider};
