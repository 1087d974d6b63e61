//! athenea の Outbound アダプター

pub mod file_history_store;
pub mod gate_probes;
pub mod llm_completion;
pub mod narrator;
pub mod sigint_checker;
pub mod stub_completion;

pub use file_history_store::FileHistoryStore;
pub use gate_probes::{PlatformSignatureProbe, ProcessorCadenceProbe};
pub use llm_completion::StdLlmCompletion;
pub use narrator::ConsoleNarrator;
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
#[cfg(test)]
pub use stub_completion::StubCompletion;
