//! Outbound ポート: usecase が外界を使うための trait

pub mod completion;
pub mod gate_probe;
pub mod history_store;
pub mod interrupt_checker;
pub mod narrator;

pub use completion::Completion;
pub use gate_probe::GateProbe;
pub use history_store::HistoryStore;
pub use interrupt_checker::InterruptChecker;
pub use narrator::Narrator;
