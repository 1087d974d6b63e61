//! athenea 固有のドメイン型（型と不変条件）

pub mod app_state;
pub mod command;

pub use app_state::{AppState, Report};
pub use command::{AtheneaCommand, CodeInput};
