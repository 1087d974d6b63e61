//! 読み上げの代わりに stderr へ 1 行出す Narrator 実装

use common::audit::NarrationTone;
use common::error::Error;

use crate::ports::outbound::Narrator;

#[derive(Debug, Clone, Default)]
pub struct ConsoleNarrator;

impl ConsoleNarrator {
    pub fn format_line(text: &str, tone: NarrationTone) -> String {
        format!("ATHENEA [{}] » {}", tone.as_str(), text)
    }
}

impl Narrator for ConsoleNarrator {
    fn narrate(&self, text: &str, tone: NarrationTone) -> Result<(), Error> {
        if !text.is_empty() {
            eprintln!("{}", Self::format_line(text, tone));
        }
        Ok(())
    }
}
