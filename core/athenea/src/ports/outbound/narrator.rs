//! 監査完了の読み上げ Outbound ポート

use common::audit::NarrationTone;
use common::error::Error;

pub trait Narrator: Send + Sync {
    fn narrate(&self, text: &str, tone: NarrationTone) -> Result<(), Error>;
}
