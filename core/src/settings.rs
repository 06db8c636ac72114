use serde::{Deserialize, Serialize};

pub const DEFAULT_BOT_DELAY_MS: u64 = 600;

/// Tunables for a single game session. Only the simulated thinking delay
/// for the bot is configurable; the heuristic itself is fixed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SessionSettings {
    pub bot_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 10_000 {
            return Err(format!(
                "Bot delay ({} ms) cannot exceed 10000 ms",
                self.bot_delay_ms
            ));
        }
        Ok(())
    }
}
