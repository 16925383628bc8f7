use std::time::Duration;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// How long the success banner stays up before the fields are cleared.
    pub reset_delay: Duration,
}

impl FormConfig {
    /// Delay in whole milliseconds, as browser timers expect it.
    pub fn reset_delay_millis(&self) -> u32 {
        u32::try_from(self.reset_delay.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}
