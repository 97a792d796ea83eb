use serde::Deserialize;
use std::time::Duration;

/// `[ui]` section
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UIConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_ms: Option<u64>,
    /// Width of one terminal cell in px, used to map terminal width to breakpoints
    cell_width_px: Option<u16>,
    /// Concurrency of the background task pool
    worker_tasks: Option<usize>,
}

impl UIConfig {
    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(10))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout_ms(&self) -> u64 {
        self.poll_timeout_ms.unwrap_or(50)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms())
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.unwrap_or(50)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms())
    }

    pub fn cell_width_px(&self) -> u16 {
        self.cell_width_px.unwrap_or(8)
    }

    pub fn worker_tasks(&self) -> usize {
        self.worker_tasks.unwrap_or(4)
    }
}
