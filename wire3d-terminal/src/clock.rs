/// Wall-clock model of a handheld LCD's vertical counter
use std::time::{Duration, Instant};
use wire3d_core::ScanlineSource;

/// 1232 dot clocks at 16.78 MHz
const LINE_PERIOD: Duration = Duration::from_nanos(73_433);
const VISIBLE_LINES: u16 = 160;
const TOTAL_LINES: u16 = 228;

/// Derives the current scanline from time elapsed since creation, giving a
/// refresh rate of about 59.73 Hz.
#[derive(Debug, Clone)]
pub struct RasterClock {
    start: Instant,
    line_period: Duration,
    visible: u16,
    total: u16,
}

impl Default for RasterClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterClock {
    pub fn new() -> Self {
        Self::with_timing(LINE_PERIOD, VISIBLE_LINES, TOTAL_LINES)
    }

    pub fn with_timing(line_period: Duration, visible: u16, total: u16) -> Self {
        Self {
            start: Instant::now(),
            line_period,
            visible,
            total,
        }
    }

    /// Length of one full refresh
    pub fn frame_period(&self) -> Duration {
        self.line_period * self.total as u32
    }

    /// Scanline after `elapsed` time
    pub fn line_at(&self, elapsed: Duration) -> u16 {
        let lines = elapsed.as_nanos() / self.line_period.as_nanos().max(1);
        (lines % self.total as u128) as u16
    }
}

impl ScanlineSource for RasterClock {
    fn vcount(&mut self) -> u16 {
        self.line_at(self.start.elapsed())
    }

    fn visible_lines(&self) -> u16 {
        self.visible
    }

    fn idle(&mut self) {
        spin_sleep::sleep(self.line_period);
    }
}
