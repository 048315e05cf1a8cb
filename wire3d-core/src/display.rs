//! The narrow interface between the frame driver and a real (or simulated)
//! display.
//!
//! A backend shows a page, blocks until the next vertical blank, and reports
//! which buttons are held. Nothing else about the hardware leaks into the core.

use std::collections::VecDeque;
use std::convert::Infallible;

use bitflags::bitflags;

use crate::palette::PaletteIndex;

bitflags! {
    /// Buttons held during one frame, laid out like the handheld key register
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u16 {
        const A = 1 << 0;
        const B = 1 << 1;
        const SELECT = 1 << 2;
        const START = 1 << 3;
        const RIGHT = 1 << 4;
        const LEFT = 1 << 5;
        const UP = 1 << 6;
        const DOWN = 1 << 7;
        const R = 1 << 8;
        const L = 1 << 9;
    }
}

impl Buttons {
    /// Buttons held now that were not held in `previous`
    pub fn pressed_since(self, previous: Buttons) -> Buttons {
        self & !previous
    }
}

/// Output device used by the frame driver
pub trait DisplayPort {
    type Error;

    /// Show a full page of palette indices
    fn present(&mut self, page: &[PaletteIndex]) -> Result<(), Self::Error>;

    /// Block until the display enters its next vertical blank
    fn wait_vblank(&mut self) -> Result<(), Self::Error>;

    /// Snapshot of the buttons held right now
    fn read_input(&mut self) -> Result<Buttons, Self::Error>;
}

/// A vertical line counter, like a display's VCOUNT register
pub trait ScanlineSource {
    /// Line currently being scanned; values at or past `visible_lines` are
    /// inside the blank.
    fn vcount(&mut self) -> u16;

    fn visible_lines(&self) -> u16;

    /// Called between polls while waiting
    fn idle(&mut self) {}
}

/// Wait for the start of a vertical blank.
///
/// First let any blank already in progress finish, then wait for the next one
/// to begin. Returning mid-blank would leave less than a full blank for the
/// flip.
pub fn wait_for_vblank<S: ScanlineSource + ?Sized>(source: &mut S) {
    let visible = source.visible_lines();
    while source.vcount() >= visible {
        source.idle();
    }
    while source.vcount() < visible {
        source.idle();
    }
}

/// A scanline counter that advances one line per poll
#[derive(Debug, Clone)]
pub struct SimulatedScanline {
    line: u16,
    visible: u16,
    total: u16,
    polls: u64,
}

impl SimulatedScanline {
    pub fn new(visible: u16, total: u16) -> Self {
        debug_assert!(visible < total);
        Self {
            line: 0,
            visible,
            total,
            polls: 0,
        }
    }

    /// Start the counter at `line`
    pub fn at(mut self, line: u16) -> Self {
        self.line = line % self.total;
        self
    }

    /// The line the next poll will report
    pub fn line(&self) -> u16 {
        self.line
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl ScanlineSource for SimulatedScanline {
    fn vcount(&mut self) -> u16 {
        let line = self.line;
        self.line = (self.line + 1) % self.total;
        self.polls += 1;
        line
    }

    fn visible_lines(&self) -> u16 {
        self.visible
    }
}

const BLANK_LINES: u16 = 68;

/// In-memory display for tests and headless runs
#[derive(Debug, Clone)]
pub struct SimulatedDisplay {
    inputs: VecDeque<Buttons>,
    scanline: SimulatedScanline,
    last_frame: Vec<PaletteIndex>,
    frames_presented: u64,
    vblanks: u64,
}

impl SimulatedDisplay {
    /// One scanline per pixel row followed by a 68-line blank, the
    /// handheld's 160 of 228 at its native height.
    pub fn new(width: usize, height: usize) -> Self {
        let visible = height.min(u16::MAX as usize / 2) as u16;
        Self {
            inputs: VecDeque::new(),
            scanline: SimulatedScanline::new(visible, visible + BLANK_LINES),
            last_frame: Vec::with_capacity(width * height),
            frames_presented: 0,
            vblanks: 0,
        }
    }

    /// Queue button snapshots, one per `read_input` call. Once they run
    /// out, no buttons are held.
    pub fn with_inputs(mut self, inputs: impl IntoIterator<Item = Buttons>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    pub fn push_input(&mut self, buttons: Buttons) {
        self.inputs.push_back(buttons);
    }

    pub fn last_frame(&self) -> &[PaletteIndex] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn vblanks(&self) -> u64 {
        self.vblanks
    }

    pub fn scanline(&self) -> &SimulatedScanline {
        &self.scanline
    }
}

impl DisplayPort for SimulatedDisplay {
    type Error = Infallible;

    fn present(&mut self, page: &[PaletteIndex]) -> Result<(), Self::Error> {
        self.last_frame.clear();
        self.last_frame.extend_from_slice(page);
        self.frames_presented += 1;
        Ok(())
    }

    fn wait_vblank(&mut self) -> Result<(), Self::Error> {
        wait_for_vblank(&mut self.scanline);
        self.vblanks += 1;
        Ok(())
    }

    fn read_input(&mut self) -> Result<Buttons, Self::Error> {
        Ok(self.inputs.pop_front().unwrap_or_default())
    }
}
