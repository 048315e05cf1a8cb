use crate::clock::RasterClock;
use crate::input::KeyboardInput;
use crate::renderer::HalfBlockRenderer;
use crossterm::{
    cursor,
    event::{self, Event},
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use wire3d_core::display::wait_for_vblank;
use wire3d_core::{Buttons, DisplayPort, Palette, PaletteIndex};

/// Rows reserved above the picture for the status line
const HUD_ROWS: u16 = 1;

/// Presents frames on the terminal and reads the keyboard as a button pad
pub struct TerminalDisplay {
    out: Stdout,
    renderer: HalfBlockRenderer,
    input: KeyboardInput,
    clock: RasterClock,
    columns: u16,
    rows: u16,
    quit: bool,
}

impl TerminalDisplay {
    pub fn new(width: usize, height: usize, palette: Palette) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            renderer: HalfBlockRenderer::new(width, height, palette),
            input: KeyboardInput::new(),
            clock: RasterClock::new(),
            columns,
            rows,
            quit: false,
        })
    }

    /// Set once a quit key has been read
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn palette(&self) -> &Palette {
        self.renderer.palette()
    }

    /// Write the status line in the given palette color
    pub fn draw_hud(&mut self, text: &str, color: PaletteIndex) -> io::Result<()> {
        let text: String = text.chars().take(self.columns as usize).collect();
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(ClearType::CurrentLine))?;
        self.out.queue(SetForegroundColor(self.renderer.color(color)))?;
        self.out.queue(Print(text))?;
        self.out.queue(ResetColor)?;
        self.out.flush()
    }

    fn resize(&mut self, columns: u16, rows: u16) -> io::Result<()> {
        tracing::debug!(columns, rows, "terminal resized");
        self.columns = columns;
        self.rows = rows;
        self.out.queue(terminal::Clear(ClearType::All))?;
        Ok(())
    }
}

impl DisplayPort for TerminalDisplay {
    type Error = io::Error;

    fn present(&mut self, page: &[PaletteIndex]) -> io::Result<()> {
        let rows = self.rows.saturating_sub(HUD_ROWS) as usize;
        self.renderer
            .draw(&mut self.out, page, HUD_ROWS, self.columns as usize, rows)?;
        self.out.flush()
    }

    fn wait_vblank(&mut self) -> io::Result<()> {
        wait_for_vblank(&mut self.clock);
        Ok(())
    }

    fn read_input(&mut self) -> io::Result<Buttons> {
        let mut keys = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => keys.push(key),
                Event::Resize(columns, rows) => self.resize(columns, rows)?,
                _ => {}
            }
        }

        let frame = self.input.frame(keys);
        if frame.quit {
            self.quit = true;
        }
        Ok(frame.buttons)
    }
}
