/// Half-block rasterizer output for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::palette::BACKGROUND;
use wire3d_core::{Palette, PaletteIndex};

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '\u{2580}';

/// Converts framebuffer pages to terminal cells, two pixel rows per cell
pub struct HalfBlockRenderer {
    width: usize,
    height: usize,
    palette: Palette,
    colors: Vec<Color>,
}

impl HalfBlockRenderer {
    pub fn new(width: usize, height: usize, palette: Palette) -> Self {
        let colors = (0..=PaletteIndex::MAX)
            .map(|i| {
                let (r, g, b) = palette.rgb(i);
                Color::Rgb { r, g, b }
            })
            .collect();
        Self {
            width,
            height,
            palette,
            colors,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn color(&self, index: PaletteIndex) -> Color {
        self.colors[index as usize]
    }

    /// Terminal rows needed for the whole page
    pub fn cell_rows(&self) -> usize {
        self.height.div_ceil(2)
    }

    /// First page column and cell row shown when cropping to `columns` x
    /// `rows` cells; the crop window is centred on the page.
    pub fn crop_origin(&self, columns: usize, rows: usize) -> (usize, usize) {
        let left = self.width.saturating_sub(columns) / 2;
        let first_row = self.cell_rows().saturating_sub(rows) / 2;
        (left, first_row)
    }

    /// Draw `page` starting at terminal row `top`, cropped to the centre
    /// `columns` x `rows` cells. Color commands are only emitted when a color
    /// changes.
    pub fn draw<W: Write>(
        &self,
        writer: &mut W,
        page: &[PaletteIndex],
        top: u16,
        columns: usize,
        rows: usize,
    ) -> std::io::Result<()> {
        let columns = columns.min(self.width);
        let rows = rows.min(self.cell_rows());
        let (left, first_row) = self.crop_origin(columns, rows);
        let mut current: Option<(PaletteIndex, PaletteIndex)> = None;

        for row in 0..rows {
            writer.queue(cursor::MoveTo(0, top + row as u16))?;
            let upper = (first_row + row) * 2 * self.width + left;
            let lower = upper + self.width;
            for x in 0..columns {
                let fg = page[upper + x];
                // Odd heights leave the last lower half empty
                let bg = page.get(lower + x).copied().unwrap_or(BACKGROUND);
                if current != Some((fg, bg)) {
                    writer.queue(SetForegroundColor(self.color(fg)))?;
                    writer.queue(SetBackgroundColor(self.color(bg)))?;
                    current = Some((fg, bg));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
