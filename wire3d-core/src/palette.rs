//! Indexed colors and the BGR555 palette behind them

/// One framebuffer pixel
pub type PaletteIndex = u8;

pub const BACKGROUND: PaletteIndex = 0;
pub const LINE: PaletteIndex = 1;
/// Spare entry for overlays drawn next to the scene
pub const ACCENT: PaletteIndex = 2;

/// Palette entries in the handheld's 15-bit `0bBBBBB_GGGGG_RRRRR` layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<u16>,
}

impl Palette {
    pub fn new(entries: Vec<u16>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[u16] {
        &self.entries
    }

    /// 8-bit RGB for `index`; indices past the end are black.
    pub fn rgb(&self, index: PaletteIndex) -> (u8, u8, u8) {
        let bgr = self.entries.get(index as usize).copied().unwrap_or(0);
        let expand = |c: u16| {
            let c = (c & 0x1f) as u8;
            (c << 3) | (c >> 2)
        };
        (expand(bgr), expand(bgr >> 5), expand(bgr >> 10))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![0x0000, 0x7fff, 0x03e0])
    }
}
