//! Frame buffer the shell composes each screen into.
//!
//! Glyphs carry a [`Tone`] rather than concrete colours: the view decides
//! what a character means, the renderer decides how that looks on a real
//! terminal.

/// What a glyph is, as far as colouring goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Text,
    /// Hints and hidden cells.
    Muted,
    Border,
    Cursor,
    Flag,
    /// A revealed count, 1..=9.
    Count(u8),
    Banner,
}

/// One character cell of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        tone: Tone::Text,
    };

    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs, addressed by terminal column and row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the whole frame at the given size, keeping the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).and_then(|row| row.get(x as usize)).copied()
    }

    /// Glyphs of row `y`, or `None` below the frame.
    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.glyphs.get(start..start + self.width as usize)
    }

    /// Place one glyph; anything outside the frame is dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        self.glyphs[i] = Glyph::new(ch, tone);
    }

    /// Write `text` from (x, y) rightwards, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, tone: Tone) {
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.put(cx, y, ch, tone);
        }
    }

    /// Row `y` as plain text, trailing spaces included.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }
}
