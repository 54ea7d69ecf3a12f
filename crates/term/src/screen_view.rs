//! ScreenView: maps a game's text surface into a terminal framebuffer.
//!
//! Games hand the host a plain multi-line string. This view lays it out in
//! the middle of the viewport inside a border and colours the glyphs the
//! Minesweeper surface uses. It is pure (no I/O) and can be unit-tested.

use crate::fb::{FrameBuffer, Tone};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lines before the grid: mine total, flags remaining, help.
const HEADER_LINES: usize = 3;

/// Text-surface renderer for the host shell.
#[derive(Debug, Clone, Default)]
pub struct ScreenView {
    footer: Option<String>,
}

impl ScreenView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint drawn under the border (e.g. how to leave the game).
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Render `screen` into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, screen: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let lines: Vec<&str> = screen.lines().collect();
        let text_w = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let text_h = lines.len() as u16;
        let frame_w = text_w.saturating_add(4);
        let frame_h = text_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        // The grid runs from the header to the first blank line; anything
        // after that blank line is a banner.
        let mut in_banner = false;
        for (row, line) in lines.iter().enumerate() {
            let y = start_y + 1 + row as u16;
            let x = start_x + 2;
            if row >= HEADER_LINES && line.is_empty() {
                in_banner = true;
                continue;
            }
            if row < HEADER_LINES {
                fb.put_str(x, y, line, Tone::Text);
            } else if in_banner {
                fb.put_str(x, y, line, Tone::Banner);
            } else {
                for (dx, ch) in line.chars().enumerate() {
                    fb.put(x + dx as u16, y, ch, grid_tone(ch));
                }
            }
        }

        if let Some(footer) = &self.footer {
            let w = footer.chars().count() as u16;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x, start_y.saturating_add(frame_h), footer, Tone::Muted);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }
}

fn grid_tone(ch: char) -> Tone {
    match ch {
        '>' => Tone::Cursor,
        'F' => Tone::Flag,
        '-' => Tone::Muted,
        '1'..='9' => Tone::Count(ch as u8 - b'0'),
        _ => Tone::Text,
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put(x, y, '┌', Tone::Border);
    fb.put(x + w - 1, y, '┐', Tone::Border);
    fb.put(x, y + h - 1, '└', Tone::Border);
    fb.put(x + w - 1, y + h - 1, '┘', Tone::Border);

    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', Tone::Border);
        fb.put(x + dx, y + h - 1, '─', Tone::Border);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', Tone::Border);
        fb.put(x + w - 1, y + dy, '│', Tone::Border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Glyph;

    const SCREEN: &str = "Total Mines: 1\n\
                          Flags Remaining: 0\n\
                          WASD to Select | Space to select | F to flag\n\
                          > F \n\
                          1 - \n\
                          \n\
                          Game Over! Press R to Restart.";

    #[test]
    fn draws_border_around_text() {
        // 44 columns of help text + 4 => 48 wide; 7 lines + 2 => 9 tall.
        let fb = ScreenView::new().render(SCREEN, Viewport::new(48, 9));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(47, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 8).unwrap().ch, '└');
        assert_eq!(fb.get(47, 8).unwrap().ch, '┘');
        assert!(fb.row_text(1).contains("Total Mines: 1"));
    }

    #[test]
    fn tones_grid_glyphs() {
        let fb = ScreenView::new().render(SCREEN, Viewport::new(48, 9));
        // Grid starts on row 4 (border + 3 header lines), column 2.
        assert_eq!(fb.get(2, 4).unwrap(), Glyph::new('>', Tone::Cursor));
        assert_eq!(fb.get(4, 4).unwrap(), Glyph::new('F', Tone::Flag));
        assert_eq!(fb.get(4, 5).unwrap().tone, Tone::Muted);
        assert_eq!(fb.get(2, 5).unwrap().tone, Tone::Count(1));
    }

    #[test]
    fn banner_uses_banner_tone() {
        let fb = ScreenView::new().render(SCREEN, Viewport::new(48, 9));
        assert!(fb.row_text(7).contains("Game Over!"));
        assert_eq!(fb.get(2, 7).unwrap().tone, Tone::Banner);
    }

    #[test]
    fn centers_on_large_viewports() {
        let fb = ScreenView::new().render(SCREEN, Viewport::new(60, 21));
        // (60 - 48) / 2 = 6, (21 - 9) / 2 = 6
        assert_eq!(fb.get(6, 6).unwrap().ch, '┌');
    }

    #[test]
    fn footer_sits_under_the_frame() {
        let view = ScreenView::new().with_footer("Q to quit");
        let fb = view.render(SCREEN, Viewport::new(48, 12));
        // start_y = (12 - 9) / 2 = 1, footer row = 1 + 9 = 10
        assert!(fb.row_text(10).contains("Q to quit"));
    }
}
