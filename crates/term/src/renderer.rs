//! TerminalRenderer: puts frames on a real terminal.
//!
//! The screen only changes after a key press, so frames are compared row by
//! row and every row that differs from what is on screen is rewritten in
//! full. A size change (or [`TerminalRenderer::invalidate`]) clears the
//! terminal and repaints everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
};

use crate::fb::{FrameBuffer, Glyph, Tone};

#[derive(Default)]
pub struct TerminalRenderer {
    /// What the terminal currently shows; `None` forces a repaint.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        self.shown = None;
        Ok(())
    }

    /// Give the terminal back in the state we found it.
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            io::stdout(),
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, rewriting only the rows that changed.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_rows_into(self.shown.as_ref(), fb, &mut self.buf)?;

        let mut out = io::stdout().lock();
        out.write_all(&self.buf)?;
        out.flush()?;

        match &mut self.shown {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }
}

/// Encode the commands that turn `shown` into `next` and return how many
/// rows were written. Without a comparable previous frame the screen is
/// cleared and every row is written.
pub fn encode_rows_into(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        queue!(out, terminal::Clear(ClearType::All))?;
    }

    let mut written = 0;
    for y in 0..next.height() {
        let Some(row) = next.row(y) else {
            break;
        };
        if shown.and_then(|s| s.row(y)) == Some(row) {
            continue;
        }
        queue!(out, cursor::MoveTo(0, y))?;
        encode_row(row, out)?;
        written += 1;
    }

    if written > 0 {
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(written)
}

/// Print one row, switching colours only where the tone changes.
fn encode_row(row: &[Glyph], out: &mut Vec<u8>) -> Result<()> {
    let mut tone = None;
    for glyph in row {
        if tone != Some(glyph.tone) {
            set_tone(glyph.tone, out)?;
            tone = Some(glyph.tone);
        }
        queue!(out, Print(glyph.ch))?;
    }
    Ok(())
}

fn set_tone(tone: Tone, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    match tone {
        Tone::Text => queue!(out, SetForegroundColor(Color::Grey))?,
        Tone::Muted => queue!(out, SetForegroundColor(Color::DarkGrey))?,
        Tone::Border => queue!(out, SetForegroundColor(Color::White))?,
        Tone::Cursor => queue!(
            out,
            SetForegroundColor(Color::Black),
            SetBackgroundColor(Color::Yellow),
            SetAttribute(Attribute::Bold)
        )?,
        Tone::Flag => queue!(
            out,
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Bold)
        )?,
        Tone::Count(n) => queue!(
            out,
            SetForegroundColor(count_color(n)),
            SetAttribute(Attribute::Bold)
        )?,
        Tone::Banner => queue!(
            out,
            SetForegroundColor(Color::White),
            SetAttribute(Attribute::Bold)
        )?,
    }
    Ok(())
}

/// Classic Minesweeper number colours.
fn count_color(n: u8) -> Color {
    match n {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::DarkBlue,
        5 => Color::DarkRed,
        6 => Color::Cyan,
        7 => Color::White,
        _ => Color::Grey,
    }
}
