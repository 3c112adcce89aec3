//! Crossterm-backed terminal output.
//!
//! Owns raw mode and the alternate screen, and flushes framebuffers to
//! the terminal. Unchanged cells are skipped by diffing against the
//! previously drawn frame; a full repaint happens after `invalidate`
//! (e.g. on resize) or on the first frame.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Terminal session holding the previous frame for diffing.
pub struct TerminalRenderer {
    out: io::Stdout,
    last: Option<FrameBuffer>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            last: None,
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        self.out.flush()?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        queue!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Drop the cached frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush `fb` to the terminal, skipping cells unchanged since the
    /// previous frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };
        if full {
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            let mut cursor_x: Option<u16> = None;
            for x in 0..fb.width() {
                let cell = match fb.get(x, y) {
                    Some(cell) => cell,
                    None => continue,
                };
                if !full {
                    if let Some(prev) = &self.last {
                        if prev.get(x, y) == Some(cell) {
                            cursor_x = None;
                            continue;
                        }
                    }
                }
                if cursor_x != Some(x) {
                    queue!(self.out, cursor::MoveTo(x, y))?;
                }
                if style != Some(cell.style) {
                    Self::queue_style(&mut self.out, cell.style)?;
                    style = Some(cell.style);
                }
                queue!(self.out, Print(cell.ch))?;
                cursor_x = Some(x + 1);
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn queue_style(out: &mut impl Write, style: CellStyle) -> Result<()> {
        queue!(out, SetAttribute(Attribute::Reset))?;
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        queue!(
            out,
            SetForegroundColor(to_color(style.fg)),
            SetBackgroundColor(to_color(style.bg))
        )?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // restore the terminal even on a panic unwind
        let _ = self.exit();
    }
}
