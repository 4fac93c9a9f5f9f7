//! TerminalRenderer: draws frames onto a real terminal.
//!
//! Every call queues crossterm commands into an internal byte buffer; nothing
//! reaches the writer until `present`, so each frame is a single write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::engine::Renderer;
use crate::palette::{CellStyle, Palette};
use crate::types::{Role, Tone};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    palette: Palette,
    /// Where the next glyph lands without an explicit cursor move.
    cursor: Option<(u16, u16)>,
    /// First row below everything drawn since the last clear.
    next_row: u16,
    current_style: Option<CellStyle>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(palette: Palette) -> Self {
        Self::with_writer(io::stdout(), palette)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, palette: Palette) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            palette,
            cursor: None,
            next_row: 0,
            current_style: None,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Restore default colors and leave the cursor on a fresh line.
    ///
    /// The last screen (e.g. the game-over message) stays visible.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        if self.current_style != Some(style) {
            apply_style_into(&mut self.buf, style)?;
            self.current_style = Some(style);
        }
        Ok(())
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        if self.cursor != Some((x, y)) {
            self.buf.queue(cursor::MoveTo(x, y))?;
        }
        Ok(())
    }

    fn text_at_next_row(&mut self, text: &str, style: CellStyle) -> Result<u16> {
        let row = self.next_row;
        self.move_to(0, row)?;
        self.set_style(style)?;
        self.buf.queue(Print(text))?;
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        self.cursor = Some((width, row));
        Ok(row)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.cursor = Some((0, 0));
        self.next_row = 0;
        Ok(())
    }

    fn draw_cell(&mut self, x: u16, y: u16, glyph: char, role: Role) -> Result<()> {
        self.move_to(x, y)?;
        self.set_style(self.palette.role(role))?;
        self.buf.queue(Print(glyph))?;
        self.cursor = Some((x.saturating_add(1), y));
        self.next_row = self.next_row.max(y.saturating_add(1));
        Ok(())
    }

    fn write_line(&mut self, text: &str, tone: Tone) -> Result<()> {
        let row = self.text_at_next_row(text, self.palette.tone(tone))?;
        self.next_row = row.saturating_add(1);
        Ok(())
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        self.text_at_next_row(text, self.palette.tone(Tone::Hint))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.current_style = None;
        self.flush_buf()
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(style.fg))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}
