//! TerminalRenderer: flushes status lines to a real terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Vec<String>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: Vec::new(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the last frame so the next `draw` repaints.
    ///
    /// A resize clears or reflows the screen behind our back.
    pub fn invalidate(&mut self) {
        self.last.clear();
    }

    /// Whether `lines` differ from what is on screen.
    pub fn frame_changed(&self, lines: &[String]) -> bool {
        self.last.is_empty() || self.last.as_slice() != lines
    }

    /// Draw the lines, skipping the write when they match the previous frame.
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        if !self.frame_changed(lines) {
            return Ok(());
        }
        self.buf.clear();
        encode_lines_into(lines, &mut self.buf)?;
        self.flush_buf()?;
        self.last = lines.to_vec();
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-screen redraw of `lines` into `out`.
///
/// Raw mode disables newline translation, so rows are separated by `\r\n`.
pub fn encode_lines_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (i, line) in lines.iter().enumerate() {
        out.queue(Print(line))?;
        if i + 1 < lines.len() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}
