use std::io::{self, Write};

use crossterm::{QueueableCommand, cursor, style as cstyle};
use geom::Point;

use crate::{
    Error, Result,
    backend::RenderBackend,
    style::{Color, Style},
};

fn translate_color(c: Option<Color>) -> cstyle::Color {
    match c {
        // Unset channels fall back to the terminal default.
        None => cstyle::Color::Reset,
        Some(Color::Black) => cstyle::Color::Black,
        Some(Color::DarkGrey) => cstyle::Color::DarkGrey,
        Some(Color::Red) => cstyle::Color::Red,
        Some(Color::DarkRed) => cstyle::Color::DarkRed,
        Some(Color::Green) => cstyle::Color::Green,
        Some(Color::DarkGreen) => cstyle::Color::DarkGreen,
        Some(Color::Yellow) => cstyle::Color::Yellow,
        Some(Color::DarkYellow) => cstyle::Color::DarkYellow,
        Some(Color::Blue) => cstyle::Color::Blue,
        Some(Color::DarkBlue) => cstyle::Color::DarkBlue,
        Some(Color::Magenta) => cstyle::Color::Magenta,
        Some(Color::DarkMagenta) => cstyle::Color::DarkMagenta,
        Some(Color::Cyan) => cstyle::Color::Cyan,
        Some(Color::DarkCyan) => cstyle::Color::DarkCyan,
        Some(Color::White) => cstyle::Color::White,
        Some(Color::Grey) => cstyle::Color::Grey,
    }
}

fn translate_result<T>(r: io::Result<T>) -> Result<T> {
    r.map_err(|e| Error::Render(e.to_string()))
}

/// A crossterm-backed renderer writing to a [`Write`] target, typically
/// stdout. Raw-mode and alternate-screen handling belong to the caller; this
/// only emits styled text runs.
pub struct Term<W: Write> {
    fp: W,
}

impl<W: Write> Term<W> {
    pub fn new(fp: W) -> Self {
        Self { fp }
    }

    fn queue_style(&mut self, s: Style) -> io::Result<()> {
        // Order matters: resetting after setting colors would lose them.
        if s.attrs.is_empty() {
            self.fp
                .queue(cstyle::SetAttribute(cstyle::Attribute::Reset))?;
        } else {
            if s.attrs.bold {
                self.fp.queue(cstyle::SetAttribute(cstyle::Attribute::Bold))?;
            }
            if s.attrs.crossedout {
                self.fp
                    .queue(cstyle::SetAttribute(cstyle::Attribute::CrossedOut))?;
            }
            if s.attrs.dim {
                self.fp.queue(cstyle::SetAttribute(cstyle::Attribute::Dim))?;
            }
            if s.attrs.italic {
                self.fp
                    .queue(cstyle::SetAttribute(cstyle::Attribute::Italic))?;
            }
            if s.attrs.reverse {
                self.fp
                    .queue(cstyle::SetAttribute(cstyle::Attribute::Reverse))?;
            }
            if s.attrs.underline {
                self.fp
                    .queue(cstyle::SetAttribute(cstyle::Attribute::Underlined))?;
            }
        }
        self.fp
            .queue(cstyle::SetForegroundColor(translate_color(s.fg)))?;
        self.fp
            .queue(cstyle::SetBackgroundColor(translate_color(s.bg)))?;
        Ok(())
    }
}

impl<W: Write> RenderBackend for Term<W> {
    fn style(&mut self, style: Style) -> Result<()> {
        translate_result(self.queue_style(style))
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        translate_result(
            self.fp
                .queue(cursor::MoveTo(loc.x as u16, loc.y as u16))
                .and_then(|fp| fp.queue(cstyle::Print(txt)))
                .map(|_| ()),
        )
    }

    fn flush(&mut self) -> Result<()> {
        translate_result(self.fp.flush())
    }

    fn reset(&mut self) -> Result<()> {
        translate_result(
            self.fp
                .queue(cstyle::SetAttribute(cstyle::Attribute::Reset))
                .and_then(|fp| fp.queue(cstyle::ResetColor))
                .map(|_| ()),
        )
    }
}
