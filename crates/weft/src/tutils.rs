//! Test utilities for asserting on buffer contents.

use geom::Point;

use crate::{Result, backend::RenderBackend, buffer::Buffer, style::Style};

/// A helper macro to create expected-line slices for buffer assertions.
#[macro_export]
macro_rules! buf {
    ($($line:literal)*) => {
        &[$($line),*]
    };
}

/// Assertion helper over a [`Buffer`].
///
/// In expected lines the character `X` matches a cell that has never been
/// written, which is useful for checking that drawing stayed inside its
/// clip window.
pub struct BufTest<'a> {
    buf: &'a Buffer,
}

impl<'a> BufTest<'a> {
    pub fn new(buf: &'a Buffer) -> Self {
        Self { buf }
    }

    fn marked_lines(&self) -> Vec<String> {
        let size = self.buf.size();
        (0..size.h)
            .map(|y| {
                (0..size.w)
                    .map(|x| {
                        let cell = self.buf.get(Point { x, y }).unwrap();
                        if cell.is_blank() { 'X' } else { cell.ch }
                    })
                    .collect()
            })
            .collect()
    }

    /// Non-panicking comparison against expected lines.
    pub fn matches(&self, expected: &[&str]) -> bool {
        let actual = self.marked_lines();
        if expected.len() != actual.len() {
            return false;
        }
        expected.iter().zip(actual.iter()).all(|(e, a)| e == a)
    }

    /// Panic with a rendered diff when the buffer doesn't match.
    pub fn assert_matches(&self, expected: &[&str]) {
        if !self.matches(expected) {
            let actual = self.marked_lines();
            panic!(
                "buffer mismatch\nexpected:\n{}\nactual:\n{}",
                expected.join("\n"),
                actual.join("\n"),
            );
        }
    }

    /// True if the given text occurs contiguously on any single row.
    pub fn contains_text(&self, txt: &str) -> bool {
        self.buf.lines().iter().any(|l| l.contains(txt))
    }
}

/// A backend that records every call, for testing render output.
pub struct Recorder {
    pub ops: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for Recorder {
    fn style(&mut self, style: Style) -> Result<()> {
        if style == Style::default() {
            self.ops.push("style default".to_string());
        } else {
            self.ops.push(format!("style {style:?}"));
        }
        Ok(())
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.ops.push(format!("text {} {} {}", loc.x, loc.y, txt));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}
