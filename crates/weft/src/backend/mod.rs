//! Terminal output seam. The core produces a filled [`crate::Buffer`]; a
//! `RenderBackend` is anything that can take styled text runs and put them
//! on a screen.

mod term;

pub use term::Term;

use geom::Point;

use crate::{Result, style::Style};

/// The trait implemented by renderers consuming buffer output.
pub trait RenderBackend {
    /// Apply a style to the following text output.
    fn style(&mut self, style: Style) -> Result<()>;
    /// Output text at a screen location. Used for all text output.
    fn text(&mut self, loc: Point, txt: &str) -> Result<()>;
    /// Flush any batched output to the device.
    fn flush(&mut self) -> Result<()>;
    /// Reset the device to its default state.
    fn reset(&mut self) -> Result<()>;
}
