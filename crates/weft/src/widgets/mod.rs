//! Stock canvases: bordered containers and text leaves.

mod boxed;
mod text;

pub use boxed::{BorderGlyphs, Boxed, DOUBLE, SINGLE, SINGLE_THICK};
pub use text::{Align, Text};
