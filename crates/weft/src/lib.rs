//! weft is a terminal rendering framework built around a tree of
//! paintable canvases. Drawing goes through clipped surface views onto a
//! cell buffer, geometry comes from pluggable layout strategies, and a
//! set of 3D pipelines (rasterized, ray-traced, and a 2D wall caster)
//! render scenes into character cells like any other canvas.
//!
//! The pipeline per frame is: mutate state, lay out the tree, paint the
//! tree depth-first into a [`Buffer`], then hand the buffer to a
//! [`backend::RenderBackend`] to reach the terminal.

pub mod animate;
pub mod backend;
pub mod buffer;
pub mod canvas;
pub mod composite;
mod error;
pub mod layout;
pub mod math3d;
pub mod render3d;
pub mod style;
pub mod surface;
pub mod tutils;
pub mod widgets;

pub use buffer::Buffer;
pub use canvas::{Canvas, CanvasState};
pub use composite::Composite;
pub use error::{Error, Result};
pub use style::{Attr, AttrSet, Cell, Color, Style};
pub use surface::Surface;
