use geom::Expanse;

use crate::{
    Result,
    canvas::{Canvas, CanvasState},
    surface::Surface,
};

/// Horizontal placement of text within its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A single line of text, horizontally aligned and vertically centered.
/// Content longer than the canvas is cut off at the right edge.
pub struct Text {
    state: CanvasState,
    content: String,
    align: Align,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            state: CanvasState::default(),
            content: content.into(),
            align: Align::Left,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    fn len(&self) -> u32 {
        u32::try_from(self.content.chars().count()).unwrap_or(u32::MAX)
    }
}

impl Canvas for Text {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn preferred_size(&self) -> Expanse {
        Expanse::new(self.len(), 1)
    }

    fn pack(&mut self) -> Result<()> {
        self.state.min_size = self.preferred_size();
        Ok(())
    }

    fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()> {
        let sz = self.state.rect.expanse();
        if sz.is_empty() {
            return Ok(());
        }
        let x = match self.align {
            Align::Left => 0,
            Align::Center => sz.w.saturating_sub(self.len()) / 2,
            Align::Right => sz.w.saturating_sub(self.len()),
        };
        let y = (sz.h - 1) / 2;
        surf.print(x as i32, y as i32, &self.content);
        Ok(())
    }
}
