//! The owned character grid that a paint pass targets.

use geom::{Expanse, Line, Point, Rect};

use crate::{
    Result,
    backend::RenderBackend,
    style::{AttrSet, Cell, Color, Style},
};

/// A width × height grid of [`Cell`]s plus the surface-wide drawing state
/// used by unstyled draw calls.
///
/// All coordinates are validated before mutation; out-of-range writes are
/// silently dropped so per-cell drawing code stays branch-cheap. The buffer
/// is exclusively owned by whichever paint pass currently targets it.
#[derive(Debug, Clone)]
pub struct Buffer {
    size: Expanse,
    cells: Vec<Cell>,
    state: Style,
}

impl Buffer {
    /// Create a buffer of the given size with all cells unwritten.
    pub fn new(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::blank(); size.area() as usize],
            state: Style::default(),
        }
    }

    pub fn size(&self) -> Expanse {
        self.size
    }

    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// The drawing state applied to unstyled draw calls.
    pub fn state(&self) -> Style {
        self.state
    }

    /// Set the foreground color for subsequent unstyled draws.
    pub fn set_fg(&mut self, fg: Color) {
        self.state.fg = Some(fg);
    }

    /// Set the background color for subsequent unstyled draws.
    pub fn set_bg(&mut self, bg: Color) {
        self.state.bg = Some(bg);
    }

    /// Set the attribute set for subsequent unstyled draws.
    pub fn set_attrs(&mut self, attrs: AttrSet) {
        self.state.attrs = attrs;
    }

    /// Reset the drawing state to terminal defaults.
    pub fn reset_state(&mut self) {
        self.state = Style::default();
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if self.rect().contains_point(p) {
            Some(p.y as usize * self.size.w as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Write a cell. Out-of-range writes are dropped.
    pub fn put(&mut self, p: Point, ch: char, style: Style) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Fill the intersection of `r` with the buffer.
    pub fn fill(&mut self, r: Rect, ch: char, style: Style) {
        if let Some(isec) = self.rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.put(Point { x, y }, ch, style);
                }
            }
        }
    }

    /// Write text along a line, truncating at the line's width and at the
    /// buffer edge.
    pub fn text(&mut self, l: Line, txt: &str, style: Style) {
        if let Some(isec) = self.rect().intersect(&l.rect()) {
            let offset = (isec.tl.x - l.tl.x) as usize;
            let mut chars = txt.chars().skip(offset);
            for x in 0..isec.w {
                let Some(ch) = chars.next() else { break };
                self.put(
                    Point {
                        x: isec.tl.x + x,
                        y: isec.tl.y,
                    },
                    ch,
                    style,
                );
            }
        }
    }

    /// The buffer contents as one string per row, unwritten cells rendered
    /// as spaces.
    pub fn lines(&self) -> Vec<String> {
        (0..self.size.h)
            .map(|y| {
                (0..self.size.w)
                    .map(|x| {
                        let c = &self.cells[y as usize * self.size.w as usize + x as usize];
                        if c.is_blank() { ' ' } else { c.ch }
                    })
                    .collect()
            })
            .collect()
    }

    fn display(cell: &Cell) -> (char, Style) {
        if cell.is_blank() {
            (' ', Style::default())
        } else {
            (cell.ch, cell.style)
        }
    }

    /// Render the whole buffer through `backend`, batching runs of cells
    /// with the same style.
    pub fn render<R: RenderBackend>(&self, backend: &mut R) -> Result<()> {
        let mut wrote = false;
        for y in 0..self.size.h {
            let mut x = 0;
            while x < self.size.w {
                let idx = y as usize * self.size.w as usize + x as usize;
                let (_, style) = Self::display(&self.cells[idx]);
                let start_x = x;
                let mut text = String::new();
                while x < self.size.w {
                    let i = y as usize * self.size.w as usize + x as usize;
                    let (ch, s) = Self::display(&self.cells[i]);
                    if s != style {
                        break;
                    }
                    text.push(ch);
                    x += 1;
                }
                backend.style(style)?;
                backend.text(Point { x: start_x, y }, &text)?;
                wrote = true;
            }
        }
        if wrote {
            backend.flush()?;
        }
        Ok(())
    }

    /// Diff this buffer against a previous frame, emitting only changed runs
    /// to `backend`. Falls back to a full render on size change.
    pub fn diff<R: RenderBackend>(&self, prev: &Self, backend: &mut R) -> Result<()> {
        if self.size != prev.size {
            return self.render(backend);
        }
        let mut wrote = false;
        for y in 0..self.size.h {
            let mut x = 0;
            while x < self.size.w {
                let idx = y as usize * self.size.w as usize + x as usize;
                if self.cells[idx] == prev.cells[idx] {
                    x += 1;
                    continue;
                }
                let (_, style) = Self::display(&self.cells[idx]);
                let start_x = x;
                let mut text = String::new();
                while x < self.size.w {
                    let i = y as usize * self.size.w as usize + x as usize;
                    if self.cells[i] == prev.cells[i] {
                        break;
                    }
                    let (ch, s) = Self::display(&self.cells[i]);
                    if s != style {
                        break;
                    }
                    text.push(ch);
                    x += 1;
                }
                backend.style(style)?;
                backend.text(Point { x: start_x, y }, &text)?;
                wrote = true;
            }
        }
        if wrote {
            backend.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buf;
    use crate::tutils::{BufTest, Recorder};

    #[test]
    fn put_and_get() {
        let mut b = Buffer::new((4, 2));
        b.put(Point::new(1, 1), 'x', Style::default());
        assert_eq!(b.get(Point::new(1, 1)).unwrap().ch, 'x');
        // Out of range writes are dropped.
        b.put(Point::new(4, 0), 'y', Style::default());
        b.put(Point::new(0, 2), 'y', Style::default());
        assert!(b.get(Point::new(3, 1)).unwrap().is_blank());
    }

    #[test]
    fn fill_clips() {
        let mut b = Buffer::new((4, 2));
        b.fill(Rect::new(1, 0, 2, 2), 'x', Style::default());
        BufTest::new(&b).assert_matches(buf![
            "XxxX"
            "XxxX"
        ]);
        b.fill(Rect::new(3, 1, 10, 10), 'y', Style::default());
        BufTest::new(&b).assert_matches(buf![
            "XxxX"
            "Xxxy"
        ]);
    }

    #[test]
    fn text_truncates() {
        let mut b = Buffer::new((5, 1));
        b.text(Line::new(2, 0, 5), "hello", Style::default());
        BufTest::new(&b).assert_matches(buf!["XXhel"]);
    }

    #[test]
    fn state_is_surface_wide() {
        let mut b = Buffer::new((2, 1));
        assert_eq!(b.state(), Style::default());
        b.set_fg(Color::Red);
        b.set_bg(Color::Black);
        assert_eq!(b.state().fg, Some(Color::Red));
        b.reset_state();
        assert_eq!(b.state(), Style::default());
    }

    #[test]
    fn render_batches_runs() {
        let mut b = Buffer::new((3, 1));
        b.text(Line::new(0, 0, 3), "ab", Style::default());
        let mut rec = Recorder::new();
        b.render(&mut rec).unwrap();
        assert_eq!(rec.ops, vec!["style default".to_string(), "text 0 0 ab ".to_string()]);
    }

    #[test]
    fn diff_no_change_is_silent() {
        let a = Buffer::new((3, 2));
        let b = a.clone();
        let mut rec = Recorder::new();
        b.diff(&a, &mut rec).unwrap();
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn diff_emits_changed_run() {
        let prev = Buffer::new((4, 1));
        let mut cur = prev.clone();
        cur.text(Line::new(1, 0, 2), "xy", Style::default());
        let mut rec = Recorder::new();
        cur.diff(&prev, &mut rec).unwrap();
        assert_eq!(rec.ops, vec!["style default".to_string(), "text 1 0 xy".to_string()]);
    }

    #[test]
    fn diff_size_change_rerenders() {
        let prev = Buffer::new((2, 1));
        let mut cur = Buffer::new((3, 1));
        cur.text(Line::new(0, 0, 3), "abc", Style::default());
        let mut rec = Recorder::new();
        cur.diff(&prev, &mut rec).unwrap();
        assert_eq!(rec.ops, vec!["style default".to_string(), "text 0 0 abc".to_string()]);
    }

    #[test]
    fn diff_splits_runs_on_style_change() {
        let prev = Buffer::new((2, 1));
        let mut cur = Buffer::new((2, 1));
        cur.put(Point::new(0, 0), 'a', Style::fg(Color::Red));
        cur.put(Point::new(1, 0), 'b', Style::default());
        let mut rec = Recorder::new();
        cur.diff(&prev, &mut rec).unwrap();
        assert_eq!(rec.ops.len(), 4);
        assert_eq!(rec.ops[1], "text 0 0 a");
        assert_eq!(rec.ops[3], "text 1 0 b");
    }
}
