use crate::{
    Error, Result,
    canvas::{Canvas, CanvasState},
    surface::Surface,
};

/// A 2D wall map parsed from rows of text. `'#'` marks a wall; every
/// other character is empty. Coordinates outside the grid count as wall,
/// which also bounds the raycast march.
pub struct MapGrid {
    cells: Vec<Vec<bool>>,
    w: usize,
}

impl MapGrid {
    /// Parse a map from equal-length rows.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::Invalid("map has no rows".into()));
        };
        let w = first.chars().count();
        let mut cells = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != w {
                return Err(Error::Invalid(format!(
                    "map row {i} has length {}, expected {w}",
                    row.chars().count()
                )));
            }
            cells.push(row.chars().map(|c| c == '#').collect());
        }
        Ok(Self { cells, w })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        let (x, y) = (x as usize, y as usize);
        if y >= self.cells.len() || x >= self.w {
            return true;
        }
        self.cells[y][x]
    }
}

/// A column-per-cell wall renderer over a [`MapGrid`]: one DDA march per
/// column from the player pose, wall height inversely proportional to the
/// fisheye-corrected perpendicular distance, and a side-dependent shading
/// character so adjoining walls read as distinct.
pub struct WallCanvas {
    state: CanvasState,
    map: MapGrid,
    /// Player position in map units.
    pub pos: (f64, f64),
    /// View direction in radians.
    pub heading: f64,
    /// Horizontal field of view in radians.
    pub fov: f64,
}

impl WallCanvas {
    pub fn new(map: MapGrid, pos: (f64, f64), heading: f64) -> Self {
        Self {
            state: CanvasState::default(),
            map,
            pos,
            heading,
            fov: std::f64::consts::FRAC_PI_3,
        }
    }

    pub fn map(&self) -> &MapGrid {
        &self.map
    }

    /// March a ray at `angle`, returning the perpendicular wall distance
    /// and which side was struck (false = a vertical grid line, true = a
    /// horizontal one).
    fn march(&self, angle: f64) -> (f64, bool) {
        let (dir_x, dir_y) = (angle.cos(), angle.sin());
        let (px, py) = self.pos;
        let mut map_x = px.floor() as i64;
        let mut map_y = py.floor() as i64;

        let delta_x = if dir_x == 0.0 { f64::MAX } else { (1.0 / dir_x).abs() };
        let delta_y = if dir_y == 0.0 { f64::MAX } else { (1.0 / dir_y).abs() };

        let (step_x, mut side_x) = if dir_x < 0.0 {
            (-1, (px - map_x as f64) * delta_x)
        } else {
            (1, (map_x as f64 + 1.0 - px) * delta_x)
        };
        let (step_y, mut side_y) = if dir_y < 0.0 {
            (-1, (py - map_y as f64) * delta_y)
        } else {
            (1, (map_y as f64 + 1.0 - py) * delta_y)
        };

        let mut side = false;
        loop {
            if side_x < side_y {
                side_x += delta_x;
                map_x += step_x;
                side = false;
            } else {
                side_y += delta_y;
                map_y += step_y;
                side = true;
            }
            if self.map.is_wall(map_x, map_y) {
                break;
            }
        }
        let dist = if side {
            side_y - delta_y
        } else {
            side_x - delta_x
        };
        // Project onto the view direction to avoid the fisheye bow.
        (dist * (angle - self.heading).cos(), side)
    }
}

impl Canvas for WallCanvas {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()> {
        let sz = self.state.rect.expanse();
        if sz.is_empty() {
            return Ok(());
        }
        let w = f64::from(sz.w);
        let h = f64::from(sz.h);
        for col in 0..sz.w {
            let angle = self.heading - self.fov / 2.0 + self.fov * (f64::from(col) + 0.5) / w;
            let (perp, side) = self.march(angle);
            let wall_h = if perp <= 0.0 { h } else { (h / perp).min(h) };
            let top = ((h - wall_h) / 2.0).round() as u32;
            let rows = wall_h.round() as u32;
            let ch = if side { '▓' } else { '█' };
            surf.vline(col as i32, top as i32, rows.min(sz.h), ch);
        }
        Ok(())
    }
}
