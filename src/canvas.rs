use crate::cell::{Cell, BORDER_GLYPH};
use crate::error::CanvasError;
use crate::paint::{self, PaintOutput, Painter};
use tracing::trace;

pub const DEFAULT_MAX_WIDTH: usize = 200;
pub const DEFAULT_MAX_HEIGHT: usize = 50;

/// Largest canvas that may be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_width: usize,
    pub max_height: usize,
}
impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    x: usize,
    y: usize,
}

/// A fixed-size grid of cells, stored row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: i64, height: i64) -> Result<Self, CanvasError> {
        Self::with_limits(width, height, Limits::default())
    }

    pub fn with_limits(width: i64, height: i64, limits: Limits) -> Result<Self, CanvasError> {
        let invalid = || CanvasError::InvalidDimension {
            width,
            height,
            max_width: limits.max_width,
            max_height: limits.max_height,
        };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        if w == 0 || h == 0 || w > limits.max_width || h > limits.max_height {
            return Err(invalid());
        }

        Ok(Self {
            width: w,
            height: h,
            cells: vec![Cell::Empty; w * h],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(Point { x, y })])
        } else {
            None
        }
    }

    fn index(&self, point: Point) -> usize {
        point.y * self.width + point.x
    }

    fn point(&self, x: i64, y: i64) -> Result<Point, CanvasError> {
        let inside = |value: i64, limit: usize| usize::try_from(value).ok().filter(|v| *v < limit);
        match (inside(x, self.width), inside(y, self.height)) {
            (Some(x), Some(y)) => Ok(Point { x, y }),
            _ => Err(CanvasError::OutOfBounds { x, y }),
        }
    }

    fn set_line(&mut self, point: Point) {
        let index = self.index(point);
        self.cells[index] = Cell::Line;
    }

    /// Draws an inclusive horizontal or vertical segment. Endpoint order does not matter.
    pub fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<(), CanvasError> {
        let start = self.point(x1, y1)?;
        let end = self.point(x2, y2)?;

        if start.x == end.x {
            let (top, bottom) = (start.y.min(end.y), start.y.max(end.y));
            for y in top..=bottom {
                self.set_line(Point { x: start.x, y });
            }
        } else if start.y == end.y {
            let (left, right) = (start.x.min(end.x), start.x.max(end.x));
            for x in left..=right {
                self.set_line(Point { x, y: start.y });
            }
        } else {
            return Err(CanvasError::UnsupportedGeometry);
        }

        trace!(x1, y1, x2, y2, "line drawn");
        Ok(())
    }

    /// `(x1, y1)` is the top left corner and `(x2, y2)` the bottom right one.
    pub fn draw_rectangle(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
    ) -> Result<(), CanvasError> {
        self.point(x1, y1)?;
        self.point(x2, y2)?;
        if x1 >= x2 || y1 >= y2 {
            return Err(CanvasError::InvalidGeometry);
        }

        self.draw_line(x1, y1, x2, y1)?;
        self.draw_line(x1, y2, x2, y2)?;
        self.draw_line(x1, y1, x1, y2)?;
        self.draw_line(x2, y1, x2, y2)?;
        Ok(())
    }

    /// Bucket fill of the 4-connected area around `(x, y)`, bounded by lines and the canvas edge.
    pub fn fill(&mut self, x: i64, y: i64, colour: char) -> Result<(), CanvasError> {
        let start = self.point(x, y)?;
        Cell::validate_colour(colour)?;
        if self.cells[self.index(start)].is_line() {
            return Err(CanvasError::FillOnLine { x, y });
        }

        let mut filled: usize = 0;
        let mut pending: Vec<Point> = vec![start];
        while let Some(point) = pending.pop() {
            let index = self.index(point);
            let cell = self.cells[index];
            if cell.is_line() || cell.is_filled_with(colour) {
                continue;
            }
            self.cells[index] = Cell::Filled(colour);
            filled += 1;

            if let Some(x) = point.x.checked_sub(1) {
                pending.push(Point { x, y: point.y });
            }
            if point.x + 1 < self.width {
                pending.push(Point { x: point.x + 1, y: point.y });
            }
            if let Some(y) = point.y.checked_sub(1) {
                pending.push(Point { x: point.x, y });
            }
            if point.y + 1 < self.height {
                pending.push(Point { x: point.x, y: point.y + 1 });
            }
        }

        trace!(x, y, %colour, filled, "area filled");
        Ok(())
    }

    pub fn render(&self) -> String {
        paint::to_text(&paint::frame(self.paint(), BORDER_GLYPH))
    }
}

impl Painter for Canvas {
    fn paint(&self) -> PaintOutput {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(Cell::glyph).collect())
            .collect()
    }
}
