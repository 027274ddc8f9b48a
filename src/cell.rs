use crate::error::CanvasError;

pub const LINE_GLYPH: char = 'x';
pub const BORDER_GLYPH: char = '.';
pub const EMPTY_GLYPH: char = ' ';

/// State of one grid position. Only `Filled` carries a colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Line,
    Filled(char),
}

impl Cell {
    pub fn is_line(&self) -> bool {
        matches!(self, Cell::Line)
    }

    pub fn is_filled_with(&self, colour: char) -> bool {
        matches!(self, Cell::Filled(c) if *c == colour)
    }

    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Line => LINE_GLYPH,
            Cell::Filled(colour) => *colour,
        }
    }

    pub fn validate_colour(colour: char) -> Result<(), CanvasError> {
        if colour == LINE_GLYPH
            || colour == BORDER_GLYPH
            || colour.is_control()
            || colour.is_whitespace()
        {
            return Err(CanvasError::InvalidColor(colour));
        }
        Ok(())
    }
}
