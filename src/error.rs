use error_stack::Context;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug)]
pub enum InitError {
    ScriptUnreadable,
}
impl Context for InitError {}
impl Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("App could not start.")
    }
}

#[derive(Debug)]
pub enum AppError {
    InitError,
    StreamRead,
    StreamWrite,
}
impl Context for AppError {}
impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Something went wrong.")
    }
}

/// Every way a single command can be rejected. None of these end the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Canvas is not created yet")]
    MissingCanvas,

    #[error(
        "Invalid canvas size {width}x{height}: width must be from 1 to {max_width} and height from 1 to {max_height}"
    )]
    InvalidDimension {
        width: i64,
        height: i64,
        max_width: usize,
        max_height: usize,
    },

    #[error("Coordinates ({x}, {y}) are outside the canvas")]
    OutOfBounds { x: i64, y: i64 },

    #[error("Only vertical and horizontal lines are supported")]
    UnsupportedGeometry,

    #[error("Rectangle coordinates must go from top left to bottom right")]
    InvalidGeometry,

    #[error("Invalid colour {0:?}: a single visible character other than \"x\" or \".\" is required")]
    InvalidColor(char),

    #[error("Cannot fill on the line at ({x}, {y})")]
    FillOnLine { x: i64, y: i64 },
}
