//! A bordered text canvas driven by one-letter drawing commands.
//!
//! ```text
//! C 20 4          create a 20x4 canvas
//! L 0 1 5 1       horizontal or vertical line
//! R 13 0 17 2     rectangle, top left then bottom right
//! B 9 2 o         bucket fill with colour `o`
//! Q               quit
//! ```

pub mod canvas;
pub mod cell;
pub mod command;
pub mod config;
pub mod error;
pub mod interface;
pub mod paint;
pub mod session;
pub mod terminal;

pub use canvas::{Canvas, Limits};
pub use command::Command;
pub use error::CanvasError;
pub use interface::{ConsoleInterface, Outcome, State};
