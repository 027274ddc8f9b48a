use crate::canvas::{Canvas, Limits};
use crate::command::Command;
use crate::error::CanvasError;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NoCanvas,
    HasCanvas { width: usize, height: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(String),
    Quit,
}

/// Owns the current canvas, if any, and applies one command at a time to it.
#[derive(Debug, Default)]
pub struct ConsoleInterface {
    canvas: Option<Canvas>,
    limits: Limits,
}

impl ConsoleInterface {
    pub fn new(limits: Limits) -> Self {
        Self {
            canvas: None,
            limits,
        }
    }

    pub fn state(&self) -> State {
        match &self.canvas {
            Some(canvas) => State::HasCanvas {
                width: canvas.width(),
                height: canvas.height(),
            },
            None => State::NoCanvas,
        }
    }

    fn current(&mut self) -> Result<&mut Canvas, CanvasError> {
        self.canvas.as_mut().ok_or(CanvasError::MissingCanvas)
    }

    pub fn execute(&mut self, raw: &str) -> Result<Outcome, CanvasError> {
        let command: Command = raw.parse()?;
        debug!(?command, "executing");

        let canvas = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Create { width, height } => {
                let canvas = Canvas::with_limits(width, height, self.limits)?;
                self.canvas.insert(canvas)
            }
            Command::Line { x1, y1, x2, y2 } => {
                let canvas = self.current()?;
                canvas.draw_line(x1, y1, x2, y2)?;
                canvas
            }
            Command::Rectangle { x1, y1, x2, y2 } => {
                let canvas = self.current()?;
                canvas.draw_rectangle(x1, y1, x2, y2)?;
                canvas
            }
            Command::Fill { x, y, colour } => {
                let canvas = self.current()?;
                canvas.fill(x, y, colour)?;
                canvas
            }
        };

        Ok(Outcome::Render(canvas.render()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(outcome: Result<Outcome, CanvasError>) -> String {
        match outcome {
            Ok(Outcome::Render(text)) => text,
            other => panic!("expected a render, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_without_canvas() {
        let interface = ConsoleInterface::default();
        assert_eq!(interface.state(), State::NoCanvas);
    }

    #[test]
    fn test_drawing_before_create_is_rejected() {
        let mut interface = ConsoleInterface::default();
        for raw in ["B 1 2 c", "L 1 1 1 3", "R 0 0 2 2"] {
            assert_eq!(interface.execute(raw), Err(CanvasError::MissingCanvas));
        }
        assert_eq!(interface.state(), State::NoCanvas);
    }

    #[test]
    fn test_grammar_is_checked_before_canvas() {
        let mut interface = ConsoleInterface::default();
        assert!(matches!(
            interface.execute("B 1 2"),
            Err(CanvasError::InvalidCommand(_))
        ));
        assert!(matches!(
            interface.execute("C 1 2 3"),
            Err(CanvasError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_create_then_fill() {
        let mut interface = ConsoleInterface::default();
        let text = rendered(interface.execute("C 10 10"));
        assert_eq!(text.lines().count(), 12);
        assert_eq!(
            interface.state(),
            State::HasCanvas {
                width: 10,
                height: 10
            }
        );

        let text = rendered(interface.execute("B 1 2 c"));
        assert!(text.lines().skip(1).take(10).all(|l| l == ".cccccccccc."));
    }

    #[test]
    fn test_full_session() {
        let mut interface = ConsoleInterface::default();
        rendered(interface.execute("C 20 4"));
        rendered(interface.execute("L 0 1 5 1"));
        rendered(interface.execute("L 5 2 5 3"));
        rendered(interface.execute("R 13 0 17 2"));
        let text = rendered(interface.execute("B 9 2 o"));
        assert_eq!(
            text,
            [
                "......................",
                ".oooooooooooooxxxxxoo.",
                ".xxxxxxooooooox   xoo.",
                ".     xoooooooxxxxxoo.",
                ".     xoooooooooooooo.",
                "......................",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_create_replaces_canvas() {
        let mut interface = ConsoleInterface::default();
        rendered(interface.execute("C 5 5"));
        rendered(interface.execute("B 0 0 c"));
        let text = rendered(interface.execute("C 3 2"));
        assert_eq!(text, ".....\n.   .\n.   .\n.....");
        assert_eq!(
            interface.state(),
            State::HasCanvas {
                width: 3,
                height: 2
            }
        );
    }

    #[test]
    fn test_failed_create_keeps_previous_canvas() {
        let mut interface = ConsoleInterface::default();
        rendered(interface.execute("C 5 5"));
        assert!(matches!(
            interface.execute("C 0 5"),
            Err(CanvasError::InvalidDimension { .. })
        ));
        assert_eq!(
            interface.state(),
            State::HasCanvas {
                width: 5,
                height: 5
            }
        );
    }

    #[test]
    fn test_canvas_errors_propagate_unchanged() {
        let mut interface = ConsoleInterface::default();
        rendered(interface.execute("C 10 10"));
        assert_eq!(
            interface.execute("L 1 1 5 5"),
            Err(CanvasError::UnsupportedGeometry)
        );
        assert_eq!(
            interface.execute("R 5 5 1 1"),
            Err(CanvasError::InvalidGeometry)
        );
        assert_eq!(
            interface.execute("L 0 0 0 10"),
            Err(CanvasError::OutOfBounds { x: 0, y: 10 })
        );
        assert_eq!(
            interface.execute("B 0 0 x"),
            Err(CanvasError::InvalidColor('x'))
        );
        rendered(interface.execute("L 0 0 9 0"));
        assert_eq!(
            interface.execute("B 3 0 c"),
            Err(CanvasError::FillOnLine { x: 3, y: 0 })
        );
    }

    #[test]
    fn test_custom_limits() {
        let mut interface = ConsoleInterface::new(Limits {
            max_width: 4,
            max_height: 4,
        });
        assert!(matches!(
            interface.execute("C 10 10"),
            Err(CanvasError::InvalidDimension {
                max_width: 4,
                max_height: 4,
                ..
            })
        ));
        rendered(interface.execute("C 4 4"));
    }

    #[test]
    fn test_quit_from_either_state() {
        let mut interface = ConsoleInterface::default();
        assert_eq!(interface.execute("Q"), Ok(Outcome::Quit));
        rendered(interface.execute("C 2 2"));
        assert_eq!(interface.execute("Q"), Ok(Outcome::Quit));
    }
}
