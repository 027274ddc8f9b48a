use crate::error::CanvasError;
use std::str::FromStr;

/// One validated instruction. Parsing never looks at canvas state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create {
        width: i64,
        height: i64,
    },
    Line {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
    },
    Rectangle {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
    },
    Fill {
        x: i64,
        y: i64,
        colour: char,
    },
    Quit,
}

fn arguments(action: &str, args: &[&str], arity: usize) -> Result<(), CanvasError> {
    if args.len() != arity {
        return Err(CanvasError::InvalidCommand(format!(
            "\"{action}\" expects {arity} argument(s), got {}",
            args.len()
        )));
    }
    Ok(())
}

fn number(field: &str) -> Result<i64, CanvasError> {
    field
        .parse()
        .map_err(|_| CanvasError::InvalidCommand(format!("\"{field}\" is not an integer")))
}

fn numbers<const N: usize>(fields: &[&str]) -> Result<[i64; N], CanvasError> {
    let mut values = [0i64; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = number(field)?;
    }
    Ok(values)
}

impl FromStr for Command {
    type Err = CanvasError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut tokens = raw.split_whitespace();
        let action = tokens
            .next()
            .ok_or_else(|| CanvasError::InvalidCommand("empty command".to_string()))?;
        let args: Vec<&str> = tokens.collect();

        let command = match action {
            "C" => {
                arguments(action, &args, 2)?;
                let [width, height] = numbers::<2>(&args)?;
                Command::Create { width, height }
            }
            "L" => {
                arguments(action, &args, 4)?;
                let [x1, y1, x2, y2] = numbers::<4>(&args)?;
                Command::Line { x1, y1, x2, y2 }
            }
            "R" => {
                arguments(action, &args, 4)?;
                let [x1, y1, x2, y2] = numbers::<4>(&args)?;
                Command::Rectangle { x1, y1, x2, y2 }
            }
            "B" => {
                arguments(action, &args, 3)?;
                let [x, y] = numbers::<2>(&args[..2])?;
                let mut chars = args[2].chars();
                let colour = match (chars.next(), chars.next()) {
                    (Some(colour), None) => colour,
                    _ => {
                        return Err(CanvasError::InvalidCommand(format!(
                            "colour \"{}\" must be a single character",
                            args[2]
                        )))
                    }
                };
                Command::Fill { x, y, colour }
            }
            "Q" => {
                arguments(action, &args, 0)?;
                Command::Quit
            }
            _ => {
                return Err(CanvasError::InvalidCommand(format!(
                    "unknown action \"{action}\""
                )))
            }
        };
        Ok(command)
    }
}
