use crate::config::Config;
use std::io;
use termion::color;

const PROMPT: &str = "Please input command: ";

/// What the attached terminal supports, decided once at startup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    interactive: bool,
    colour: bool,
    clear: bool,
}

impl Terminal {
    pub fn detect(config: &Config) -> Self {
        let interactive = config.script.is_none() && termion::is_tty(&io::stdin());
        Self {
            interactive,
            colour: !config.no_color && termion::is_tty(&io::stdout()),
            clear: config.clear && interactive,
        }
    }

    /// No prompt, no escape codes. Used for piped input and scripts.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> Option<&'static str> {
        self.interactive.then_some(PROMPT)
    }

    pub fn clear_screen(&self) -> Option<String> {
        self.clear
            .then(|| format!("{}{}", termion::clear::All, termion::cursor::Goto(1, 1)))
    }

    pub fn error(&self, message: &str) -> String {
        if self.colour {
            format!(
                "{}Error: {message}{}",
                color::Fg(color::Red),
                color::Fg(color::Reset)
            )
        } else {
            format!("Error: {message}")
        }
    }
}
