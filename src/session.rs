use crate::error::AppError;
use crate::interface::{ConsoleInterface, Outcome};
use crate::terminal::Terminal;
use error_stack::{IntoReport, Result, ResultExt};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Reads one command per line, runs it and prints the canvas or the error.
pub struct Session<R, W> {
    input: R,
    output: W,
    interface: ConsoleInterface,
    terminal: Terminal,
    should_quit: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, interface: ConsoleInterface, terminal: Terminal) -> Self {
        Self {
            input,
            output,
            interface,
            terminal,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        info!("session started");

        'main: loop {
            if self.should_quit {
                break 'main;
            }

            if let Some(prompt) = self.terminal.prompt() {
                self.write(prompt)?;
                self.flush()?;
            }

            let Some(line) = self.read_command()? else {
                debug!("end of input");
                break 'main;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.interface.execute(&line) {
                Ok(Outcome::Render(canvas)) => {
                    if let Some(codes) = self.terminal.clear_screen() {
                        self.write(&codes)?;
                    }
                    self.write(&canvas)?;
                    self.write("\n")?;
                }
                Ok(Outcome::Quit) => self.should_quit = true,
                Err(err) => {
                    warn!(command = line.trim(), %err, "command rejected");
                    let message = self.terminal.error(&err.to_string());
                    self.write(&message)?;
                    self.write("\n")?;
                }
            }
            debug!(state = ?self.interface.state(), "command handled");
            self.flush()?;
        }

        info!("session ended");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Undecodable bytes are kept as U+FFFD so the grammar rejects the line, not the stream.
    fn read_command(&mut self) -> Result<Option<String>, AppError> {
        let mut line: Vec<u8> = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .into_report()
            .attach_printable("Could not read the next command.")
            .change_context(AppError::StreamRead)?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&line).into_owned()))
    }

    fn write(&mut self, text: &str) -> Result<(), AppError> {
        self.output
            .write_all(text.as_bytes())
            .into_report()
            .attach_printable("Could not write to the output stream.")
            .change_context(AppError::StreamWrite)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.output
            .flush()
            .into_report()
            .attach_printable("Could not flush output to the terminal.")
            .change_context(AppError::StreamWrite)?;
        Ok(())
    }
}
