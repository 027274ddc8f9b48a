use clap::Parser;
use error_stack::{IntoReport, Result, ResultExt};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;
use textcanvas::config::Config;
use textcanvas::error::{AppError, InitError};
use textcanvas::session::Session;
use textcanvas::terminal::Terminal;
use textcanvas::ConsoleInterface;

fn main() -> Result<ExitCode, AppError> {
    let config = Config::parse();
    init_logging(&config);

    let mut session = start_session(&config)
        .attach_printable("Could not start application due to initialization errors.")
        .change_context(AppError::InitError)?;
    session.run()?;

    Ok(ExitCode::SUCCESS)
}

fn init_logging(config: &Config) {
    // Rendered canvases own stdout, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn start_session(config: &Config) -> Result<Session<Box<dyn BufRead>, io::Stdout>, InitError> {
    let input: Box<dyn BufRead> = match &config.script {
        Some(path) => {
            let file = File::open(path)
                .into_report()
                .attach_printable(format!("Could not open script {}.", path.display()))
                .change_context(InitError::ScriptUnreadable)?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    tracing::info!(limits = ?config.limits(), "starting textcanvas {}", env!("CARGO_PKG_VERSION"));

    Ok(Session::new(
        input,
        io::stdout(),
        ConsoleInterface::new(config.limits()),
        Terminal::detect(config),
    ))
}
