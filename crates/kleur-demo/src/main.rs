//! Prints one line per log level followed by a styled greeting.
//!
//! ```text
//! kleur-demo --color force --level warn
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use kleur::{ColorMode, Fg, Style};
use kleur_log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "kleur-demo", about = "Show kleur styles and log levels")]
struct Cli {
    /// Color mode: off, auto or force. Defaults to KLEUR_COLOR, then auto.
    #[arg(long)]
    color: Option<ColorMode>,

    /// Minimum log level: debug, warn, error, info or none. Defaults to KLEUR_LOG, then debug.
    #[arg(long)]
    level: Option<LevelFilter>,

    /// Also route the `log` crate macros through the logger.
    #[arg(long)]
    log_macros: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(mode) = cli.color {
        kleur::set_mode(mode);
    }
    if let Some(level) = cli.level {
        kleur_log::set_threshold(level);
    }
    kleur_log::set_sink(io::stdout());

    kleur_log::error()
        .log("This is an error")?
        .log(" with extra output")?;
    kleur_log::warn().log("This is a warning")?;
    kleur_log::debug().log("This is a debug message")?;
    kleur_log::info().log("This is an info message")?;

    if cli.log_macros {
        kleur_log::init()?;
        log::info!("routed through the log crate");
    }

    let mut out = io::stdout().lock();
    kleur::decorate(&mut out, Style::Bold)?;
    kleur::decorate(&mut out, Fg::Blue)?;
    write!(out, "Hello World")?;
    kleur::decorate(&mut out, Style::Reset)?;
    writeln!(out)?;

    Ok(())
}
