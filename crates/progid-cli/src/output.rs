use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use progid_core::prelude::{ReportLine, Status};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

/// Print report lines, coloured by status when stdout is a terminal.
pub fn print_lines(lines: &[ReportLine]) -> anyhow::Result<()> {
    let mut out = stdout();
    for line in lines {
        if let Some(color) = status_color(line.status) {
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
        write!(out, "{line}")?;
        out.reset()?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}

pub fn stdout() -> StandardStream {
    let choice = if io::stdout().is_terminal() { ColorChoice::Auto } else { ColorChoice::Never };
    StandardStream::stdout(choice)
}

fn status_color(status: Status) -> Option<Color> {
    match status {
        Status::Success => Some(Color::Green),
        Status::Warning => Some(Color::Yellow),
        Status::Failure => Some(Color::Red),
        Status::Detail => None,
    }
}
