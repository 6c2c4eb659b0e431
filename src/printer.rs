use crate::error::Http2CurlError;
use anstyle::{AnsiColor, Style};
use std::io::{self, Write};

/// Format an error for display, with a styled prefix and optional suggestion
pub fn format_error(error: &Http2CurlError) -> String {
    let style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));
    let mut output = format!(
        "{}Error: {}{}\n",
        style.render(),
        error,
        anstyle::Reset.render()
    );
    if let Some(suggestion) = error.suggestion() {
        output.push_str(&format!("Suggestion: {suggestion}\n"));
    }
    output
}

/// Print the rendered curl command to stdout
///
/// Plain text on purpose; the output must stay copy-pasteable into a shell.
pub fn print_command(command: &str) {
    let _ = print_command_to(&mut io::stdout(), command);
}

fn print_command_to<W: Write>(writer: &mut W, command: &str) -> io::Result<()> {
    writeln!(writer, "{command}")
}

/// Print an error to stderr
pub fn print_error(error: &Http2CurlError) {
    let _ = print_error_to(&mut io::stderr(), error);
}

fn print_error_to<W: Write>(writer: &mut W, error: &Http2CurlError) -> io::Result<()> {
    write!(writer, "{}", format_error(error))
}
