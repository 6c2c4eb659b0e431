//! # http2curl - HTTPie shorthand to curl translator
//!
//! Reads a request written in HTTPie's concise shorthand and prints the
//! equivalent curl invocation. No request is ever sent; the output is meant
//! to be copied into a shell, a script, or a bug report.
//!
//! ## Usage
//!
//! ```bash
//! # Methods, headers, query parameters
//! http2curl get http://example.com X-Test:1 page==2
//!
//! # JSON body fields, typed with :=
//! http2curl post http://example.com name=john age:=30 tags:='["a","b"]'
//!
//! # Form body instead of JSON
//! http2curl --form post http://example.com name=john
//! ```

use clap::Parser;
use http2curl::{printer, run, Cli};

/// Application entry point
///
/// Parses the command line, runs the translation, and reports errors with a
/// non-zero exit code.
fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        printer::print_error(&e);
        std::process::exit(1);
    }
}
