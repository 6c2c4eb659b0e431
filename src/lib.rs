pub mod error;
pub mod printer;
pub mod shorthand;

use clap::Parser;
use error::Http2CurlError;
use shorthand::{command_line, make_curl_args, parse_tokens};

#[derive(Parser)]
#[command(name = "http2curl")]
#[command(author, version, about = "Translate HTTPie shorthand into a curl command", long_about = None)]
pub struct Cli {
    /// HTTPie shorthand tokens: method, URL, key:value headers, key=value
    /// fields, key:=value typed fields, key==value query pairs, -f/--form
    #[arg(value_parser, trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Translate shorthand tokens into a display-ready curl command line
///
/// The two-stage pipeline: parse the tokens into a request, render the
/// request into curl arguments, join for display. An empty token list is a
/// usage error; everything else parses leniently.
///
/// # Examples
///
/// ```
/// use http2curl::translate;
///
/// let command = translate(&["http", "GET", "http://example.com"])?;
/// assert_eq!(command, "curl -X GET http://example.com");
/// # Ok::<(), http2curl::error::Http2CurlError>(())
/// ```
pub fn translate<S: AsRef<str>>(tokens: &[S]) -> Result<String, Http2CurlError> {
    if tokens.is_empty() {
        return Err(Http2CurlError::Usage);
    }
    let request = parse_tokens(tokens);
    let args = make_curl_args(&request)?;
    Ok(command_line(&args))
}

/// Run the application: translate the CLI tokens and print the command
///
/// Nothing is printed when translation fails; the caller reports the error.
pub fn run(cli: &Cli) -> Result<(), Http2CurlError> {
    let command = translate(&cli.tokens)?;
    printer::print_command(&command);
    Ok(())
}
