pub mod curl;
pub mod error;
pub mod parser;
pub mod request;

pub use curl::{command_line, make_curl_args};
pub use error::ShorthandError;
pub use parser::parse_tokens;
pub use request::Request;
