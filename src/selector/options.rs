//! Parsing of the free-form options answer.
//!
//! The answer is a whitespace-separated list of `name` or `name=value`
//! tokens. Leading dashes are ignored, so `-m`, `--m` and `m` are the same
//! option. A token without `=` is a flag, whatever the token count.

use crate::registry::{ParameterValue, Parameters};

/// Parse a single token into `(name, value)`.
///
/// Returns `None` when the name is empty after stripping dashes (`=x`, `--`).
pub fn parse_token(token: &str) -> Option<(String, ParameterValue)> {
    let (raw_name, value) = match token.split_once('=') {
        Some((name, value)) => (name, ParameterValue::Value(value.to_string())),
        None => (token, ParameterValue::Flag),
    };

    let name = raw_name.trim_start_matches('-');
    if name.is_empty() {
        return None;
    }

    Some((name.to_string(), value))
}

/// Parse the options answer; later tokens win over earlier ones with the same name.
pub fn parse_options(input: &str) -> Parameters {
    let mut options = Parameters::new();

    for token in input.split_whitespace() {
        match parse_token(token) {
            Some((name, value)) => {
                options.insert(name, value);
            }
            None => tracing::warn!("Skipping malformed option '{}'", token),
        }
    }

    options
}
