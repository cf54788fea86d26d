//! Stdout envelope and exit codes for the `keycase` binary.

use keycase::error::Hint;
use keycase::{Error, ErrorCode, Result};
use serde::Serialize;
use serde_json::Value;

/// `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Failure<'a>>,
}

#[derive(Serialize)]
struct Failure<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a Value,
    #[serde(skip_serializing_if = "no_hints")]
    hints: &'a [Hint],
}

fn no_hints(hints: &&[Hint]) -> bool {
    hints.is_empty()
}

impl<'a, T: Serialize> Envelope<'a, T> {
    fn of(result: &'a Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(Failure {
                    code: err.code.as_str(),
                    message: &err.message,
                    details: &err.details,
                    hints: &err.hints,
                }),
            },
        }
    }
}

fn render<T: Serialize>(result: &Result<T>) -> Result<String> {
    serde_json::to_string_pretty(&Envelope::of(result))
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize response".to_string())))
}

/// Write one payload line to stdout, treating a closed pipe as success.
pub fn print_raw(payload: &str) -> Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload.trim_end()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

/// Print `result` wrapped in the JSON envelope.
pub fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    print_raw(&render(&result)?)
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::ValidationInvalidJson => 2,

        ErrorCode::ConvertDepthLimitExceeded | ErrorCode::ConvertKeyCollision => 3,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}
