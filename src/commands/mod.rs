use keycase::Direction;

use crate::output;

pub type CmdResult<T> = keycase::Result<(T, i32)>;

pub mod convert;

/// Top-level subcommands. Both directions share one argument set.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Convert keys to camelCase (e.g. an API response for internal use)
    Camel(convert::ConvertArgs),
    /// Convert keys to snake_case (e.g. a request body for the wire)
    Snake(convert::ConvertArgs),
}

impl Commands {
    fn into_parts(self) -> (convert::ConvertArgs, Direction) {
        match self {
            Commands::Camel(args) => (args, Direction::Camel),
            Commands::Snake(args) => (args, Direction::Snake),
        }
    }

    pub fn is_raw(&self) -> bool {
        match self {
            Commands::Camel(args) | Commands::Snake(args) => args.raw,
        }
    }
}

/// Run a command for the JSON envelope, pairing the payload with its exit code.
pub fn run_json(command: Commands) -> (keycase::Result<serde_json::Value>, i32) {
    let (args, direction) = command.into_parts();

    match convert::run(args, direction) {
        Ok((output, exit_code)) => match serde_json::to_value(output) {
            Ok(value) => (Ok(value), exit_code),
            Err(e) => (
                Err(keycase::Error::internal_json(
                    e.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = output::exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn run_raw(command: Commands) -> keycase::Result<(String, i32)> {
    let (args, direction) = command.into_parts();
    convert::run_raw(args, direction)
}
