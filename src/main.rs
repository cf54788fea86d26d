use clap::Parser;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

mod commands;
mod output;

use commands::Commands;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "keycase")]
#[command(version = VERSION)]
#[command(about = "Convert nested document keys between camelCase and snake_case")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn response_mode(command: &Commands) -> ResponseMode {
    if command.is_raw() {
        ResponseMode::Raw
    } else {
        ResponseMode::Json
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match response_mode(&cli.command) {
        ResponseMode::Raw => match commands::run_raw(cli.command) {
            Ok((content, exit_code)) => {
                if let Err(err) = output::print_raw(&content) {
                    let _ = output::print_result::<serde_json::Value>(Err(err));
                    return std::process::ExitCode::from(1);
                }
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                let _ = output::print_result::<serde_json::Value>(Err(err));
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        },
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command);
            if output::print_result(json_result).is_err() {
                return std::process::ExitCode::from(1);
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
