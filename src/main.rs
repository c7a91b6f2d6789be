// SPDX-License-Identifier: MPL-2.0
use exif_lens::app::{self, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = std::env::args_os().skip(1).collect();

    match app::parse_args(args) {
        Ok(Command::Help) => {
            print!("{}", app::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Command::Analyze(flags)) => match app::run(&flags) {
            Ok(report) => {
                print!("{report}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::from(1)
            }
        },
        Ok(Command::SaveConfig {
            config_path,
            policy,
        }) => match app::save_settings(config_path.as_deref(), policy) {
            Ok(message) => {
                print!("{message}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::from(1)
            }
        },
        Err(err) => {
            eprintln!("{err}\n\n{}", app::USAGE);
            ExitCode::from(2)
        }
    }
}
