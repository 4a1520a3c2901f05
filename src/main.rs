// SPDX-License-Identifier: MPL-2.0
use oh_snap::app::{self, paths, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: oh_snap [OPTIONS]

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --catalog <FILE>       TOML catalog replacing the built-in photos
  --assets-dir <DIR>     Image root containing small/, large/ and cover/
  -h, --help             Print this help
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_args() -> Result<Option<(Flags, Option<String>)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str("--catalog")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some((flags, config_dir)))
}

fn main() -> ExitCode {
    init_tracing();

    let (flags, config_dir) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(config_dir);

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
