// SPDX-License-Identifier: MPL-2.0
//! Inserts missing `voice.actions.*` keys into every JSON locale file of a
//! directory.

use iced_toast::app::paths;
use iced_toast::{config, locale_patch, logging};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
patch-locales - add missing voice action keys to JSON locale files

USAGE:
  patch-locales [OPTIONS] [DIR]

ARGS:
  [DIR]                Locale directory (default: [locales] directory from
                       settings.toml, else assets/locales)

OPTIONS:
  --dry-run            Report changes without writing files
  --config-dir <DIR>   Directory holding settings.toml
  -v, --verbose        Debug logging when RUST_LOG is unset
  -h, --help           Print this help
";

struct Args {
    dir: Option<PathBuf>,
    dry_run: bool,
    config_dir: Option<String>,
}

/// Parses the command line, rejecting anything left over.
fn parse_args(mut args: pico_args::Arguments) -> Result<Args, String> {
    let parsed = Args {
        dry_run: args.contains("--dry-run"),
        config_dir: args
            .opt_value_from_str("--config-dir")
            .map_err(|err| err.to_string())?,
        dir: args.opt_free_from_str().map_err(|err| err.to_string())?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    let mut raw = pico_args::Arguments::from_env();

    if raw.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    logging::init(raw.contains(["-v", "--verbose"]));

    let args = match parse_args(raw) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(args.config_dir);
    let dir = args.dir.unwrap_or_else(|| {
        let (config, _) = config::load();
        config.locales.directory_or_default()
    });

    match locale_patch::patch_directory(&dir, args.dry_run) {
        Ok(report) => {
            // Skipped files are already logged; they do not fail the run.
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "cannot patch locale directory");
            ExitCode::FAILURE
        }
    }
}
