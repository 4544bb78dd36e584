// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths, Flags};
use iced_toast::logging;

const HELP: &str = "\
iced_toast - voice settings demo with toast notifications

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --lang <LOCALE>      UI language, e.g. en-US, es, fr
  --config-dir <DIR>   Directory holding settings.toml
  -v, --verbose        Debug logging when RUST_LOG is unset
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init(args.contains(["-v", "--verbose"]));

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
