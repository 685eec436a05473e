// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use zenzone::app::{self, paths, Flags};

const HELP: &str = "\
ZenZone - ambient break companion

USAGE:
  zenzone [OPTIONS]

OPTIONS:
  -h, --help              Print this help text
      --lang <LOCALE>     UI language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml
      --media-dir <DIR>   Directory holding videos/ and audio/

ENVIRONMENT:
  ZENZONE_CONFIG_DIR      Same as --config-dir
  ZENZONE_MEDIA_DIR       Same as --media-dir
  RUST_LOG                Log filter (default: zenzone=info)
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    media_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        media_dir: args.opt_value_from_str("--media-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zenzone=info")),
        )
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(args.config_dir, args.media_dir);

    app::run(Flags { lang: args.lang })
}
