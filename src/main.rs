// SPDX-License-Identifier: MPL-2.0
use iced_album::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
iced_album - folder slideshow image viewer

USAGE:
  iced_album [OPTIONS]

OPTIONS:
  --config-dir <DIR>  Directory containing settings.toml
                      (overrides ICED_ALBUM_CONFIG_DIR)
  -h, --help          Print this help and exit

ENVIRONMENT:
  RUST_LOG            Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    tracing::info!("Image viewer starting");
    app::run(Flags { config_dir })
}
