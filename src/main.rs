// SPDX-License-Identifier: MPL-2.0
use toasty::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let verbose = args.contains(["-v", "--verbose"]);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {err}");
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        }
    };

    app::run(Flags { config_dir })
}
