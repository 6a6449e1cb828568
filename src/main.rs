//! `hearth` - loop the built-in fireplace animation in the terminal.
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see decode details on stderr.
//! Stop it with Ctrl-C.

use std::process::ExitCode;

use hearth_tui::{load, stdout_sink, Player, PlayerConfig, TerminalSizer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let frames = match load() {
        Ok(frames) => frames,
        Err(err) => {
            eprintln!("hearth: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = PlayerConfig::default();
    let sizer = TerminalSizer::new(config.fallback_surface);

    let result = stdout_sink()
        .and_then(|output| Player::start(frames, output, sizer, config))
        .and_then(Player::run);
    match result {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("hearth: {}", err);
            ExitCode::FAILURE
        }
    }
}
