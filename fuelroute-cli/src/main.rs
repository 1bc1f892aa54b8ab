//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::Env;

#[expect(
    clippy::print_stderr,
    reason = "the top-level error is reported to the user on stderr"
)]
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = fuelroute_cli::run() {
        eprintln!("fuelroute: {err}");
        std::process::exit(1);
    }
}
