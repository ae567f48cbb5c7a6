use std::io;
use std::process::ExitCode;

use fontrom::Charmap;

fn main() -> ExitCode {
    // stderr only; stdout carries the table.
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();

    // Edit the rules in src/charmap.rs to change the layout.
    let charmap = Charmap::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match fontrom::convert(stdin.lock(), stdout.lock(), &charmap) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Conversion failed: {e}");
            ExitCode::FAILURE
        }
    }
}
