use std::io;

use bitcount_bench::constants::ITERATIONS;
use bitcount_bench::driver;

/// Logger settings; errors are always shown, `BITCOUNT_LOG` raises the level.
fn logger_env() -> env_logger::Env<'static> {
    env_logger::Env::new()
        .filter_or("BITCOUNT_LOG", "error")
        .write_style("BITCOUNT_LOG_STYLE")
}

fn main() {
    env_logger::init_from_env(logger_env());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = driver::run(&mut stdout.lock(), &mut stderr.lock(), ITERATIONS, &mut rand::rng());

    // Exit status stays 0 even when the report could not be written
    if let Err(e) = result {
        log::error!("{}", e);
    }
}
