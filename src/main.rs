mod color;
mod data;
mod pipeline;
mod plot;
mod report;
mod settings;
mod stats;

use std::io;

use data::loader::LoadError;
use settings::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Failures are reported as text; the process still exits normally.
    if let Err(err) = pipeline::run(&settings, &mut out) {
        log::debug!("run aborted: {err:?}");
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::FileNotFound(path)) => println!(
                "Error: The file '{}' was not found. Please ensure it is in the correct directory.",
                path.display()
            ),
            None => println!("Error: {err:#}"),
        }
    }
}
