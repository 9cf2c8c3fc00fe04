// main.rs

mod app;
mod command;
mod config;
mod error;
mod logging;
mod repl;
mod store;
mod table;
mod todo;

use crate::app::App;
use crate::config::Config;
use crate::repl::Repl;
use crate::store::Store;
use std::io::{self};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    // Dropping the handle stops logging, so keep it for the whole run.
    let _logger = match logging::init(&config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let app = App::new(Store::new(&config.data_file));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(app, stdin.lock(), stdout.lock());
    if let Err(err) = repl.run() {
        log::error!("event=repl_exit status=error reason=\"{}\"", err);
        return Err(err.into());
    }

    Ok(())
}
