mod form;
mod ledger;
mod logging;
mod models;
mod run;
mod settings;
mod ui;

use anyhow::Result;

use settings::{Launch, Settings};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match Settings::from_args(&args) {
        Ok(Launch::Tui(settings)) => {
            logging::init(&settings)?;
            run::as_tui(&settings)
        }
        Ok(Launch::Help) => {
            run::print_usage();
            Ok(())
        }
        Ok(Launch::Version) => {
            run::print_version();
            Ok(())
        }
        Err(e) => {
            run::print_usage();
            Err(e)
        }
    }
}
