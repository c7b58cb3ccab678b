use std::env;
use std::path::Path;
use std::process;

use colored::Colorize;
use patrones::{AppConfig, ApplicationConfigurator, DataManager};

const PAYLOAD: &str = "datasupersecret";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // With a config file the layers come from it; otherwise use the stock
    // encryption + compression stack.
    let data = match env::args().nth(1) {
        Some(path) => match AppConfig::load(Path::new(&path)) {
            Ok(config) => {
                let mut manager = DataManager::new(config.pipeline.source());
                manager.save_data(PAYLOAD);
                manager.load_data()
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".bold().red());
                process::exit(1);
            }
        },
        None => ApplicationConfigurator::new(true, true).run(PAYLOAD),
    };

    println!("{} {}", "DATA:".bold().green(), data);
}
