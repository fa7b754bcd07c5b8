use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::PathBuf;

use formlet::pipeline::Rules;
use registration::session::{Outcome, Session};
use registration::{config, paths};
use simplelog::{Config, LevelFilter, WriteLogger};

fn init_logging() {
    paths::rotate_logs();

    let log_path = paths::log_file()
        .filter(|path| {
            path.parent()
                .is_some_and(|dir| fs::create_dir_all(dir).is_ok())
        })
        .unwrap_or_else(|| PathBuf::from("registration.log"));

    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }
}

fn main() {
    init_logging();

    let rules = config::load_rules().unwrap_or_else(|e| {
        log::warn!("{e}");
        eprintln!("Warning: {e}, using default rules");
        Rules::default()
    });

    let session = Session::new(rules);
    println!("{}", session.render());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read input: {e}");
                break;
            }
        };

        match session.execute_line(&line) {
            Ok(Outcome::Output(text)) => println!("{text}"),
            Ok(Outcome::Quit) => break,
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    log::info!("session ended");
}
