#[macro_use]
extern crate log;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use cannon_report::app::App;
use cannon_report::configuration::{
    command_line::{Command, LogLevel, Opt},
    settings::Settings,
};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(2);
    }

    let settings = match Settings::load(options.config) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings {}", e);
            exit(2);
        }
    };
    debug!("Initiated configuration {:#?}", settings);

    let app = App::new(settings);
    let result = match &options.command {
        Command::Replay { events } => app.replay(events),
        Command::Serialize { data, output } => app.serialize(data, output.as_deref()),
    };
    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
