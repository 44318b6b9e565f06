pub mod replay;

use crate::configuration::settings::Settings;
use crate::error::{Error, Result};
use crate::output::{Output, SystemLog};
use crate::serializing::{DataModel, DataModelWriter};
use replay::EventScript;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App { settings }
    }

    /// Drives the output pipeline with a recorded event script.
    pub fn replay(&self, events: &Path) -> Result<()> {
        let script = EventScript::from_path(events)?;
        info!("Replaying {} events from {}", script.events.len(), events.display());
        let log = SystemLog::new();
        let result = self.run(&log, &script);
        log.close();
        result
    }

    fn run(&self, log: &SystemLog, script: &EventScript) -> Result<()> {
        let mut output = Output::from_settings(log, &self.settings)?;
        script.play(&mut output);
        output.close(&script.statistics)
    }

    /// Writes report data as script statements into `target`, or stdout.
    pub fn serialize(&self, data: &Path, target: Option<&Path>) -> Result<()> {
        let model = DataModel::from_reader(
            BufReader::new(File::open(data)?),
            self.settings.report.clone(),
        )?;
        let mut writer = DataModelWriter::from_settings(&self.settings)?;
        match target {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|err| Error::unavailable(path.display().to_string(), err))?;
                let mut out = BufWriter::new(file);
                writer.write_to(&model, &mut out)?;
                out.flush()?;
                info!("Report data written to {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                writer.write_to(&model, &mut out)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}
