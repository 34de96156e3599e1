use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io,
    path::Path,
};

use crate::{env::Environment, error::Result};

use super::{RecordSink, StepRecord};

const HEADER: [&str; 6] = ["Episode", "State", "Reward", "Time", "Action", "Agent"];

/// Writes one CSV row per step
///
/// Columns are `Episode,State,Reward,Time,Action,Agent`, where `Reward` is the
/// running total for the episode.
pub struct CsvRecordSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl<W: io::Write> CsvRecordSink<W> {
    /// Wrap a writer and emit the header row
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl CsvRecordSink<File> {
    /// Create (or truncate) a file and write the header
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(File::create(path)?)
    }

    /// Append to a file, writing the header only if the file is new or empty
    ///
    /// Lets several runs or agents share one log.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        if file.metadata()?.len() == 0 {
            Self::new(file)
        } else {
            Ok(Self {
                writer: csv::Writer::from_writer(file),
            })
        }
    }
}

impl<E, W> RecordSink<E> for CsvRecordSink<W>
where
    E: Environment,
    E::State: Display,
    E::Action: Display,
    W: io::Write,
{
    fn record(&mut self, record: StepRecord<E>) -> Result<()> {
        self.writer.write_record(&[
            record.episode.to_string(),
            record.state.to_string(),
            record.total_reward.to_string(),
            record.time.to_string(),
            record.action.to_string(),
            record.agent_index.to_string(),
        ])?;
        Ok(())
    }
}
