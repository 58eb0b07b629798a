//! PlaybackDevice that records commands and can simulate broken tracks

use mushaf_common::events::DeviceCommand;
use mushaf_reader::error::{Error, Result};
use mushaf_reader::playback::{PlaybackDevice, TrackRef};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct RecordingDevice {
    /// Every command with the sourcing it was issued for
    pub log: Vec<(TrackRef, DeviceCommand)>,
    /// URLs whose `set_source` fails
    pub broken: HashSet<String>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sources(&self) -> Vec<String> {
        self.log
            .iter()
            .filter_map(|(_, c)| match c {
                DeviceCommand::SetSource { url } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn commands(&self) -> Vec<DeviceCommand> {
        self.log.iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl PlaybackDevice for RecordingDevice {
    fn set_source(&mut self, track: TrackRef, url: &str) -> Result<()> {
        self.log.push((
            track,
            DeviceCommand::SetSource {
                url: url.to_string(),
            },
        ));
        if self.broken.contains(url) {
            return Err(Error::Device(format!("cannot load {}", url)));
        }
        Ok(())
    }

    fn play(&mut self, track: TrackRef) -> Result<()> {
        self.log.push((track, DeviceCommand::Play));
        Ok(())
    }

    fn pause(&mut self, track: TrackRef) -> Result<()> {
        self.log.push((track, DeviceCommand::Pause));
        Ok(())
    }

    fn rewind(&mut self, track: TrackRef) -> Result<()> {
        self.log.push((track, DeviceCommand::Rewind));
        Ok(())
    }
}
