//! Playback device abstraction
//!
//! A device holds at most one track source and can play, pause, rewind and
//! report the natural end of the current track. End/failure notifications
//! flow back to the player from outside (see `SequentialPlayer::track_ended`).

use crate::error::Result;
use crate::playback::sequencer::TrackRef;
use mushaf_common::events::DeviceCommand;

/// A single media element
///
/// `track` identifies the sourcing a command belongs to so that the device
/// can tag its later notifications with it.
pub trait PlaybackDevice: Send {
    fn set_source(&mut self, track: TrackRef, url: &str) -> Result<()>;

    fn play(&mut self, track: TrackRef) -> Result<()>;

    fn pause(&mut self, track: TrackRef) -> Result<()>;

    /// Move the playback position back to zero
    fn rewind(&mut self, track: TrackRef) -> Result<()>;

    fn apply(&mut self, command: &DeviceCommand, track: TrackRef) -> Result<()> {
        match command {
            DeviceCommand::SetSource { url } => self.set_source(track, url),
            DeviceCommand::Play => self.play(track),
            DeviceCommand::Pause => self.pause(track),
            DeviceCommand::Rewind => self.rewind(track),
        }
    }
}
