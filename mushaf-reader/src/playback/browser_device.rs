//! Playback device backed by the reader page's `<audio>` element
//!
//! Commands are published as `DeviceCommand` events on the EventBus and
//! streamed to the page over SSE. The page reports natural track ends and
//! load failures back through `POST /api/v1/device/ended` and
//! `POST /api/v1/device/error`.

use crate::error::Result;
use crate::playback::device::PlaybackDevice;
use crate::playback::sequencer::TrackRef;
use mushaf_common::events::{DeviceCommand, EventBus, ReaderEvent};
use tracing::{debug, trace};

pub struct BrowserDevice {
    events: EventBus,
}

impl BrowserDevice {
    pub fn new(events: EventBus) -> Self {
        Self { events }
    }

    fn publish(&self, command: DeviceCommand, track: TrackRef) {
        trace!(
            ?command,
            track_index = track.index,
            attempt = track.attempt,
            "Publishing device command"
        );
        let event = ReaderEvent::DeviceCommand {
            command,
            track_index: track.index,
            attempt: track.attempt,
            timestamp: chrono::Utc::now(),
        };
        if self.events.emit(event).is_err() {
            // No page connected; the command is dropped like a detached element would
            debug!(track_index = track.index, "No SSE subscribers for device command");
        }
    }
}

impl PlaybackDevice for BrowserDevice {
    fn set_source(&mut self, track: TrackRef, url: &str) -> Result<()> {
        self.publish(
            DeviceCommand::SetSource {
                url: url.to_string(),
            },
            track,
        );
        Ok(())
    }

    fn play(&mut self, track: TrackRef) -> Result<()> {
        self.publish(DeviceCommand::Play, track);
        Ok(())
    }

    fn pause(&mut self, track: TrackRef) -> Result<()> {
        self.publish(DeviceCommand::Pause, track);
        Ok(())
    }

    fn rewind(&mut self, track: TrackRef) -> Result<()> {
        self.publish(DeviceCommand::Rewind, track);
        Ok(())
    }
}
