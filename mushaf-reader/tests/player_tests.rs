//! Sequential player scenarios through a recording device

mod helpers;

use helpers::RecordingDevice;
use mushaf_common::events::{DeviceCommand, PlaybackState, TrackErrorAction};
use mushaf_reader::models::AudioManifest;
use mushaf_reader::playback::{SequentialPlayer, TrackErrorPolicy, TrackRef};

fn player(urls: &[&str], policy: TrackErrorPolicy) -> SequentialPlayer<RecordingDevice> {
    let mut player = SequentialPlayer::new(RecordingDevice::new(), policy);
    player.load_manifest(AudioManifest::from_urls(urls.iter().copied()));
    player
}

/// First sourcing attempt of the track at `index`
fn first(index: usize) -> TrackRef {
    TrackRef::new(index, 1)
}

fn set(url: &str) -> DeviceCommand {
    DeviceCommand::SetSource {
        url: url.to_string(),
    }
}

#[test]
fn test_three_tracks_play_in_order_then_stop_sourcing() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Skip);

    player.play();
    assert_eq!(player.device().commands(), vec![set("a"), DeviceCommand::Play]);

    player.track_ended(first(0));
    player.track_ended(first(1));
    assert_eq!(player.device().sources(), vec!["a", "b", "c"]);
    assert_eq!(player.cursor().index, 2);

    let before = player.device().log.len();
    let report = player.track_ended(first(2));

    // No further source after the last track
    assert_eq!(player.device().log.len(), before);
    assert_eq!(report.snapshot.status, PlaybackState::Idle);
    assert_eq!(player.cursor().index, 2);
}

#[test]
fn test_commands_are_tagged_with_track_index() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));

    let indices: Vec<usize> = player.device().log.iter().map(|(t, _)| t.index).collect();
    assert_eq!(indices, vec![0, 0, 1, 1]);
}

#[test]
fn test_play_after_finish_restarts_at_first_track() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));
    player.track_ended(first(1));
    player.device_mut().clear();

    player.play();
    assert_eq!(player.device().commands(), vec![set("a"), DeviceCommand::Play]);
    assert_eq!(player.cursor().index, 0);
}

#[test]
fn test_play_after_stop_restarts_at_first_track() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));
    player.stop();
    player.device_mut().clear();

    player.play();
    assert_eq!(player.device().sources(), vec!["a"]);
    assert_eq!(player.cursor().index, 0);
}

#[test]
fn test_pause_twice_resumes_same_track() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));
    player.device_mut().clear();

    let paused = player.pause_toggle();
    assert_eq!(paused.snapshot.status, PlaybackState::Paused);
    assert!(player.cursor().paused);

    let resumed = player.pause_toggle();
    assert_eq!(resumed.snapshot.status, PlaybackState::Playing);
    assert_eq!(player.cursor().index, 1);
    assert_eq!(
        player.device().commands(),
        vec![DeviceCommand::Pause, DeviceCommand::Play]
    );
}

#[test]
fn test_stop_rewinds_but_keeps_index() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));
    player.device_mut().clear();

    let report = player.stop();

    assert_eq!(report.snapshot.status, PlaybackState::Stopped);
    assert_eq!(player.cursor().index, 1);
    assert_eq!(
        player.device().commands(),
        vec![DeviceCommand::Pause, DeviceCommand::Rewind]
    );
}

#[test]
fn test_ended_while_paused_does_not_advance() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::Skip);
    player.play();
    player.pause_toggle();

    let report = player.track_ended(first(0));
    assert!(!report.cursor_moved());
    assert_eq!(player.cursor().index, 0);
}

#[test]
fn test_late_ended_for_previous_track_is_ignored() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));

    // Duplicate notification for track 0 arrives after track 1 started
    let report = player.track_ended(first(0));
    assert!(!report.cursor_moved());
    assert_eq!(player.device().sources(), vec!["a", "b"]);
}

#[test]
fn test_empty_manifest_play_is_noop() {
    let mut player = player(&[], TrackErrorPolicy::Skip);
    let report = player.play();

    assert_eq!(report.snapshot.status, PlaybackState::Idle);
    assert!(player.device().log.is_empty());
}

#[test]
fn test_stop_and_pause_are_noops_when_idle() {
    let mut player = player(&["a"], TrackErrorPolicy::Skip);

    assert!(!player.stop().cursor_moved());
    assert!(!player.pause_toggle().cursor_moved());
    assert!(player.device().log.is_empty());
}

#[test]
fn test_broken_track_is_retried_then_skipped() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Retry { max_attempts: 2 });
    player.device_mut().broken.insert("b".to_string());

    player.play();
    let report = player.track_ended(first(0));

    let actions: Vec<_> = report.failures.iter().map(|f| f.action).collect();
    assert_eq!(actions, vec![TrackErrorAction::Retry, TrackErrorAction::Skip]);
    assert_eq!(player.device().sources(), vec!["a", "b", "b", "c"]);
    assert_eq!(player.cursor().index, 2);
    assert_eq!(report.snapshot.status, PlaybackState::Playing);
}

#[test]
fn test_reported_load_error_skips_track() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::Skip);
    player.play();

    let report = player.track_failed(first(0), "404 from CDN");

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].message, "404 from CDN");
    assert_eq!(player.device().sources(), vec!["a", "b"]);
    assert_eq!(player.cursor().index, 1);
}

#[test]
fn test_new_manifest_stops_and_resets() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));
    player.device_mut().clear();

    player.load_manifest(AudioManifest::from_urls(["x", "y"]));

    assert_eq!(
        player.device().commands(),
        vec![DeviceCommand::Pause, DeviceCommand::Rewind]
    );
    assert_eq!(player.snapshot().status, PlaybackState::Idle);
    assert_eq!(player.cursor().index, 0);

    player.play();
    assert_eq!(player.device().sources(), vec!["x"]);
}

#[test]
fn test_error_while_paused_keeps_track_paused() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::default());
    player.play();
    player.pause_toggle();
    player.device_mut().clear();

    // Pausing a still-buffering element aborts its pending play()
    let report = player.track_failed(first(0), "AbortError: play() interrupted by pause()");

    assert!(report.failures.is_empty());
    assert_eq!(report.snapshot.status, PlaybackState::Paused);
    assert!(player.device().log.is_empty());

    let resumed = player.pause_toggle();
    assert_eq!(resumed.snapshot.status, PlaybackState::Playing);
    assert_eq!(player.cursor().index, 0);
    assert_eq!(player.device().commands(), vec![DeviceCommand::Play]);
}

#[test]
fn test_duplicate_error_report_does_not_spend_retry() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::default());
    player.play();

    let retried = player.track_failed(first(0), "media error 4");
    let duplicate = player.track_failed(first(0), "media error 4");

    assert_eq!(retried.failures[0].action, TrackErrorAction::Retry);
    assert!(duplicate.failures.is_empty());
    assert_eq!(player.cursor().index, 0);
    assert_eq!(player.device().sources(), vec!["a", "a"]);

    // The retried sourcing is attempt 2; its own failure exhausts the budget
    let skipped = player.track_failed(TrackRef::new(0, 2), "media error 4");
    assert_eq!(skipped.failures[0].action, TrackErrorAction::Skip);
    assert_eq!(player.device().sources(), vec!["a", "a", "b"]);
}

#[test]
fn test_late_error_from_earlier_track_spares_current_one() {
    let mut player = player(&["a", "b", "c"], TrackErrorPolicy::Skip);
    player.play();
    player.track_ended(first(0));

    let report = player.track_failed(first(0), "late error for a");

    assert!(report.failures.is_empty());
    assert_eq!(player.cursor().index, 1);
    assert_eq!(player.device().sources(), vec!["a", "b"]);
}

#[test]
fn test_commands_carry_attempt_number() {
    let mut player = player(&["a", "b"], TrackErrorPolicy::Retry { max_attempts: 3 });
    player.device_mut().broken.insert("a".to_string());

    player.play();

    let attempts: Vec<u32> = player
        .device()
        .log
        .iter()
        .filter(|(_, c)| matches!(c, DeviceCommand::SetSource { .. }))
        .map(|(t, _)| t.attempt)
        .collect();
    assert_eq!(attempts, vec![1, 2, 3, 1]);
}
