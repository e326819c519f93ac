#![cfg(feature = "metrics")]
//! Tests for the reassembly metrics.
//!
//! Counters are captured with `metrics_util::debugging::DebuggingRecorder`
//! installed as a thread-local recorder.

use channel_reassembler::{
    ReassembleConfig,
    metrics::{CHANNELS_TOTAL, FRAMES_SKIPPED, RECORDS_REJECTED},
    reassemble_channel,
    reassemble_channels,
};
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use reassembler_testing::{INBOX, RecordDir, channel, sequence};
use rstest::rstest;

fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

fn counter_value(snapshotter: &Snapshotter, name: &str, label: Option<(&str, &str)>) -> u64 {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .find_map(|(key, _, _, value)| {
            let key = key.key();
            let labelled = label.is_none_or(|(k, v)| {
                key.labels().any(|l| l.key() == k && l.value() == v)
            });
            match value {
                DebugValue::Counter(count) if key.name() == name && labelled => Some(count),
                _ => None,
            }
        })
        .unwrap_or(0)
}

#[rstest]
#[case::duplicate_close(&[(0, false), (1, true), (1, true)], "duplicate_close", 1)]
#[case::duplicate_number(&[(0, false), (0, false), (0, false)], "duplicate_frame_number", 2)]
#[case::past_end(&[(1, true), (3, false), (5, false)], "past_channel_end", 2)]
#[case::pruned(&[(0, false), (4, false), (6, false), (2, true)], "pruned", 2)]
fn skipped_frames_are_counted_by_reason(
    #[case] layout: &[(u16, bool)],
    #[case] reason: &str,
    #[case] expected: u64,
) {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let _ = reassemble_channel(channel(1), sequence(channel(1), layout));
    });

    assert_eq!(
        counter_value(&snapshotter, FRAMES_SKIPPED, Some(("reason", reason))),
        expected
    );
}

#[test]
fn channels_are_counted_by_state() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let _ = reassemble_channel(channel(1), sequence(channel(1), &[(0, true)]));
        let _ = reassemble_channel(channel(2), sequence(channel(2), &[(1, true)]));
        let _ = reassemble_channel(channel(3), sequence(channel(3), &[(0, false)]));
    });

    let metrics = snapshotter.snapshot().into_vec();
    let count = |state: &str| {
        metrics
            .iter()
            .find_map(|(key, _, _, value)| {
                let key = key.key();
                let matches = key.name() == CHANNELS_TOTAL
                    && key.labels().any(|l| l.key() == "state" && l.value() == state);
                match value {
                    DebugValue::Counter(count) if matches => Some(*count),
                    _ => None,
                }
            })
            .unwrap_or(0)
    };
    assert_eq!(count("ready"), 1);
    assert_eq!(count("incomplete"), 2);
}

#[test]
fn rejected_records_are_counted() {
    let dir = RecordDir::new();
    dir.write_raw("one.json", b"not json");
    dir.write_raw("two.json", b"{}");
    let config = ReassembleConfig::new(INBOX)
        .with_in_directory(dir.input())
        .with_out_directory(dir.output());

    let (snapshotter, recorder) = debugging_recorder_setup();
    let summary = metrics::with_local_recorder(&recorder, || reassemble_channels(&config))
        .expect("run succeeds");

    assert_eq!(summary.load_failures.len(), 2);
    assert_eq!(counter_value(&snapshotter, RECORDS_REJECTED, None), 2);
}
