//! Property-based tests for rust_alog using proptest

use proptest::prelude::*;
use rust_alog::prelude::*;
use rust_alog::{EntryQueue, PushOutcome};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Fatal),
        Just(LogLevel::Error),
        Just(LogLevel::Warning),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
    ]
}

// ============================================================================
// Queue overflow policy against a reference model
// ============================================================================

proptest! {
    /// Pushing without draining keeps exactly the entries the soft-cap rule admits
    #[test]
    fn test_queue_matches_overflow_model(
        levels in prop::collection::vec(any_level(), 0..64),
        max_depth in 0usize..16,
    ) {
        let queue = EntryQueue::new();
        let mut model: Vec<String> = Vec::new();

        for (i, level) in levels.iter().enumerate() {
            let message = format!("{}", i);
            let outcome = queue.push(LogEntry::new(*level, message.clone()), max_depth);

            let critical = *level <= LogLevel::Error;
            if model.len() > max_depth && !critical {
                prop_assert_eq!(outcome, PushOutcome::Overflow);
            } else {
                prop_assert_eq!(outcome, PushOutcome::Queued);
                model.push(message);
            }
        }

        let drained: Vec<String> = queue
            .drain_all()
            .iter()
            .map(|e| e.message().to_string())
            .collect();
        prop_assert_eq!(drained, model);
        prop_assert!(queue.is_empty());
    }
}

// ============================================================================
// End-to-end filtering and ordering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// The sink sees exactly the admitted entries, in emit order
    #[test]
    fn test_output_is_filtered_emit_sequence(
        levels in prop::collection::vec(any_level(), 0..100),
        threshold in any_level(),
    ) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(threshold)
            .sink(sink.clone())
            .build()
            .unwrap();

        for (i, level) in levels.iter().enumerate() {
            logger.log(*level, format!("{}", i));
        }
        logger.stop();

        let expected: Vec<String> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| **level <= threshold)
            .map(|(i, level)| format!("[{}]{}", level, i))
            .collect();
        let actual: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line.splitn(2, "][").nth(1).map(|s| format!("[{}", s)).unwrap())
            .collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(
            logger.metrics().filtered_count() as usize,
            levels.len() - logger.metrics().written_count() as usize
        );
    }

    /// Messages never render across more than one line
    #[test]
    fn test_rendered_entry_is_single_line(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message);
        let line = entry.render(&TimestampFormat::Classic);
        prop_assert!(!line.contains('\n'));
        prop_assert!(!line.contains('\r'));
    }
}
