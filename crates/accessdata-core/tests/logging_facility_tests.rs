#![allow(clippy::unwrap_used, clippy::expect_used)]

use accessdata_core::errors::{DataError, ExError, ExErrorKind};
use accessdata_core::logging_facility::test_capture::init_test_capture;
use accessdata_core::{log_op_end, log_op_error, log_op_start};
use accessdata_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_TEAM_NAME,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .expect("Should have end event");

    assert_eq!(
        end_event.fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::NotFound).with_entity("Customer");
    log_op_error!(op_name, err, duration_ms = 10);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_NOT_FOUND".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&"NotFound".to_string())
    );
}

#[test]
fn test_log_op_error_with_fields_keeps_message() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_fields_unique_8";

    let err = ExError::new(ExErrorKind::Persistence).with_message("disk full");
    log_op_error!(op_name, err, duration_ms = 3, team_name = "first");

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get(FIELD_TEAM_NAME),
        Some(&"first".to_string())
    );
    assert_eq!(
        error_event.message.as_deref(),
        Some("[ERR_PERSISTENCE]: disk full")
    );
}

#[test]
fn test_log_op_error_converts_domain_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_domain_unique_4";

    let err = DataError::UnsavedTeam {
        side: "team2",
        team_name: "ghost".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 1);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_REFERENTIAL_INTEGRITY".to_string())
    );
}

#[test]
fn test_start_carries_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_start_fields_unique_5";

    log_op_start!(op_name, team_name = "first");

    let events = capture.events();
    let start_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have start event");

    assert_eq!(
        start_event.fields.get(FIELD_TEAM_NAME),
        Some(&"first".to_string())
    );
    assert!(start_event
        .component
        .as_deref()
        .is_some_and(|c| c.starts_with("logging_facility_tests")));
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_6";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 7);

    assert_eq!(capture.count_events(|e| e.op.as_deref() == Some(op_name)), 2);
}

#[test]
fn test_messages_in_emission_order() {
    let capture = init_test_capture();

    tracing::info!("message_order_unique_7 a");
    tracing::info!("message_order_unique_7 b");

    let ours: Vec<String> = capture
        .messages()
        .into_iter()
        .filter(|m| m.starts_with("message_order_unique_7"))
        .collect();
    assert_eq!(
        ours,
        vec![
            "message_order_unique_7 a".to_string(),
            "message_order_unique_7 b".to_string()
        ]
    );
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}
