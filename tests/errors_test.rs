// ABOUTME: Tests for the unified error type, error codes, and serialized error responses
// ABOUTME: Validates constructors, context propagation, and JSON conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftwise::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use liftwise::models::WeeklyPerformanceData;

#[test]
fn test_client_and_server_codes() {
    assert!(ErrorCode::InvalidInput.is_client_error());
    assert!(ErrorCode::ValueOutOfRange.is_client_error());
    assert!(ErrorCode::MissingRequiredField.is_client_error());
    assert!(!ErrorCode::ConfigInvalid.is_client_error());
    assert!(!ErrorCode::SerializationError.is_client_error());
    assert!(!ErrorCode::InternalError.is_client_error());
}

#[test]
fn test_constructors_attach_context() {
    let missing = AppError::missing_field("exercise_id");
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);
    assert_eq!(missing.context.field.as_deref(), Some("exercise_id"));
    assert!(missing.message.contains("exercise_id"));

    let range = AppError::out_of_range("rpe", "RPE must be between 1 and 10")
        .with_resource_id("set-42");
    assert_eq!(range.code, ErrorCode::ValueOutOfRange);
    assert_eq!(range.context.resource_id.as_deref(), Some("set-42"));
}

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::config("LIFTWISE_PLATEAU_WINDOW must be numeric");
    let rendered = error.to_string();
    assert!(rendered.starts_with(ErrorCode::ConfigError.description()));
    assert!(rendered.ends_with("LIFTWISE_PLATEAU_WINDOW must be numeric"));
}

#[test]
fn test_malformed_json_is_an_invalid_format() {
    fn parse(input: &str) -> AppResult<WeeklyPerformanceData> {
        Ok(serde_json::from_str(input)?)
    }

    let wrong_type = parse("{\"week_number\": \"three\"}").unwrap_err();
    assert_eq!(wrong_type.code, ErrorCode::InvalidFormat);
    assert!(wrong_type.code.is_client_error());

    let truncated = parse("{\"week_number\": 3").unwrap_err();
    assert_eq!(truncated.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_error_response_serialization() {
    let error = AppError::out_of_range("sleep_quality", "Sleep quality must be 1-5");
    let response = ErrorResponse::from(&error);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(json["field"], "sleep_quality");

    let internal = ErrorResponse::from(&AppError::internal("boom"));
    let json = serde_json::to_string(&internal).unwrap();
    assert!(json.contains("INTERNAL_ERROR"));
    assert!(!json.contains("field"));

    let serialization = ErrorResponse::from(&AppError::serialization("broken pipe"));
    assert_eq!(
        serde_json::to_value(&serialization).unwrap()["code"],
        "SERIALIZATION_ERROR"
    );
}
