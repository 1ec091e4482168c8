use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error variant in the workspace carries an
/// ErrorLocation. If capture breaks, all error messages lose their origin.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_position() {
    let location = ErrorLocation::from(Location::caller());

    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` Display format.
///
/// **BUG THIS CATCHES**: A format change would scramble every error message
/// in the workspace, since they all interpolate `{location}`.
#[test]
#[track_caller]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation::from(Location::caller());
    let formatted = format!("{}", location);

    assert!(formatted.starts_with('['), "Should start with bracket");
    assert!(formatted.ends_with(']'), "Should end with bracket");
    assert!(
        formatted.matches(':').count() >= 2,
        "Should contain file:line:column separators"
    );
}
