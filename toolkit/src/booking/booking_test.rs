use serde_json::json;

use super::*;

struct RejectingBackend;

impl BookingBackend for RejectingBackend {
    fn submit(&self, _request: &BookingRequest) -> Result<(), ToolkitError> {
        Err(ToolkitError::Storage("backend offline".to_owned()))
    }
}

fn request() -> BookingRequest {
    BookingRequest { kind: ToolKind::TestRideBooking, payload: json!({ "location": "zurich" }) }
}

#[test]
fn simulated_backend_confirms_with_reference() {
    let mut submission = Submission::default();
    submission.begin().unwrap();
    assert_eq!(submission.phase(), &SubmissionPhase::Submitting);

    let reference = submission.complete(&SimulatedBackend, &request(), "TR", 1_741_168_123_456, "failed").unwrap();
    assert_eq!(reference, "TR123456");
    assert_eq!(submission.reference(), Some("TR123456"));
}

#[test]
fn failing_backend_returns_to_editing() {
    let mut submission = Submission::default();
    submission.begin().unwrap();
    let err = submission
        .complete(&RejectingBackend, &request(), "TR", 1, "There was an error processing your booking. Please try again.")
        .unwrap_err();
    assert!(matches!(err, ToolkitError::Submission(_)));
    assert_eq!(err.to_string(), "There was an error processing your booking. Please try again.");
    assert!(submission.is_editing());
}

#[test]
fn complete_requires_begin() {
    let mut submission = Submission::default();
    assert!(submission.complete(&SimulatedBackend, &request(), "TR", 1, "failed").is_err());
    assert!(submission.is_editing());
}

#[test]
fn begin_twice_is_rejected() {
    let mut submission = Submission::default();
    submission.begin().unwrap();
    assert!(submission.begin().is_err());
}
