use toolkit::module::ToolKind;

use super::*;

#[test]
fn user_facing_errors_keep_their_message() {
    let notice = Notice::from_error(&ToolkitError::validation("Please enter both height and inseam measurements."));
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Please enter both height and inseam measurements.");

    let notice = Notice::from_error(&ToolkitError::Submission("Booking failed.".to_owned()));
    assert_eq!(notice.message, "Booking failed.");
}

#[test]
fn internal_errors_are_masked() {
    let notice = Notice::from_error(&ToolkitError::ModuleNotLoaded(ToolKind::Wishlist));
    assert_eq!(notice.message, GENERIC_FAILURE);
}

#[test]
fn ids_are_unique_and_classes_follow_level() {
    let first = Notice::new(NoticeLevel::Success, "Added");
    let second = Notice::new(NoticeLevel::Warning, "Careful");
    assert_ne!(first.id, second.id);
    assert_eq!(first.class(), "ebike-notification ebike-notification--success");
    assert_eq!(second.class(), "ebike-notification ebike-notification--warning");
}
