use super::*;

#[test]
fn cancel_is_shared_between_clones() {
    let interval = every(1_000, || {});
    let handle = interval.clone();
    assert!(interval.is_alive());

    handle.cancel();
    assert!(!interval.is_alive());
    assert!(!handle.is_alive());
}
