use super::*;

fn ok(_: u8) -> Result<(), ToolkitError> {
    Ok(())
}

#[test]
fn next_advances_until_last_step() {
    let mut steps = StepMachine::default();
    assert_eq!(steps.next(ok).unwrap(), Advance::Moved(2));
    assert_eq!(steps.next(ok).unwrap(), Advance::Moved(3));
    assert_eq!(steps.next(ok).unwrap(), Advance::Moved(4));
    assert_eq!(steps.next(ok).unwrap(), Advance::ReadyToSubmit);
    assert_eq!(steps.step(), 4);
    assert!(steps.is_last());
}

#[test]
fn failed_validation_keeps_step() {
    let mut steps = StepMachine::default();
    let err = steps.next(|_| Err(ToolkitError::validation("Please select a location."))).unwrap_err();
    assert_eq!(err.to_string(), "Please select a location.");
    assert_eq!(steps.step(), 1);
}

#[test]
fn validator_sees_current_step() {
    let mut steps = StepMachine::default();
    steps.next(ok).unwrap();
    let mut seen = 0;
    steps
        .next(|step| {
            seen = step;
            Ok(())
        })
        .unwrap();
    assert_eq!(seen, 2);
}

#[test]
fn previous_is_noop_at_first_step() {
    let mut steps = StepMachine::default();
    assert_eq!(steps.previous(), 1);
    steps.next(ok).unwrap();
    assert_eq!(steps.previous(), 1);
    assert!(steps.is_first());
}

#[test]
fn status_marks_completed_active_pending() {
    let mut steps = StepMachine::default();
    steps.next(ok).unwrap();
    assert_eq!(steps.status(1), StepStatus::Completed);
    assert_eq!(steps.status(2), StepStatus::Active);
    assert_eq!(steps.status(4), StepStatus::Pending);
}

#[test]
fn zero_max_steps_is_clamped() {
    let steps = StepMachine::new(0);
    assert_eq!(steps.max_steps(), 1);
    assert!(steps.is_last());
}
