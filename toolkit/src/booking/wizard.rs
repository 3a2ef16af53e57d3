//! Step machine shared by the booking wizards.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::error::ToolkitError;

pub const MAX_STEPS: u8 = 4;

/// Result of a successful `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to this step.
    Moved(u8),
    /// The last step validated; the caller submits.
    ReadyToSubmit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Current step in `1..=max_steps`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepMachine {
    step: u8,
    max_steps: u8,
}

impl Default for StepMachine {
    fn default() -> Self {
        Self::new(MAX_STEPS)
    }
}

impl StepMachine {
    #[must_use]
    pub fn new(max_steps: u8) -> Self {
        Self { step: 1, max_steps: max_steps.max(1) }
    }

    #[must_use]
    pub fn step(&self) -> u8 {
        self.step
    }

    #[must_use]
    pub fn max_steps(&self) -> u8 {
        self.max_steps
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.step == 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step == self.max_steps
    }

    /// Validate the current step, then advance. A failed validation leaves the step unchanged.
    pub fn next(&mut self, validate: impl FnOnce(u8) -> Result<(), ToolkitError>) -> Result<Advance, ToolkitError> {
        validate(self.step)?;
        if self.is_last() {
            return Ok(Advance::ReadyToSubmit);
        }
        self.step += 1;
        Ok(Advance::Moved(self.step))
    }

    /// Go back one step; no-op at step 1.
    pub fn previous(&mut self) -> u8 {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Indicator state of step `n`.
    #[must_use]
    pub fn status(&self, n: u8) -> StepStatus {
        match n.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}
