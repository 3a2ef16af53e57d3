//! Multi-step booking wizards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both wizards share the four-step [`wizard::StepMachine`] and the
//! [`Submission`] lifecycle. Submitting is split in two so the front end can
//! wait out [`SUBMIT_DELAY_MS`] between the calls:
//!
//! 1. `begin_submit` validates and moves to [`SubmissionPhase::Submitting`].
//! 2. `complete_submit` hands the booking to a [`BookingBackend`] and lands in
//!    [`SubmissionPhase::Confirmed`] or back in [`SubmissionPhase::Editing`].

pub mod service;
pub mod test_ride;
pub mod wizard;

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use serde_json::Value;

use crate::calendar;
use crate::error::ToolkitError;
use crate::module::ToolKind;

/// Simulated network latency of a booking submission.
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// A booking ready for the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub kind: ToolKind,
    pub payload: Value,
}

/// Accepts or rejects bookings.
pub trait BookingBackend {
    fn submit(&self, request: &BookingRequest) -> Result<(), ToolkitError>;
}

/// Accepts every booking.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedBackend;

impl BookingBackend for SimulatedBackend {
    fn submit(&self, request: &BookingRequest) -> Result<(), ToolkitError> {
        tracing::info!(module = %request.kind, "booking accepted by simulated backend");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Confirmed { reference: String },
}

/// Submission lifecycle shared by the wizards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Submission {
    #[must_use]
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }

    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Confirmed { reference } => Some(reference),
            _ => None,
        }
    }

    /// Move to `Submitting`. Fails if a submission is already running or done.
    pub fn begin(&mut self) -> Result<(), ToolkitError> {
        if !self.is_editing() {
            return Err(ToolkitError::validation("This booking has already been submitted."));
        }
        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// Hand `request` to `backend`. Success confirms with
    /// `prefix + last six digits of now_millis`; failure returns to `Editing`
    /// and reports `failure_message`.
    pub fn complete(
        &mut self,
        backend: &dyn BookingBackend,
        request: &BookingRequest,
        prefix: &str,
        now_millis: u64,
        failure_message: &str,
    ) -> Result<String, ToolkitError> {
        if self.phase != SubmissionPhase::Submitting {
            return Err(ToolkitError::validation("No booking is being submitted."));
        }
        match backend.submit(request) {
            Ok(()) => {
                let reference = calendar::reference_code(prefix, now_millis);
                tracing::info!(module = %request.kind, reference = %reference, "booking confirmed");
                self.phase = SubmissionPhase::Confirmed { reference: reference.clone() };
                Ok(reference)
            }
            Err(e) => {
                tracing::error!(module = %request.kind, error = %e, "booking submission failed");
                self.phase = SubmissionPhase::Editing;
                Err(ToolkitError::Submission(failure_message.to_owned()))
            }
        }
    }
}
