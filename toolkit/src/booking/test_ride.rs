//! Test-ride booking: location, date and time, rider details, confirmation.

#[cfg(test)]
#[path = "test_ride_test.rs"]
mod test_ride_test;

use rand::Rng;
use serde_json::json;
use time::Date;

use super::wizard::{Advance, StepMachine};
use super::{BookingBackend, BookingRequest, Submission};
use crate::calendar;
use crate::catalog::TestRideLocation;
use crate::error::ToolkitError;
use crate::input;
use crate::module::ToolKind;

pub const REFERENCE_PREFIX: &str = "TR";

/// Simulated latency of the availability lookup.
pub const SLOT_LOAD_DELAY_MS: u32 = 500;

/// Bookable days after today.
pub const BOOKING_WINDOW_DAYS: i64 = 30;

pub const STEP_LABELS: [&str; 4] = ["Location", "Date & Time", "Details", "Confirm"];

pub const NO_SLOTS_MESSAGE: &str = "No available slots for this date. Please choose another date.";
pub const FAILURE_MESSAGE: &str = "There was an error processing your booking. Please try again.";

const WEEKDAY_SLOTS: [&str; 8] = ["09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00", "17:00"];

/// Chance that a slot is already taken.
const SLOT_TAKEN_PROBABILITY: f64 = 0.3;

/// `(value, label)` pairs of the bike preference select.
pub const BIKE_PREFERENCES: [(&str, &str); 5] = [
    ("", "No preference"),
    ("city", "City Bike"),
    ("trekking", "Trekking Bike"),
    ("mountain", "Mountain Bike"),
    ("cargo", "Cargo Bike"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Experience {
    #[default]
    Beginner,
    Some,
    Experienced,
}

impl Experience {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Some, Self::Experienced];

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "some" => Self::Some,
            "experienced" => Self::Experienced,
            _ => Self::Beginner,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Some => "some",
            Self::Experienced => "experienced",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "First time rider",
            Self::Some => "Some experience",
            Self::Experienced => "Very experienced",
        }
    }
}

/// Candidate slots for `date`; weekends close an hour earlier.
#[must_use]
pub fn slot_template(date: Date) -> &'static [&'static str] {
    if calendar::is_weekend(date) { &WEEKDAY_SLOTS[..7] } else { &WEEKDAY_SLOTS }
}

/// Slots still free on `date`, each kept with probability 0.7.
pub fn available_slots<R: Rng + ?Sized>(date: Date, rng: &mut R) -> Vec<String> {
    slot_template(date)
        .iter()
        .filter(|_| rng.random::<f64>() > SLOT_TAKEN_PROBABILITY)
        .map(|slot| (*slot).to_owned())
        .collect()
}

/// Availability of the chosen date.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slots {
    #[default]
    NoDate,
    Loading(Date),
    Ready(Vec<String>),
}

/// Rider details collected on step 3.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiderDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bike_preference: String,
    pub experience: Experience,
    pub special_requests: String,
}

/// Step 4 preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRideSummary {
    pub location_name: String,
    pub location_address: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bike_preference: String,
    pub experience: String,
    pub special_requests: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TestRideWizard {
    steps: StepMachine,
    submission: Submission,
    locations: Vec<TestRideLocation>,
    location: Option<String>,
    date: Option<Date>,
    time: Option<String>,
    slots: Slots,
    pub details: RiderDetails,
}

impl TestRideWizard {
    #[must_use]
    pub fn new(locations: Vec<TestRideLocation>) -> Self {
        Self {
            steps: StepMachine::default(),
            submission: Submission::default(),
            locations,
            location: None,
            date: None,
            time: None,
            slots: Slots::NoDate,
            details: RiderDetails::default(),
        }
    }

    #[must_use]
    pub fn steps(&self) -> &StepMachine {
        &self.steps
    }

    #[must_use]
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    #[must_use]
    pub fn locations(&self) -> &[TestRideLocation] {
        &self.locations
    }

    #[must_use]
    pub fn location(&self) -> Option<&TestRideLocation> {
        let key = self.location.as_deref()?;
        self.locations.iter().find(|location| location.key == key)
    }

    #[must_use]
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    #[must_use]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn select_location(&mut self, key: &str) -> Result<(), ToolkitError> {
        if !self.locations.iter().any(|location| location.key == key) {
            return Err(ToolkitError::validation("Please select a location."));
        }
        self.location = Some(key.to_owned());
        Ok(())
    }

    /// Earliest and latest bookable dates.
    #[must_use]
    pub fn date_bounds(today: Date) -> (Date, Date) {
        (calendar::add_days(today, 1), calendar::add_days(today, BOOKING_WINDOW_DAYS))
    }

    /// Choose a date (`YYYY-MM-DD`). Clears the time and starts loading slots.
    pub fn pick_date(&mut self, raw: &str, today: Date) -> Result<Date, ToolkitError> {
        let (min, max) = Self::date_bounds(today);
        let date = calendar::parse_iso_date(raw)
            .filter(|date| (min..=max).contains(date))
            .ok_or_else(|| {
                ToolkitError::validation(format!(
                    "Please choose a date between {} and {}.",
                    calendar::iso_date(min),
                    calendar::iso_date(max)
                ))
            })?;
        self.date = Some(date);
        self.time = None;
        self.slots = Slots::Loading(date);
        Ok(date)
    }

    /// Finish the availability lookup started for `date`. Stale lookups are ignored.
    pub fn finish_loading<R: Rng + ?Sized>(&mut self, date: Date, rng: &mut R) -> bool {
        if self.slots != Slots::Loading(date) {
            return false;
        }
        self.slots = Slots::Ready(available_slots(date, rng));
        true
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), ToolkitError> {
        match &self.slots {
            Slots::Ready(slots) if slots.iter().any(|s| s == slot) => {
                self.time = Some(slot.to_owned());
                Ok(())
            }
            _ => Err(ToolkitError::validation("Please select a date and time.")),
        }
    }

    /// Check the fields of `step`.
    pub fn validate(&self, step: u8) -> Result<(), ToolkitError> {
        match step {
            1 if self.location().is_none() => Err(ToolkitError::validation("Please select a location.")),
            2 if self.date.is_none() || self.time.is_none() => {
                Err(ToolkitError::validation("Please select a date and time."))
            }
            3 => {
                let d = &self.details;
                if input::is_blank(&d.name) || input::is_blank(&d.email) || input::is_blank(&d.phone) {
                    return Err(ToolkitError::validation("Please fill in all required fields."));
                }
                if !input::is_valid_email(d.email.trim()) {
                    return Err(ToolkitError::validation("Please enter a valid email address."));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn next(&mut self) -> Result<Advance, ToolkitError> {
        let checked = self.validate(self.steps.step());
        self.steps.next(|_| checked)
    }

    pub fn previous(&mut self) -> u8 {
        self.steps.previous()
    }

    #[must_use]
    pub fn summary(&self) -> TestRideSummary {
        let d = &self.details;
        let preference = BIKE_PREFERENCES
            .iter()
            .find(|(value, _)| *value == d.bike_preference)
            .map_or(BIKE_PREFERENCES[0].1, |(_, label)| *label);
        let requests = d.special_requests.trim();
        TestRideSummary {
            location_name: self.location().map(|l| l.name.clone()).unwrap_or_default(),
            location_address: self.location().map(|l| l.address.clone()).unwrap_or_default(),
            date: self.date.map(calendar::long_date).unwrap_or_default(),
            time: self.time.clone().unwrap_or_default(),
            name: d.name.trim().to_owned(),
            email: d.email.trim().to_owned(),
            phone: d.phone.trim().to_owned(),
            bike_preference: preference.to_owned(),
            experience: d.experience.label().to_owned(),
            special_requests: (!requests.is_empty()).then(|| requests.to_owned()),
        }
    }

    fn request(&self) -> BookingRequest {
        let summary = self.summary();
        BookingRequest {
            kind: ToolKind::TestRideBooking,
            payload: json!({
                "location": self.location,
                "date": self.date.map(calendar::iso_date),
                "time": self.time,
                "name": summary.name,
                "email": summary.email,
                "phone": summary.phone,
                "bikePreference": self.details.bike_preference,
                "experienceLevel": self.details.experience.as_str(),
                "specialRequests": summary.special_requests,
            }),
        }
    }

    /// Validate every step and start submitting. Only allowed on the last step.
    pub fn begin_submit(&mut self) -> Result<(), ToolkitError> {
        if !self.steps.is_last() {
            return Err(ToolkitError::validation("Please complete every step first."));
        }
        for step in 1..=self.steps.max_steps() {
            self.validate(step)?;
        }
        self.submission.begin()
    }

    /// Hand the booking to `backend`; returns the booking reference.
    pub fn complete_submit(&mut self, backend: &dyn BookingBackend, now_millis: u64) -> Result<String, ToolkitError> {
        let request = self.request();
        self.submission.complete(backend, &request, REFERENCE_PREFIX, now_millis, FAILURE_MESSAGE)
    }
}
