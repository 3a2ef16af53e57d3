//! Service booking: package and add-ons, location and slot, customer, confirmation.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use serde_json::json;
use time::Date;

use super::wizard::{Advance, StepMachine};
use super::{BookingBackend, BookingRequest, Submission};
use crate::calendar;
use crate::catalog::{ServiceLocation, ServicePackage};
use crate::error::ToolkitError;
use crate::input;
use crate::module::ToolKind;

pub const REFERENCE_PREFIX: &str = "SRV-";

pub const STEP_TITLES: [&str; 4] = ["Service Type", "Location & Date", "Customer Info", "Confirmation"];

/// Days offered in the date picker, starting tomorrow.
pub const BOOKABLE_DAYS: usize = 14;

pub const FAILURE_MESSAGE: &str = "Booking failed. Please try again or contact us directly.";

const FIRST_SLOT_HOUR: u8 = 9;
const LAST_SLOT_HOUR: u8 = 17;

/// Optional extras priced on top of the package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddOn {
    Pickup,
    Loaner,
    Wash,
}

impl AddOn {
    pub const ALL: [Self; 3] = [Self::Pickup, Self::Loaner, Self::Wash];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Loaner => "loaner",
            Self::Wash => "wash",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pickup => "Pickup & Delivery",
            Self::Loaner => "Loaner E-Bike",
            Self::Wash => "Professional Wash",
        }
    }

    /// CHF.
    #[must_use]
    pub fn price(self) -> u32 {
        match self {
            Self::Pickup => 25,
            Self::Loaner => 15,
            Self::Wash => 20,
        }
    }

    /// Checkbox label, e.g. `Loaner E-Bike (+CHF 15/day)`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Loaner => format!("{} (+CHF {}/day)", self.name(), self.price()),
            _ => format!("{} (+CHF {})", self.name(), self.price()),
        }
    }
}

/// `09:00` to `16:30` in half-hour steps.
#[must_use]
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR..LAST_SLOT_HOUR)
        .flat_map(|hour| [0, 30].map(|minute| format!("{hour:02}:{minute:02}")))
        .collect()
}

/// Customer fields collected on step 3.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bike_model: String,
    /// `YYYY-MM` from a month input.
    pub purchase_date: String,
    pub issues: String,
    pub newsletter: bool,
}

impl CustomerInfo {
    /// Required fields with the words used in the validation message.
    fn required(&self) -> [(&'static str, &str); 4] {
        [
            ("first name", self.first_name.as_str()),
            ("last name", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }
}

/// Step 4 preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceSummary {
    pub package_name: String,
    pub package_price: u32,
    pub duration_minutes: u32,
    pub add_ons: Vec<(String, u32)>,
    pub location_name: String,
    pub location_address: String,
    pub location_phone: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub bike_model: Option<String>,
    pub total_price: u32,
}

#[derive(Clone, Debug)]
pub struct ServiceWizard {
    steps: StepMachine,
    submission: Submission,
    packages: Vec<ServicePackage>,
    locations: Vec<ServiceLocation>,
    package: Option<String>,
    add_ons: Vec<AddOn>,
    location: Option<String>,
    date: Option<Date>,
    time: Option<String>,
    pub customer: CustomerInfo,
    pub terms_accepted: bool,
}

impl ServiceWizard {
    #[must_use]
    pub fn new(packages: Vec<ServicePackage>, locations: Vec<ServiceLocation>) -> Self {
        Self {
            steps: StepMachine::default(),
            submission: Submission::default(),
            packages,
            locations,
            package: None,
            add_ons: Vec::new(),
            location: None,
            date: None,
            time: None,
            customer: CustomerInfo::default(),
            terms_accepted: false,
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
    pub fn packages(&self) -> &[ServicePackage] {
        &self.packages
    }

    #[must_use]
    pub fn package(&self) -> Option<&ServicePackage> {
        let key = self.package.as_deref()?;
        self.packages.iter().find(|package| package.key == key)
    }

    #[must_use]
    pub fn location(&self) -> Option<&ServiceLocation> {
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
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Choose a package. A chosen location that does not offer it is dropped.
    pub fn select_package(&mut self, key: &str) -> Result<(), ToolkitError> {
        if !self.packages.iter().any(|package| package.key == key) {
            return Err(ToolkitError::validation("Please select a service package."));
        }
        self.package = Some(key.to_owned());
        if self.location().is_some_and(|location| !location.offers(key)) {
            self.location = None;
        }
        Ok(())
    }

    /// Add or remove an extra; selection order is kept.
    pub fn toggle_add_on(&mut self, add_on: AddOn, enabled: bool) {
        self.add_ons.retain(|a| *a != add_on);
        if enabled {
            self.add_ons.push(add_on);
        }
    }

    /// Locations offering the chosen package; every location before one is chosen.
    #[must_use]
    pub fn available_locations(&self) -> Vec<&ServiceLocation> {
        self.locations
            .iter()
            .filter(|location| self.package.as_deref().is_none_or(|package| location.offers(package)))
            .collect()
    }

    pub fn select_location(&mut self, key: &str) -> Result<(), ToolkitError> {
        if !self.available_locations().iter().any(|location| location.key == key) {
            return Err(ToolkitError::validation("Please select a location, date, and time."));
        }
        self.location = Some(key.to_owned());
        Ok(())
    }

    /// Dates offered in the picker.
    #[must_use]
    pub fn dates(today: Date) -> Vec<Date> {
        calendar::upcoming_dates(today, BOOKABLE_DAYS)
    }

    pub fn select_date(&mut self, date: Date, today: Date) -> Result<(), ToolkitError> {
        if !Self::dates(today).contains(&date) {
            return Err(ToolkitError::validation("Please select a location, date, and time."));
        }
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), ToolkitError> {
        if !time_slots().iter().any(|s| s == slot) {
            return Err(ToolkitError::validation("Please select a location, date, and time."));
        }
        self.time = Some(slot.to_owned());
        Ok(())
    }

    /// Package price plus every selected add-on, in CHF.
    #[must_use]
    pub fn total_price(&self) -> u32 {
        let package = self.package().map_or(0, |package| package.price);
        package + self.add_ons.iter().map(|add_on| add_on.price()).sum::<u32>()
    }

    /// Check the fields of `step`.
    pub fn validate(&self, step: u8) -> Result<(), ToolkitError> {
        match step {
            1 if self.package().is_none() => Err(ToolkitError::validation("Please select a service package.")),
            2 if self.location().is_none() || self.date.is_none() || self.time.is_none() => {
                Err(ToolkitError::validation("Please select a location, date, and time."))
            }
            3 => {
                if let Some((words, _)) = self.customer.required().into_iter().find(|(_, value)| input::is_blank(value)) {
                    return Err(ToolkitError::validation(format!("Please fill in {words}.")));
                }
                if !input::is_valid_email(self.customer.email.trim()) {
                    return Err(ToolkitError::validation("Please enter a valid email address."));
                }
                Ok(())
            }
            4 if !self.terms_accepted => Err(ToolkitError::validation("Please accept the terms and conditions.")),
            _ => Ok(()),
        }
    }

    /// Advance; on the last step a successful validation also starts submitting.
    pub fn next(&mut self) -> Result<Advance, ToolkitError> {
        let checked = self.validate(self.steps.step());
        let advance = self.steps.next(|_| checked)?;
        if advance == Advance::ReadyToSubmit {
            self.begin_submit()?;
        }
        Ok(advance)
    }

    pub fn previous(&mut self) -> u8 {
        self.steps.previous()
    }

    #[must_use]
    pub fn summary(&self) -> ServiceSummary {
        let package = self.package();
        let location = self.location();
        let c = &self.customer;
        let bike_model = c.bike_model.trim();
        ServiceSummary {
            package_name: package.map(|p| p.name.clone()).unwrap_or_default(),
            package_price: package.map_or(0, |p| p.price),
            duration_minutes: package.map_or(0, |p| p.duration),
            add_ons: self.add_ons.iter().map(|a| (a.name().to_owned(), a.price())).collect(),
            location_name: location.map(|l| l.name.clone()).unwrap_or_default(),
            location_address: location.map(|l| l.address.clone()).unwrap_or_default(),
            location_phone: location.map(|l| l.phone.clone()).unwrap_or_default(),
            date: self.date.map(calendar::long_date).unwrap_or_default(),
            time: self.time.clone().unwrap_or_default(),
            customer_name: format!("{} {}", c.first_name.trim(), c.last_name.trim()),
            email: c.email.trim().to_owned(),
            phone: c.phone.trim().to_owned(),
            bike_model: (!bike_model.is_empty()).then(|| bike_model.to_owned()),
            total_price: self.total_price(),
        }
    }

    fn request(&self) -> BookingRequest {
        let c = &self.customer;
        BookingRequest {
            kind: ToolKind::ServiceBooking,
            payload: json!({
                "service": self.package,
                "additionalServices": self.add_ons.iter().map(|a| a.key()).collect::<Vec<_>>(),
                "location": self.location,
                "date": self.date.map(calendar::iso_date),
                "time": self.time,
                "customer": {
                    "firstName": c.first_name.trim(),
                    "lastName": c.last_name.trim(),
                    "email": c.email.trim(),
                    "phone": c.phone.trim(),
                    "bikeModel": c.bike_model.trim(),
                    "purchaseDate": c.purchase_date,
                    "issues": c.issues.trim(),
                    "newsletter": c.newsletter,
                },
                "totalPrice": self.total_price(),
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
