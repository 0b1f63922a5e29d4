//! Booking wizard state machine
//!
//! Steps unlock in order: service, master, date, time, then contact details.
//! Any upstream change clears everything below it. Operations that need a
//! fetch return an [`Effect`] for the caller to run; the results come back
//! through `apply_masters` / `apply_slots`, which drop answers for a
//! selection that has since changed.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{
    ConfirmedBooking, CustomerData, Master, MasterId, NewBooking, Service, ServiceId, TimeSlot,
};

use super::DATE_FORMAT;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Empty,
    ServiceChosen {
        service: Service,
    },
    MasterChosen {
        service: Service,
        master: Master,
    },
    DateChosen {
        service: Service,
        master: Master,
        date: NaiveDate,
    },
    TimeChosen {
        service: Service,
        master: Master,
        date: NaiveDate,
        time: String,
    },
}

impl Selection {
    pub fn service(&self) -> Option<&Service> {
        match self {
            Selection::Empty => None,
            Selection::ServiceChosen { service }
            | Selection::MasterChosen { service, .. }
            | Selection::DateChosen { service, .. }
            | Selection::TimeChosen { service, .. } => Some(service),
        }
    }

    pub fn master(&self) -> Option<&Master> {
        match self {
            Selection::MasterChosen { master, .. }
            | Selection::DateChosen { master, .. }
            | Selection::TimeChosen { master, .. } => Some(master),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Selection::DateChosen { date, .. } | Selection::TimeChosen { date, .. } => Some(*date),
            _ => None,
        }
    }

    pub fn time(&self) -> Option<&str> {
        match self {
            Selection::TimeChosen { time, .. } => Some(time),
            _ => None,
        }
    }
}

/// Fetch the caller must perform after a transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchMasters(ServiceId),
    FetchSlots { master_id: MasterId, date: NaiveDate },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("Please complete all booking steps")]
    IncompleteSteps,
    #[error("Please provide your contact information")]
    MissingContact,
    #[error("{0} is in the past")]
    PastDate(NaiveDate),
    #[error("service {0} is not offered")]
    UnknownService(ServiceId),
    #[error("master {0} does not offer this service")]
    UnknownMaster(MasterId),
    #[error("{0} is not available")]
    UnavailableSlot(String),
    #[error("choose a {0} first")]
    OutOfOrder(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    services: Vec<Service>,
    masters: Vec<Master>,
    slots: Vec<TimeSlot>,
    selection: Selection,
    customer: CustomerData,
    /// Service id from the route, applied once the catalogue arrives
    preselect: Option<ServiceId>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BookingWizard {
    pub fn new(preselect: Option<ServiceId>) -> Self {
        Self {
            services: Vec::new(),
            masters: Vec::new(),
            slots: Vec::new(),
            selection: Selection::Empty,
            customer: CustomerData::default(),
            preselect,
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn masters(&self) -> &[Master] {
        &self.masters
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn customer(&self) -> &CustomerData {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut CustomerData {
        &mut self.customer
    }

    /// Earliest date the picker may offer
    pub fn min_date(today: NaiveDate) -> String {
        today.format(DATE_FORMAT).to_string()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Store the catalogue. Applies a pending route preselection if it names
    /// a listed service.
    pub fn apply_services(&mut self, services: Vec<Service>) -> Option<Effect> {
        self.services = services;
        let wanted = self.preselect.take()?;
        match self.select_service(wanted) {
            Ok(effect) => Some(effect),
            Err(e) => {
                tracing::debug!("Ignoring preselected service: {}", e);
                None
            }
        }
    }

    pub fn select_service(&mut self, service_id: ServiceId) -> Result<Effect, WizardError> {
        let service = self
            .services
            .iter()
            .find(|s| s.id == service_id)
            .cloned()
            .ok_or(WizardError::UnknownService(service_id))?;

        self.masters.clear();
        self.slots.clear();
        self.selection = Selection::ServiceChosen { service };
        Ok(Effect::FetchMasters(service_id))
    }

    pub fn select_master(&mut self, master_id: MasterId) -> Result<(), WizardError> {
        let service = self
            .selection
            .service()
            .cloned()
            .ok_or(WizardError::OutOfOrder("service"))?;
        let master = self
            .masters
            .iter()
            .find(|m| m.id == master_id)
            .cloned()
            .ok_or(WizardError::UnknownMaster(master_id))?;

        self.slots.clear();
        self.selection = Selection::MasterChosen { service, master };
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<Effect, WizardError> {
        let (service, master) = match (self.selection.service(), self.selection.master()) {
            (Some(s), Some(m)) => (s.clone(), m.clone()),
            _ => return Err(WizardError::OutOfOrder("master")),
        };
        if date < today {
            return Err(WizardError::PastDate(date));
        }

        let master_id = master.id;
        self.slots.clear();
        self.selection = Selection::DateChosen {
            service,
            master,
            date,
        };
        Ok(Effect::FetchSlots { master_id, date })
    }

    /// The date field was emptied: back to the chosen master with no slots
    pub fn clear_date(&mut self) {
        let (service, master) = match (self.selection.service(), self.selection.master()) {
            (Some(s), Some(m)) => (s.clone(), m.clone()),
            _ => return,
        };
        self.slots.clear();
        self.selection = Selection::MasterChosen { service, master };
    }

    /// Pick a listed, available slot. On error the selection is unchanged.
    pub fn select_time(&mut self, time: &str) -> Result<(), WizardError> {
        let (service, master, date) = match &self.selection {
            Selection::DateChosen {
                service,
                master,
                date,
            }
            | Selection::TimeChosen {
                service,
                master,
                date,
                ..
            } => (service.clone(), master.clone(), *date),
            _ => return Err(WizardError::OutOfOrder("date")),
        };
        let available = self.slots.iter().any(|s| s.time == time && s.available);
        if !available {
            return Err(WizardError::UnavailableSlot(time.to_string()));
        }

        self.selection = Selection::TimeChosen {
            service,
            master,
            date,
            time: time.to_string(),
        };
        Ok(())
    }

    /// Accept a master list if it still answers the current service.
    /// Returns whether it was applied.
    pub fn apply_masters(&mut self, service_id: ServiceId, masters: Vec<Master>) -> bool {
        if self.selection.service().map(|s| s.id) != Some(service_id) {
            tracing::debug!("Dropping stale masters for service {}", service_id);
            return false;
        }
        self.masters = masters;
        true
    }

    /// Accept availability if it still answers the current (master, date)
    pub fn apply_slots(&mut self, master_id: MasterId, date: NaiveDate, slots: Vec<TimeSlot>) -> bool {
        let current = (
            self.selection.master().map(|m| m.id),
            self.selection.date(),
        );
        if current != (Some(master_id), Some(date)) {
            tracing::debug!("Dropping stale slots for master {} on {}", master_id, date);
            return false;
        }
        self.slots = slots;
        true
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Payload for `POST /bookings`, or why it can't be sent yet
    pub fn submission(&self) -> Result<NewBooking, WizardError> {
        let Selection::TimeChosen {
            service,
            master,
            date,
            time,
        } = &self.selection
        else {
            return Err(WizardError::IncompleteSteps);
        };
        if !self.customer.has_required_contact() {
            return Err(WizardError::MissingContact);
        }

        Ok(NewBooking {
            service_id: service.id,
            master_id: master.id,
            customer_name: self.customer.name.trim().to_string(),
            customer_email: self.customer.email.trim().to_string(),
            customer_phone: self.customer.phone.trim().to_string(),
            booking_date: date.format(DATE_FORMAT).to_string(),
            booking_time: time.clone(),
            notes: self.customer.notes.clone(),
            contact_preference: self.customer.contact_preference,
        })
    }

    /// What the confirmation page receives after a successful submit
    pub fn confirmation(&self) -> Option<ConfirmedBooking> {
        match &self.selection {
            Selection::TimeChosen {
                service,
                master,
                date,
                time,
            } => Some(ConfirmedBooking {
                service: service.clone(),
                master: master.clone(),
                date: date.format(DATE_FORMAT).to_string(),
                time: time.clone(),
                customer: self.customer.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactPreference;

    fn service(id: ServiceId, name: &str, price: f64, duration: u32) -> Service {
        Service {
            id,
            name: name.into(),
            price,
            duration,
            is_active: true,
            ..Default::default()
        }
    }

    fn master(id: MasterId, name: &str) -> Master {
        Master {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    fn slot(time: &str, available: bool) -> TimeSlot {
        TimeSlot {
            time: time.into(),
            display: String::new(),
            available,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Wizard with a date chosen and slots loaded
    fn at_date_step() -> BookingWizard {
        let mut w = BookingWizard::default();
        w.apply_services(vec![service(1, "A", 10.0, 30), service(2, "B", 20.0, 45)]);
        w.select_service(2).unwrap();
        w.apply_masters(2, vec![master(7, "M")]);
        w.select_master(7).unwrap();
        w.select_date(day(2025, 6, 1), day(2025, 5, 30)).unwrap();
        w.apply_slots(7, day(2025, 6, 1), vec![slot("09:00", false), slot("10:00", true)]);
        w
    }

    #[test]
    fn unavailable_slot_is_a_no_op() {
        let mut w = at_date_step();
        let before = w.selection().clone();

        assert_eq!(
            w.select_time("09:00"),
            Err(WizardError::UnavailableSlot("09:00".into()))
        );
        assert_eq!(w.selection(), &before);

        assert!(w.select_time("11:30").is_err());
        assert_eq!(w.selection(), &before);

        w.select_time("10:00").unwrap();
        assert_eq!(w.selection().time(), Some("10:00"));
    }

    #[test]
    fn changing_service_clears_everything_downstream() {
        let mut w = at_date_step();
        w.select_time("10:00").unwrap();

        let effect = w.select_service(1).unwrap();
        assert_eq!(effect, Effect::FetchMasters(1));
        assert_eq!(w.selection().service().map(|s| s.id), Some(1));
        assert!(w.selection().master().is_none());
        assert!(w.selection().date().is_none());
        assert!(w.selection().time().is_none());
        assert!(w.masters().is_empty());
        assert!(w.slots().is_empty());
    }

    #[test]
    fn changing_master_or_date_clears_time() {
        let mut w = at_date_step();
        w.select_time("10:00").unwrap();
        w.select_master(7).unwrap();
        assert!(w.selection().time().is_none());
        assert!(w.selection().date().is_none());
        assert!(w.slots().is_empty());

        let mut w = at_date_step();
        w.select_time("10:00").unwrap();
        let effect = w.select_date(day(2025, 6, 2), day(2025, 5, 30)).unwrap();
        assert_eq!(
            effect,
            Effect::FetchSlots {
                master_id: 7,
                date: day(2025, 6, 2)
            }
        );
        assert!(w.selection().time().is_none());
        assert!(w.slots().is_empty());
    }

    #[test]
    fn clearing_the_date_drops_time_and_late_slots() {
        let mut w = at_date_step();
        w.select_time("10:00").unwrap();

        w.clear_date();
        assert!(matches!(w.selection(), Selection::MasterChosen { .. }));
        assert!(w.selection().date().is_none());
        assert!(w.slots().is_empty());

        // A fetch for the cleared date answering late is ignored
        assert!(!w.apply_slots(7, day(2025, 6, 1), vec![slot("10:00", true)]));
        assert!(w.slots().is_empty());
    }

    #[test]
    fn past_dates_are_rejected_today_is_allowed() {
        let mut w = at_date_step();
        let today = day(2025, 6, 10);
        assert_eq!(
            w.select_date(day(2025, 6, 9), today),
            Err(WizardError::PastDate(day(2025, 6, 9)))
        );
        assert_eq!(w.selection().date(), Some(day(2025, 6, 1)));
        assert!(w.select_date(today, today).is_ok());
        assert_eq!(BookingWizard::min_date(today), "2025-06-10");
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut w = BookingWizard::default();
        w.apply_services(vec![service(1, "A", 10.0, 30)]);
        assert_eq!(w.select_master(7), Err(WizardError::OutOfOrder("service")));
        assert_eq!(
            w.select_date(day(2025, 6, 1), day(2025, 6, 1)),
            Err(WizardError::OutOfOrder("master"))
        );
        assert_eq!(w.select_time("10:00"), Err(WizardError::OutOfOrder("date")));

        w.select_service(1).unwrap();
        assert_eq!(w.select_master(99), Err(WizardError::UnknownMaster(99)));
        assert_eq!(w.select_service(5), Err(WizardError::UnknownService(5)));
    }

    #[test]
    fn submission_requires_every_step_and_contact_field() {
        let mut w = at_date_step();
        assert_eq!(w.submission(), Err(WizardError::IncompleteSteps));

        w.select_time("10:00").unwrap();
        w.customer_mut().name = "Ann".into();
        w.customer_mut().email = "ann@example.com".into();
        assert_eq!(w.submission(), Err(WizardError::MissingContact));

        w.customer_mut().phone = "555-0100".into();
        assert!(w.submission().is_ok());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut w = at_date_step();
        // Date changed twice; the first answer arrives last
        w.select_date(day(2025, 6, 2), day(2025, 5, 30)).unwrap();
        w.select_date(day(2025, 6, 3), day(2025, 5, 30)).unwrap();
        assert!(w.apply_slots(7, day(2025, 6, 3), vec![slot("12:00", true)]));
        assert!(!w.apply_slots(7, day(2025, 6, 2), vec![slot("09:00", true)]));
        assert_eq!(w.slots().len(), 1);
        assert_eq!(w.slots()[0].time, "12:00");

        w.select_service(1).unwrap();
        assert!(!w.apply_masters(2, vec![master(7, "M")]));
        assert!(w.masters().is_empty());
    }

    #[test]
    fn preselect_applies_once_services_arrive() {
        let mut w = BookingWizard::new(Some(2));
        let effect = w.apply_services(vec![service(1, "A", 10.0, 30), service(2, "B", 20.0, 45)]);
        assert_eq!(effect, Some(Effect::FetchMasters(2)));
        assert_eq!(w.selection().service().map(|s| s.name.as_str()), Some("B"));

        let mut unknown = BookingWizard::new(Some(42));
        assert_eq!(unknown.apply_services(vec![service(1, "A", 10.0, 30)]), None);
        assert_eq!(unknown.selection(), &Selection::Empty);
    }

    #[test]
    fn example_scenario_builds_payload_and_confirmation() {
        let mut w = BookingWizard::default();
        w.apply_services(vec![service(1, "A", 10.0, 30), service(2, "B", 20.0, 45)]);
        assert_eq!(w.select_service(2), Ok(Effect::FetchMasters(2)));
        assert!(w.apply_masters(2, vec![master(7, "M")]));
        w.select_master(7).unwrap();
        let date = NaiveDate::parse_from_str("2025-06-01", DATE_FORMAT).unwrap();
        assert_eq!(
            w.select_date(date, day(2025, 6, 1)),
            Ok(Effect::FetchSlots { master_id: 7, date })
        );
        w.apply_slots(7, date, vec![slot("09:00", false), slot("10:00", true)]);
        assert!(w.select_time("09:00").is_err());
        w.select_time("10:00").unwrap();

        *w.customer_mut() = CustomerData {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "555-0100".into(),
            notes: "Window seat".into(),
            contact_preference: ContactPreference::Telegram,
        };

        let payload = w.submission().unwrap();
        assert_eq!(payload.service_id, 2);
        assert_eq!(payload.master_id, 7);
        assert_eq!(payload.booking_date, "2025-06-01");
        assert_eq!(payload.booking_time, "10:00");
        assert_eq!(payload.contact_preference, ContactPreference::Telegram);

        let confirmed = w.confirmation().unwrap();
        assert_eq!(confirmed.service.name, "B");
        assert_eq!(confirmed.master.name, "M");
        assert_eq!(confirmed.date, "2025-06-01");
        assert_eq!(confirmed.time, "10:00");
        assert_eq!(confirmed.customer.notes, "Window seat");
    }
}
