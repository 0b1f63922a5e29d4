//! Data model shared with the BookMeHere REST API.
//!
//! The backend owns every entity here; the frontend only deserializes what it
//! is sent and composes the booking/login payloads it posts back.

use serde::{Deserialize, Deserializer, Serialize};

pub type ServiceId = i64;
pub type MasterId = i64;
pub type BookingId = i64;

// =============================================================================
// Response Envelope
// =============================================================================

/// `{success, data?, error?, message?, count?}` wrapper around every response
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// Most specific human-readable reason the server gave, if any
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Prices and ratings arrive as JSON numbers or as numeric strings
/// (SQL `numeric` columns), depending on the backend route.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

/// Like [`number_or_string`], with `null` read as zero (unrated masters)
fn number_or_string_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(raw) => raw.into_f64(),
        None => Ok(0.0),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s.trim().parse::<f64>().map_err(E::custom),
        }
    }
}

/// Nullable columns come through as JSON `null`; `#[serde(default)]` alone
/// only covers a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Catalogue
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Minutes
    pub duration: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emoji: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub off: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkingHours {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WorkingHours {
    pub fn for_weekday(&self, day: chrono::Weekday) -> &DaySchedule {
        use chrono::Weekday::*;
        match day {
            Mon => &self.monday,
            Tue => &self.tuesday,
            Wed => &self.wednesday,
            Thu => &self.thursday,
            Fri => &self.friday,
            Sat => &self.saturday,
            Sun => &self.sunday,
        }
    }
}

/// A bookable professional
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Master {
    pub id: MasterId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "number_or_string_or_null")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_reviews: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub working_hours: WorkingHours,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// One bookable unit in a master's day. Recomputed per (master, date) query.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    /// Machine form, e.g. `10:00`
    pub time: String,
    /// Human form, e.g. `10:00 AM`
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
}

impl TimeSlot {
    pub fn label(&self) -> &str {
        if self.display.is_empty() {
            &self.time
        } else {
            &self.display
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BusinessSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    pub currency: String,
    pub currency_symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Shown until `/services/settings` answers (or if it never does)
impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            id: 1,
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            business_name: "BookMeHere".to_string(),
            business_phone: String::new(),
            business_email: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

// =============================================================================
// Bookings
// =============================================================================

/// Server-owned lifecycle of a booking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Unknown,
}

impl BookingStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }
}

/// A booking as listed by `GET /bookings`.
///
/// The list endpoint joins service/master names and may name the slot
/// `date`/`time` next to (or instead of) `booking_date`/`booking_time`.
/// Read the slot through [`Booking::slot_date`] and [`Booking::slot_time`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    #[serde(default)]
    pub service_id: Option<ServiceId>,
    #[serde(default)]
    pub master_id: Option<MasterId>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub master_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_time: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_guest: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Booking {
    pub fn status(&self) -> BookingStatus {
        BookingStatus::parse(&self.status)
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn slot_date(&self) -> &str {
        prefer_filled(&self.booking_date, self.date.as_deref())
    }

    pub fn slot_time(&self) -> &str {
        prefer_filled(&self.booking_time, self.time.as_deref())
    }
}

fn prefer_filled<'a>(primary: &'a str, fallback: Option<&'a str>) -> &'a str {
    if primary.trim().is_empty() {
        fallback.unwrap_or(primary)
    } else {
        primary
    }
}

/// How the customer wants to be contacted about the booking
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    Telegram,
    Viber,
    Messenger,
    Whatsapp,
    Sms,
    #[default]
    PhoneCall,
    Gmail,
}

impl ContactPreference {
    /// Order offered in the booking form
    pub const ALL: [ContactPreference; 7] = [
        ContactPreference::PhoneCall,
        ContactPreference::Sms,
        ContactPreference::Whatsapp,
        ContactPreference::Telegram,
        ContactPreference::Viber,
        ContactPreference::Messenger,
        ContactPreference::Gmail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactPreference::Telegram => "telegram",
            ContactPreference::Viber => "viber",
            ContactPreference::Messenger => "messenger",
            ContactPreference::Whatsapp => "whatsapp",
            ContactPreference::Sms => "sms",
            ContactPreference::PhoneCall => "phone_call",
            ContactPreference::Gmail => "gmail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactPreference::PhoneCall => "📞 Phone Call",
            ContactPreference::Sms => "💬 SMS",
            ContactPreference::Whatsapp => "📱 WhatsApp",
            ContactPreference::Telegram => "✈️ Telegram",
            ContactPreference::Viber => "💜 Viber",
            ContactPreference::Messenger => "💬 Messenger",
            ContactPreference::Gmail => "📧 Gmail",
        }
    }
}

/// Contact form state. Lives only for one pass through the wizard.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub contact_preference: ContactPreference,
}

impl CustomerData {
    pub fn has_required_contact(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Body of `POST /bookings`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    pub service_id: ServiceId,
    pub master_id: MasterId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub notes: String,
    pub contact_preference: ContactPreference,
}

/// Everything the confirmation page shows, handed over after a successful submit
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedBooking {
    pub service: Service,
    pub master: Master,
    pub date: String,
    pub time: String,
    pub customer: CustomerData,
}

// =============================================================================
// Login
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

/// User object returned by both login endpoints and persisted as the session
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("there")
    }
}

/// Login endpoints answer `{success, user?, error?, message?}` (no `data`)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_price_accepts_numeric_string() {
        let svc: Service = serde_json::from_value(json!({
            "id": 2, "name": "Beard trim", "duration": 45, "price": "20.00"
        }))
        .unwrap();
        assert_eq!(svc.price, 20.0);
        assert!(svc.is_active);
        assert_eq!(svc.description, "");
    }

    #[test]
    fn master_tolerates_missing_optional_fields() {
        let master: Master = serde_json::from_value(json!({
            "id": 7, "name": "Mia", "rating": 4.8, "total_reviews": 31,
            "skills": [{"id": 1, "name": "Fade", "emoji": "💈"}],
            "working_hours": {"monday": {"start": "09:00", "end": "18:00", "off": false}}
        }))
        .unwrap();
        assert_eq!(master.skills.len(), 1);
        assert_eq!(master.working_hours.monday.start, "09:00");
        assert!(master.working_hours.sunday.start.is_empty());
        assert!(master.services.is_none());
    }

    #[test]
    fn booking_slot_falls_back_to_short_names() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 11, "service_name": "Haircut", "master_name": "Mia",
            "date": "2025-06-01", "time": "10:00:00", "status": "Confirmed",
            "customer_name": "Ann", "customer_email": "ann@example.com",
            "customer_phone": "555", "notes": "", "created_at": "2025-05-20T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(booking.slot_date(), "2025-06-01");
        assert_eq!(booking.slot_time(), "10:00:00");
        assert_eq!(booking.status(), BookingStatus::Confirmed);
        assert_eq!(booking.notes(), None);
    }

    #[test]
    fn booking_with_both_slot_spellings_prefers_entity_fields() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 12, "booking_date": "2025-06-02", "booking_time": "11:00",
            "date": "2025-06-01", "time": "10:00", "status": "pending"
        }))
        .unwrap();
        assert_eq!(booking.slot_date(), "2025-06-02");
        assert_eq!(booking.slot_time(), "11:00");
    }

    #[test]
    fn null_columns_read_as_defaults() {
        let resp: ApiResponse<Vec<Service>> = serde_json::from_value(json!({
            "success": true,
            "data": [{
                "id": 1, "name": "A", "description": null, "duration": 30,
                "price": 10, "image_path": null, "created_at": null, "updated_at": null
            }]
        }))
        .unwrap();
        let services = resp.data.unwrap();
        assert_eq!(services[0].description, "");
        assert_eq!(services[0].created_at, "");

        let master: Master = serde_json::from_value(json!({
            "id": 7, "name": "Mia", "description": null, "rating": null,
            "skills": [{"id": 1, "name": "Fade", "emoji": null}]
        }))
        .unwrap();
        assert_eq!(master.description, "");
        assert_eq!(master.rating, 0.0);
        assert_eq!(master.skills[0].emoji, "");

        let booking: Booking = serde_json::from_value(json!({
            "id": 3, "customer_name": null, "customer_email": null,
            "customer_phone": null, "status": null, "booking_date": "2025-06-01",
            "booking_time": "10:00"
        }))
        .unwrap();
        assert_eq!(booking.customer_email, "");
        assert_eq!(booking.status(), BookingStatus::Unknown);
    }

    #[test]
    fn envelope_reason_prefers_error_over_message() {
        let resp: ApiResponse<Vec<Service>> = serde_json::from_value(json!({
            "success": false, "error": "Master is busy", "message": "Bad request"
        }))
        .unwrap();
        assert_eq!(resp.reason(), Some("Master is busy"));
        assert!(resp.data.is_none());

        let resp: ApiResponse<Vec<Service>> =
            serde_json::from_value(json!({"success": false, "error": ""})).unwrap();
        assert_eq!(resp.reason(), None);
    }

    #[test]
    fn contact_preference_wire_names() {
        assert_eq!(
            serde_json::to_value(ContactPreference::PhoneCall).unwrap(),
            json!("phone_call")
        );
        assert_eq!(
            ContactPreference::parse("whatsapp"),
            Some(ContactPreference::Whatsapp)
        );
        assert_eq!(ContactPreference::parse("fax"), None);
        assert_eq!(ContactPreference::default(), ContactPreference::PhoneCall);
    }

    #[test]
    fn customer_contact_requires_name_email_phone() {
        let mut customer = CustomerData {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "  ".into(),
            ..Default::default()
        };
        assert!(!customer.has_required_contact());
        customer.phone = "555-0100".into();
        assert!(customer.has_required_contact());
    }

    #[test]
    fn session_user_display_name_fallbacks() {
        let user = SessionUser {
            username: Some("user".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "user");
        assert_eq!(SessionUser::default().display_name(), "there");
    }
}
