//! Endpoint templates for the BookMeHere REST API.
//!
//! Paths are relative to [`ClientConfig::api_base_url`](crate::config::ClientConfig).

use chrono::NaiveDate;

use crate::models::{MasterId, ServiceId};

pub const SERVICES: &str = "/services";
pub const SERVICE_SETTINGS: &str = "/services/settings";
pub const BOOKINGS: &str = "/bookings";
pub const ADMIN_LOGIN: &str = "/simple-admin/login";
pub const USER_LOGIN: &str = "/simple-admin/user-login";
pub const LOGOUT: &str = "/simple-admin/logout";

pub fn masters_by_service(service_id: ServiceId) -> String {
    format!("/masters/service/{}", service_id)
}

pub fn master_availability(master_id: MasterId, date: NaiveDate) -> String {
    format!(
        "/masters/{}/availability/{}",
        master_id,
        date.format(crate::booking::DATE_FORMAT)
    )
}

/// Every call this frontend makes, as `METHOD /pattern`.
/// Kept in sync with tests/fixtures/api_endpoints.txt.
pub const CONTRACT: &[&str] = &[
    "GET /bookings",
    "GET /masters/:masterId/availability/:date",
    "GET /masters/service/:serviceId",
    "GET /services",
    "GET /services/settings",
    "POST /bookings",
    "POST /simple-admin/login",
    "POST /simple-admin/logout",
    "POST /simple-admin/user-login",
];
