//! Typed client for the BookMeHere REST API.
//!
//! One method per consumed endpoint. No caching, no retries: every call
//! issues exactly one request through the configured transport.

use std::rc::Rc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoints;
use super::error::ApiError;
use super::transport::{default_transport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::config::ClientConfig;
use crate::models::{
    ApiResponse, Booking, BusinessSettings, LoginRequest, LoginResponse, Master, MasterId,
    NewBooking, Service, ServiceId, SessionUser, TimeSlot,
};

/// Which login endpoint to call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginKind {
    Customer,
    Admin,
}

impl LoginKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            LoginKind::Customer => endpoints::USER_LOGIN,
            LoginKind::Admin => endpoints::ADMIN_LOGIN,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn HttpTransport>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl ApiClient {
    /// Client over the default transport for this target
    pub fn new(config: ClientConfig) -> Self {
        let transport = default_transport(config.timeout_ms);
        Self { config, transport }
    }

    pub fn with_transport(config: ClientConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an uploaded image path, resolved against the media host
    pub fn media_url(&self, path: &str) -> String {
        crate::display::media_url(&self.config.media_base(), path)
    }

    // =========================================================================
    // Catalogue
    // =========================================================================

    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_list(endpoints::SERVICES).await
    }

    pub async fn service_settings(&self) -> Result<BusinessSettings, ApiError> {
        self.get_data(endpoints::SERVICE_SETTINGS).await
    }

    pub async fn masters_for_service(&self, service_id: ServiceId) -> Result<Vec<Master>, ApiError> {
        self.get_list(&endpoints::masters_by_service(service_id))
            .await
    }

    pub async fn master_availability(
        &self,
        master_id: MasterId,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, ApiError> {
        self.get_list(&endpoints::master_availability(master_id, date))
            .await
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_list(endpoints::BOOKINGS).await
    }

    /// Submit a booking. Returns the stored record when the server echoes one.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Option<Booking>, ApiError> {
        let resp = self
            .send(HttpMethod::Post, endpoints::BOOKINGS, Some(booking))
            .await?;
        let envelope: ApiResponse<serde_json::Value> = decode_envelope(&resp)?;
        Ok(envelope
            .data
            .and_then(|value| serde_json::from_value::<Booking>(value).ok()))
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Exchange credentials for the user object the session is built from
    pub async fn login(
        &self,
        kind: LoginKind,
        credentials: &LoginRequest,
    ) -> Result<SessionUser, ApiError> {
        let resp = self
            .send(HttpMethod::Post, kind.endpoint(), Some(credentials))
            .await?;

        if !resp.is_success() {
            return Err(status_error(&resp));
        }
        let body: LoginResponse =
            serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            let message = body.error.or(body.message).filter(|m| !m.trim().is_empty());
            return Err(ApiError::Rejected { message });
        }
        Ok(body.user.unwrap_or_default())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp = self
            .send::<()>(HttpMethod::Post, endpoints::LOGOUT, None)
            .await?;
        if resp.is_success() {
            Ok(())
        } else {
            Err(status_error(&resp))
        }
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send::<()>(HttpMethod::Get, path, None).await?;
        let envelope: ApiResponse<T> = decode_envelope(&resp)?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode(format!("{} answered without data", path)))
    }

    /// List endpoints may leave `data` out when there is nothing to list
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let resp = self.send::<()>(HttpMethod::Get, path, None).await?;
        let envelope: ApiResponse<Vec<T>> = decode_envelope(&resp)?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn send<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = HttpRequest {
            method,
            url: self.config.api_url(path),
            body,
        };

        tracing::debug!("{} {}", method.as_str(), path);
        let result = self.transport.send(request).await;
        match &result {
            Ok(resp) if !resp.is_success() => {
                tracing::warn!("{} {} -> HTTP {}", method.as_str(), path, resp.status)
            }
            Err(e) => tracing::warn!("{} {} failed: {}", method.as_str(), path, e),
            _ => {}
        }
        result
    }
}

/// Read the `{success, data, error}` envelope, mapping failures onto [`ApiError`]
fn decode_envelope<T: DeserializeOwned>(resp: &HttpResponse) -> Result<ApiResponse<T>, ApiError> {
    if !resp.is_success() {
        return Err(status_error(resp));
    }
    let envelope: ApiResponse<T> =
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            message: envelope.reason().map(str::to_string),
        });
    }
    Ok(envelope)
}

fn status_error(resp: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&resp.body)
        .ok()
        .and_then(|env| env.reason().map(str::to_string));
    ApiError::Status {
        status: resp.status,
        message,
    }
}
