//! HTTP transports.
//!
//! The browser build talks through `window.fetch`; native builds (SSR and the
//! probe CLI) use reqwest. Both hand back the raw status and body so the
//! client can read error envelopes from non-2xx answers.

use async_trait::async_trait;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body (POST only)
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request, no retries. `?Send` because the browser futures aren't.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =============================================================================
// Browser fetch
// =============================================================================

#[cfg(target_arch = "wasm32")]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let transport_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{:?}", e));

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("No window".into()))?;

        let headers = Headers::new().map_err(transport_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport_err)?;

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_headers(&headers);
        if let Some(body) = &request.body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(transport_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport_err)?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Transport("Not a Response".into()))?;

        let text = JsFuture::from(resp.text().map_err(transport_err)?)
            .await
            .map_err(transport_err)?;

        Ok(HttpResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

// =============================================================================
// Native reqwest
// =============================================================================

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl ReqwestTransport {
    pub fn new(timeout_ms: u64) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        let builder = match request.body {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body),
            None => builder,
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =============================================================================
// Fallback
// =============================================================================

/// Used when no HTTP stack is compiled in; every call fails as a transport error
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl HttpTransport for UnavailableTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport(format!(
            "no HTTP transport available for {} {}",
            request.method.as_str(),
            request.url
        )))
    }
}

/// Transport for the current target
pub fn default_transport(timeout_ms: u64) -> std::rc::Rc<dyn HttpTransport> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = timeout_ms;
        std::rc::Rc::new(FetchTransport)
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    {
        match ReqwestTransport::new(timeout_ms) {
            Ok(transport) => std::rc::Rc::new(transport),
            Err(e) => {
                tracing::warn!("HTTP client unavailable: {}", e);
                std::rc::Rc::new(UnavailableTransport)
            }
        }
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        let _ = timeout_ms;
        std::rc::Rc::new(UnavailableTransport)
    }
}
