//! Mock BookMeHere backend for testing
//!
//! Serves the REST API under /api with the `{success, data, error}` envelope.
//! Seeded with two services, one master and a small slot grid; bookings
//! taken through POST /api/bookings mark their slot unavailable.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const SERVICE_A: i64 = 1;
pub const SERVICE_B: i64 = 2;
pub const MASTER_M: i64 = 7;

/// Slots offered for every date; 09:00 starts out taken
const SLOT_TIMES: [&str; 3] = ["09:00", "10:00", "11:00"];

struct MockState {
    /// `(master_id, date, time)` already booked
    taken: HashSet<(i64, String, String)>,
    bookings: Vec<Value>,
    /// Every request as `METHOD /path` (without the /api prefix)
    requests: Vec<String>,
    next_booking_id: i64,
}

type Shared = Arc<RwLock<MockState>>;

pub struct MockBookMeHere {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockBookMeHere {
    /// Start the mock on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockState {
            taken: HashSet::new(),
            bookings: Vec::new(),
            requests: Vec::new(),
            next_booking_id: 100,
        }));

        let app = Router::new()
            .route("/api/services", get(list_services))
            .route("/api/services/settings", get(settings))
            .route("/api/masters/service/{service_id}", get(masters_for_service))
            .route("/api/masters/{master_id}/availability/{date}", get(availability))
            .route("/api/bookings", get(list_bookings).post(create_booking))
            .route("/api/simple-admin/login", post(admin_login))
            .route("/api/simple-admin/user-login", post(user_login))
            .route("/api/simple-admin/logout", post(logout))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// API base URL to hand to `ClientConfig::with_api_base_url`
    pub fn api_base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub async fn requests(&self) -> Vec<String> {
        self.state.read().await.requests.clone()
    }

    pub async fn bookings(&self) -> Vec<Value> {
        self.state.read().await.bookings.clone()
    }

    /// Mark a slot as booked by someone else
    pub async fn take_slot(&self, master_id: i64, date: &str, time: &str) {
        self.state
            .write()
            .await
            .taken
            .insert((master_id, date.to_string(), time.to_string()));
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

async fn record(state: &Shared, line: String) {
    state.write().await.requests.push(line);
}

fn ok(data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "success": true, "data": data })))
}

fn fail(status: StatusCode, error: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "error": error })))
}

fn service(id: i64) -> Value {
    match id {
        SERVICE_A => json!({
            "id": SERVICE_A, "name": "Haircut", "description": "Classic cut",
            "duration": 30, "price": "10.00", "image_path": "/uploads/haircut.jpg",
            "is_active": true, "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T00:00:00Z"
        }),
        _ => json!({
            "id": SERVICE_B, "name": "Beard Trim", "description": "",
            "duration": 45, "price": 20, "image_path": null,
            "is_active": true, "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }),
    }
}

fn master() -> Value {
    json!({
        "id": MASTER_M, "name": "Maria", "description": "Senior barber",
        "image_path": "/uploads/maria.jpg", "rating": "4.8", "total_reviews": 31,
        "working_hours": {
            "monday": { "start": "09:00", "end": "18:00" },
            "sunday": { "off": true }
        },
        "skills": [
            { "id": 1, "name": "Fades", "emoji": "✂️" },
            { "id": 2, "name": "Beards", "emoji": "🧔" }
        ],
        "is_active": true
    })
}

async fn list_services(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    record(&state, "GET /services".into()).await;
    let data = json!([service(SERVICE_A), service(SERVICE_B)]);
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": data, "count": 2 })),
    )
}

async fn settings(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    record(&state, "GET /services/settings".into()).await;
    ok(json!({
        "id": 1, "currency": "EUR", "currency_symbol": "€",
        "business_name": "Mock Barbers", "business_phone": "+100", "business_email": "hi@mock.test"
    }))
}

async fn masters_for_service(
    State(state): State<Shared>,
    Path(service_id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    record(&state, format!("GET /masters/service/{}", service_id)).await;
    match service_id {
        SERVICE_A => ok(json!([])),
        SERVICE_B => ok(json!([master()])),
        _ => fail(StatusCode::NOT_FOUND, "Service not found"),
    }
}

async fn availability(
    State(state): State<Shared>,
    Path((master_id, date)): Path<(i64, String)>,
) -> (StatusCode, Json<Value>) {
    record(&state, format!("GET /masters/{}/availability/{}", master_id, date)).await;
    if master_id != MASTER_M {
        return fail(StatusCode::NOT_FOUND, "Master not found");
    }
    let st = state.read().await;
    let slots: Vec<Value> = SLOT_TIMES
        .iter()
        .map(|time| {
            let booked = *time == "09:00"
                || st
                    .taken
                    .contains(&(master_id, date.clone(), time.to_string()));
            let hour: u32 = time[..2].parse().unwrap();
            json!({
                "time": time,
                "display": format!("{:02}:00 {}", if hour > 12 { hour - 12 } else { hour }, if hour >= 12 { "PM" } else { "AM" }),
                "available": !booked
            })
        })
        .collect();
    ok(json!(slots))
}

async fn list_bookings(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    record(&state, "GET /bookings".into()).await;
    let st = state.read().await;
    let count = st.bookings.len();
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": st.bookings, "count": count })),
    )
}

async fn create_booking(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST /bookings".into()).await;

    let field = |name: &str| body.get(name).and_then(Value::as_str).unwrap_or("").to_string();
    let required = [
        "customer_name",
        "customer_email",
        "customer_phone",
        "booking_date",
        "booking_time",
    ];
    if required.iter().any(|name| field(name).trim().is_empty()) {
        return fail(StatusCode::BAD_REQUEST, "Missing required fields");
    }
    let master_id = body.get("master_id").and_then(Value::as_i64).unwrap_or(0);
    let service_id = body.get("service_id").and_then(Value::as_i64).unwrap_or(0);
    let key = (master_id, field("booking_date"), field("booking_time"));

    let mut st = state.write().await;
    if key.2 == "09:00" || st.taken.contains(&key) {
        return fail(StatusCode::CONFLICT, "Time slot is no longer available");
    }
    st.taken.insert(key);

    let id = st.next_booking_id;
    st.next_booking_id += 1;
    let booking = json!({
        "id": id,
        "service_id": service_id,
        "master_id": master_id,
        "customer_name": field("customer_name"),
        "customer_email": field("customer_email"),
        "customer_phone": field("customer_phone"),
        "booking_date": field("booking_date"),
        "booking_time": field("booking_time"),
        "status": "pending",
        "notes": field("notes"),
        "contact_preference": field("contact_preference"),
        "is_guest": true,
        "created_at": "2025-05-30T12:00:00Z"
    });

    // The list endpoint joins names and uses date/time
    let mut listed = booking.clone();
    listed["service_name"] = json!(if service_id == SERVICE_A { "Haircut" } else { "Beard Trim" });
    listed["master_name"] = json!("Maria");
    listed["date"] = listed["booking_date"].clone();
    listed["time"] = listed["booking_time"].clone();
    st.bookings.push(listed);

    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": booking, "message": "Booking created successfully" })),
    )
}

fn check_credentials(body: &Value, username: &str, password: &str) -> bool {
    body.get("username").and_then(Value::as_str) == Some(username)
        && body.get("password").and_then(Value::as_str) == Some(password)
}

async fn admin_login(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST /simple-admin/login".into()).await;
    if check_credentials(&body, "admin", "admin123") {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Login successful",
                "user": { "id": 1, "username": "admin", "email": "admin@bookmehere.test", "role": "admin" }
            })),
        )
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn user_login(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST /simple-admin/user-login".into()).await;
    if check_credentials(&body, "user", "user123") {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "user": { "id": 2, "username": "user", "name": "Jane Doe", "email": "jane@example.com", "role": "user" }
            })),
        )
    } else if check_credentials(&body, "locked", "locked123") {
        // 200 with success=false, as some backends answer
        (
            StatusCode::OK,
            Json(json!({ "success": false, "message": "Account locked" })),
        )
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn logout(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    record(&state, "POST /simple-admin/logout".into()).await;
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Logged out" })),
    )
}
