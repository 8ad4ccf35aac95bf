//! End-to-end behaviour of the booking API over the in-memory store.
//!
//! Requests pass through the full middleware stack so trace headers, error
//! envelopes, and status codes are exercised as clients see them.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test, web};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use hotel_booking::Trace;
use hotel_booking::domain::{BookingCommandService, BookingQueryService};
use hotel_booking::inbound::http::configure_api;
use hotel_booking::inbound::http::state::HttpState;
use hotel_booking::middleware::trace::TRACE_ID_HEADER;
use hotel_booking::outbound::memory::InMemoryBookingRepository;
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

/// Clock that moves forward one minute on every reading so bookings created
/// in sequence have distinct, increasing timestamps.
struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

#[fixture]
fn state() -> HttpState {
    let start = Utc
        .with_ymd_and_hms(2030, 6, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    let repo = Arc::new(InMemoryBookingRepository::new());
    HttpState::new(
        Arc::new(BookingCommandService::new(
            repo.clone(),
            Arc::new(SteppingClock::starting_at(start)),
        )),
        Arc::new(BookingQueryService::new(repo)),
    )
}

fn payload(guest_name: &str) -> Value {
    json!({
        "guestName": guest_name,
        "guestEmail": "guest@example.com",
        "guestPhone": "+44 (0)20 7946-0000",
        "roomId": "D-4",
        "checkInDate": "2030-06-10",
        "checkOutDate": "2030-06-12",
        "numberOfGuests": 2,
        "totalAmount": 300.0
    })
}

macro_rules! booking_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(Trace)
                .configure(configure_api),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn created_booking_is_retrievable_at_location(state: HttpState) {
    let app = booking_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/bookings")
            .set_json(payload("Mary Jackson"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_owned();
    let created: Value = test::read_body_json(res).await;
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["message"], "Booking created successfully");

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri(&location).to_request(),
    )
    .await;
    assert_eq!(fetched["id"], created["bookingId"]);
    assert_eq!(fetched["guestName"], "Mary Jackson");
    assert_eq!(fetched["totalAmount"], json!(300.0));
    assert_eq!(fetched["createdAt"], "2030-06-01T09:00:00Z");
}

#[rstest]
#[actix_web::test]
async fn rejected_booking_is_not_stored(state: HttpState) {
    let app = booking_app!(state);
    let mut body = payload("Christine Darden");
    body["checkOutDate"] = json!("2030-06-10");

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/bookings")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(
        error["errors"]["checkOutDate"],
        json!(["Check-out date must be after check-in date"])
    );
    assert!(error["traceId"].is_string());

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/bookings").to_request(),
    )
    .await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[actix_web::test]
async fn listing_is_newest_first_and_pages_consistently(state: HttpState) {
    let app = booking_app!(state);
    let guests = ["First", "Second", "Third", "Fourth", "Fifth", "Sixth"];
    for guest in guests {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/bookings")
                .set_json(payload(guest))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let all: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/bookings").to_request(),
    )
    .await;
    let names: Vec<&str> = all
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["guestName"].as_str())
        .collect();
    assert_eq!(names, ["Sixth", "Fifth", "Fourth", "Third", "Second", "First"]);

    let second: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/bookings?pageNumber=2&pageSize=4")
            .to_request(),
    )
    .await;
    assert_eq!(second["totalCount"], 6);
    assert_eq!(second["totalPages"], 2);
    assert_eq!(second["pageNumber"], 2);
    assert_eq!(second["pageSize"], 4);
    let page_names: Vec<&str> = second["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["guestName"].as_str())
        .collect();
    assert_eq!(page_names, ["Second", "First"]);

    let beyond: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/bookings?pageNumber=9&pageSize=4")
            .to_request(),
    )
    .await;
    assert_eq!(beyond["items"], json!([]));
    assert_eq!(beyond["totalCount"], 6);
}

#[rstest]
#[case("/api/bookings?pageNumber=0", "pageNumber")]
#[case("/api/bookings?pageSize=101", "pageSize")]
#[case("/api/bookings?pageSize=ten", "pageSize")]
#[actix_web::test]
async fn invalid_paging_is_rejected(
    state: HttpState,
    #[case] uri: &str,
    #[case] field: &str,
) {
    let app = booking_app!(state);

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(res).await;
    assert!(error["errors"][field].is_array(), "missing {field} error");
}

#[rstest]
#[actix_web::test]
async fn unknown_booking_reports_not_found(state: HttpState) {
    let app = booking_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/bookings/00000000-0000-0000-0000-000000000001")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "not_found");
    assert_eq!(
        error["message"],
        "Booking with ID 00000000-0000-0000-0000-000000000001 not found"
    );
}
