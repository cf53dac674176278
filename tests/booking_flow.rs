//! Сквозной тест API: регистрация, выбор мест, подтверждение и просмотр
//! бронирования через собранный axum-роутер, без реального сокета.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use cineseat::config::{AppConfig, BookingConfig, Config, MockConfig};
use cineseat::{controllers, AppState};

fn test_state() -> Arc<AppState> {
    AppState::new(Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "warn".to_string(),
        },
        mock: MockConfig::instant(),
        booking: BookingConfig {
            max_seats_per_booking: 8,
            session_ttl_minutes: 30,
        },
    })
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", controllers::routes())
        .with_state(state)
}

fn basic_auth(email: &str, password: &str) -> String {
    format!(
        "Basic {}",
        general_purpose::STANDARD.encode(format!("{}:{}", email, password))
    )
}

const JOHN: (&str, &str) = ("john@example.com", "password123");
const JANE: (&str, &str) = ("jane@example.com", "password123");

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str, auth: Option<(&str, &str)>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some((email, password)) = auth {
        builder = builder.header(header::AUTHORIZATION, basic_auth(email, password));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, auth: Option<(&str, &str)>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some((email, password)) = auth {
        builder = builder.header(header::AUTHORIZATION, basic_auth(email, password));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// Цена по категории, в центах - как в прайсе сервиса
fn price_cents(seat_type: &str) -> i64 {
    match seat_type {
        "premium" => 16_99,
        "accessible" => 12_99,
        _ => 13_99,
    }
}

#[tokio::test]
async fn catalog_endpoints_serve_seeded_data() {
    let app = app(test_state());

    let (status, movies) = send(&app, get("/api/movies", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.as_array().unwrap().len(), 6);

    let (status, movie) = send(&app, get("/api/movies/1", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie["title"], "Inception");

    let (status, _) = send(&app, get("/api/movies/999", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, showtimes) =
        send(&app, get("/api/movies/1/showtimes?locationId=1", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(showtimes.as_array().unwrap().len(), 3);

    let (status, locations) = send(&app, get("/api/locations", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(locations.as_array().unwrap().len(), 5);

    let (status, seats) = send(&app, get("/api/showtimes/1/seats", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seats.as_array().unwrap().len(), 96);
}

#[tokio::test]
async fn register_and_login() {
    let app = app(test_state());

    let (status, profile) = send(
        &app,
        send_json(
            "POST",
            "/api/auth/register",
            None,
            &json!({ "name": "New User", "email": "new@example.com", "password": "secret" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(profile["name"], "New User");
    assert!(profile.get("password").is_none());

    // Повторная регистрация на тот же email отклоняется
    let (status, _) = send(
        &app,
        send_json(
            "POST",
            "/api/auth/register",
            None,
            &json!({ "name": "Impostor", "email": "new@example.com", "password": "x" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "new@example.com", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, me) = send(&app, get("/api/auth/me", Some(("new@example.com", "secret")))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "new@example.com");
}

#[tokio::test]
async fn full_booking_flow_with_ownership_check() {
    let app = app(test_state());

    // Без авторизации сессию не открыть
    let open_body = json!({ "movieId": "1", "showtimeId": "1" });
    let (status, _) = send(
        &app,
        send_json("POST", "/api/booking-sessions", None, &open_body),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Несуществующий фильм - NotFound
    let (status, _) = send(
        &app,
        send_json(
            "POST",
            "/api/booking-sessions",
            Some(JOHN),
            &json!({ "movieId": "999", "showtimeId": "1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Открываем сессию
    let (status, session) = send(
        &app,
        send_json("POST", "/api/booking-sessions", Some(JOHN), &open_body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["state"], "selecting");
    let session_id = session["sessionId"].as_str().unwrap().to_string();
    let seats = session["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 96);

    // Берем первые два свободных места из карты (она уже в порядке ряд/номер)
    let chosen: Vec<&Value> = seats
        .iter()
        .filter(|s| s["isAvailable"].as_bool().unwrap())
        .take(2)
        .collect();
    assert_eq!(chosen.len(), 2, "a fresh map should have available seats");
    let expected_cents: i64 = chosen
        .iter()
        .map(|s| price_cents(s["type"].as_str().unwrap()))
        .sum();

    let toggle_uri = format!("/api/booking-sessions/{}/seats", session_id);
    for seat in &chosen {
        let (status, toggled) = send(
            &app,
            send_json(
                "PATCH",
                &toggle_uri,
                Some(JOHN),
                &json!({ "seatId": seat["id"] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled["outcome"], "added");
    }

    // Чужое или несуществующее место молча игнорируется
    let (status, toggled) = send(
        &app,
        send_json("PATCH", &toggle_uri, Some(JOHN), &json!({ "seatId": "1-Z99" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["outcome"], "ignored");
    assert_eq!(toggled["selected"].as_array().unwrap().len(), 2);
    let total = toggled["total"].as_f64().unwrap();
    assert!((total - expected_cents as f64 / 100.0).abs() < 1e-9);

    // Джейн не может трогать сессию Джона
    let (status, _) = send(
        &app,
        send_json("PATCH", &toggle_uri, Some(JANE), &json!({ "seatId": "1-B5" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Подтверждаем
    let confirm_uri = format!("/api/booking-sessions/{}/confirm", session_id);
    let (status, confirmed) = send(
        &app,
        send_json("POST", &confirm_uri, Some(JOHN), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let booking_id = confirmed["id"].as_str().unwrap().to_string();
    let code = confirmed["confirmationCode"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    // Сессия закрыта - повторное подтверждение невозможно
    let (status, _) = send(
        &app,
        send_json("POST", &confirm_uri, Some(JOHN), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Владелец видит подтверждение с теми же местами и суммой
    let confirmation_uri = format!("/api/bookings/{}", booking_id);
    let (status, view) = send(&app, get(&confirmation_uri, Some(JOHN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["movie"]["title"], "Inception");
    let view_seat_ids: Vec<&str> = view["seats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    let chosen_ids: Vec<&str> = chosen.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(view_seat_ids, chosen_ids);
    let view_total = view["booking"]["totalAmount"].as_f64().unwrap();
    assert!((view_total - expected_cents as f64 / 100.0).abs() < 1e-9);

    // Чужому пользователю - отказ без содержимого
    let (status, denied) = send(&app, get(&confirmation_uri, Some(JANE))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(denied["error"]["code"], "ACCESS_DENIED");
    assert!(denied.get("booking").is_none());

    // Список бронирований: у Джона одно, у Джейн пусто
    let (status, johns) = send(&app, get("/api/bookings", Some(JOHN))).await;
    assert_eq!(status, StatusCode::OK);
    let johns = johns.as_array().unwrap();
    assert_eq!(johns.len(), 1);
    assert_eq!(johns[0]["movie"]["title"], "Inception");

    let (status, janes) = send(&app, get("/api/bookings", Some(JANE))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(janes.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn clear_and_abandon_session() {
    let app = app(test_state());
    let open_body = json!({ "movieId": "2", "showtimeId": "6" });

    let (status, session) = send(
        &app,
        send_json("POST", "/api/booking-sessions", Some(JOHN), &open_body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = session["sessionId"].as_str().unwrap().to_string();

    let seat_id = session["seats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["isAvailable"].as_bool().unwrap())
        .map(|s| s["id"].clone())
        .unwrap();

    let toggle_uri = format!("/api/booking-sessions/{}/seats", session_id);
    let (_, toggled) = send(
        &app,
        send_json("PATCH", &toggle_uri, Some(JOHN), &json!({ "seatId": seat_id })),
    )
    .await;
    assert_eq!(toggled["selected"].as_array().unwrap().len(), 1);

    // Сброс выбора
    let clear = Request::builder()
        .method("DELETE")
        .uri(&toggle_uri)
        .header(header::AUTHORIZATION, basic_auth(JOHN.0, JOHN.1))
        .body(Body::empty())
        .unwrap();
    let (status, cleared) = send(&app, clear).await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["selected"].as_array().unwrap().is_empty());

    // Пустой выбор нельзя подтвердить
    let confirm_uri = format!("/api/booking-sessions/{}/confirm", session_id);
    let (status, rejected) = send(
        &app,
        send_json("POST", &confirm_uri, Some(JOHN), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected["error"]["code"], "VALIDATION_ERROR");

    // Отказ от сессии
    let abandon = Request::builder()
        .method("DELETE")
        .uri(format!("/api/booking-sessions/{}", session_id))
        .header(header::AUTHORIZATION, basic_auth(JOHN.0, JOHN.1))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, abandon).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        send_json("POST", &confirm_uri, Some(JOHN), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
