//! Resource client behavior against an in-process stub backend: payload
//! normalization, bearer-token attachment, CRUD round trips, and verbatim
//! error-message surfacing.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use listwise::prelude::*;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc as StdArc, Mutex};

type Db = StdArc<Mutex<Vec<Value>>>;

const TOKEN: &str = "stub-bearer-token";

fn seed() -> Vec<Value> {
    vec![
        json!({"id": 1, "vehicle_number": "MH-12-AB-1234", "location": "Kohima"}),
        json!({"id": 2, "vehicle_number": "NL-01-K-7777", "location": "Dimapur"}),
    ]
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Token missing or invalid"})),
    )
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

async fn list_vehicles(State(db): State<Db>) -> Json<Value> {
    let rows = db.lock().unwrap().clone();
    Json(Value::Array(rows))
}

async fn list_vehicles_wrapped(State(db): State<Db>) -> Json<Value> {
    let rows = db.lock().unwrap().clone();
    Json(json!({"data": rows}))
}

async fn get_vehicle(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    db.lock()
        .unwrap()
        .iter()
        .find(|row| row["id"] == json!(id))
        .cloned()
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Vehicle record not found"})),
        ))
}

async fn create_vehicle(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    let mut rows = db.lock().unwrap();
    let next_id = rows.len() as i64 + 1;
    body["id"] = json!(next_id);
    rows.push(body.clone());
    Ok(Json(body))
}

async fn update_vehicle(
    State(db): State<Db>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    let mut rows = db.lock().unwrap();
    let row = rows
        .iter_mut()
        .find(|row| row["id"] == json!(id))
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Vehicle record not found"})),
        ))?;
    body["id"] = json!(id);
    *row = body.clone();
    Ok(Json(body))
}

async fn delete_vehicle(
    State(db): State<Db>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    let mut rows = db.lock().unwrap();
    let before = rows.len();
    rows.retain(|row| row["id"] != json!(id));
    if rows.len() == before {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Vehicle record not found"})),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn spawn_backend() -> SocketAddr {
    let db: Db = StdArc::new(Mutex::new(seed()));
    let app = Router::new()
        .route("/illegal-vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/illegal-vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/wrapped/illegal-vehicles", get(list_vehicles_wrapped))
        .with_state(db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });
    addr
}

#[tokio::test]
async fn list_normalizes_bare_array() {
    let addr = spawn_backend().await;
    let api = ApiClient::anonymous(format!("http://{}", addr));
    let client: ResourceClient<DynRecord> = api.resource("/illegal-vehicles");

    let rows = client.list().await.expect("list should succeed");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id("id"), Some("1".to_string()));
}

#[tokio::test]
async fn list_normalizes_wrapped_payload() {
    let addr = spawn_backend().await;
    let api = ApiClient::anonymous(format!("http://{}", addr));
    let client: ResourceClient<DynRecord> = api.resource("/wrapped/illegal-vehicles");

    let rows = client.list().await.expect("list should succeed");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[1].field_value("location"),
        Some(FieldValue::String("Dimapur".to_string()))
    );
}

#[tokio::test]
async fn get_single_record() {
    let addr = spawn_backend().await;
    let api = ApiClient::anonymous(format!("http://{}", addr));
    let client: ResourceClient<DynRecord> = api.resource("/illegal-vehicles");

    let row = client.get("2").await.expect("get should succeed");
    assert_eq!(
        row.field_value("vehicle_number"),
        Some(FieldValue::String("NL-01-K-7777".to_string()))
    );
}

#[tokio::test]
async fn backend_message_is_surfaced_verbatim() {
    let addr = spawn_backend().await;
    let api = ApiClient::anonymous(format!("http://{}", addr));
    let client: ResourceClient<DynRecord> = api.resource("/illegal-vehicles");

    let err = client.get("99").await.expect_err("missing id should fail");
    match &err {
        ListwiseError::Api(ApiError::Status { status, message }) => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Vehicle record not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.user_message(), "Vehicle record not found");
}

#[tokio::test]
async fn mutations_require_the_bearer_token() {
    let addr = spawn_backend().await;
    let base = format!("http://{}", addr);

    let anonymous: ResourceClient<DynRecord> =
        ApiClient::anonymous(base.clone()).resource("/illegal-vehicles");
    let body = json!({"vehicle_number": "NL-07-F-0001", "location": "Phek"});

    let err = anonymous.create(&body).await.expect_err("must be rejected");
    match err {
        ListwiseError::Api(ApiError::Status { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Token missing or invalid");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let authenticated: ResourceClient<DynRecord> =
        ApiClient::with_static_token(base, TOKEN).resource("/illegal-vehicles");
    let created = authenticated.create(&body).await.expect("token accepted");
    assert_eq!(created.id("id"), Some("3".to_string()));
}

#[tokio::test]
async fn crud_round_trip_refreshes_the_view_wholesale() {
    let addr = spawn_backend().await;
    let base = format!("http://{}", addr);
    let clients = ApiClients::new(base, Arc::new(StaticToken(TOKEN.to_string())));

    let config = DashboardConfig::from_yaml_str(
        r#"
resources:
  - name: illegal-vehicles
    path: /illegal-vehicles
    searchable_fields: [vehicle_number, location]
    requires_auth: true
"#,
    )
    .expect("config parses");
    let resource = config.resource("illegal-vehicles").expect("configured");

    let client = resource.client(&clients);
    let mut view = resource.list_view();

    view.set_records(client.list().await.expect("initial fetch"));
    assert_eq!(view.visible().meta.total_count, 2);

    // create, then refresh wholesale
    let created = client
        .create(&json!({"vehicle_number": "NL-05-E-4242", "location": "Mon"}))
        .await
        .expect("create");
    view.set_records(client.list().await.expect("refetch"));
    assert_eq!(view.visible().meta.total_count, 3);

    // update the created record
    let id = created.id(&resource.id_field).expect("created id");
    let updated = client
        .update(&id, &json!({"vehicle_number": "NL-05-E-4242", "location": "Tuensang"}))
        .await
        .expect("update");
    assert_eq!(
        updated.field_value("location"),
        Some(FieldValue::String("Tuensang".to_string()))
    );

    // delete, refresh, and confirm the view shrank
    client.delete(&id).await.expect("delete");
    view.set_records(client.list().await.expect("refetch"));
    assert_eq!(view.visible().meta.total_count, 2);

    // the search pipeline runs over the refreshed collection
    view.search("dimapur");
    assert_eq!(view.visible().meta.total_count, 1);
}
