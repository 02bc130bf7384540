//! Add/update form and submission tests.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, get, get_as, post_json, put_json, Call, FakeBackend, TOKEN};
use lims_core::entity::EntityKind;
use serde_json::json;

// ---------------------------------------------------------------------------
// Validation blocks submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_required_field_is_rejected_without_backend_call() {
    let backend = FakeBackend::new();
    let app = common::build_test_app(backend.clone());

    let response = post_json(app, "/api/v1/entities/department", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["departmentname"], "Department name is required");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn pattern_violations_report_configured_messages() {
    let backend = FakeBackend::new();

    let app = common::build_test_app(backend.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/entities/nodal",
            json!({"nodalname": "North", "address": "Ring Road", "pincode": "56001", "contactno": "12345"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["fields"]["pincode"], "PIN code must be exactly 6 digits");
    assert_eq!(json["fields"]["contactno"], "Enter a valid 10-digit mobile number");
    assert!(json["fields"].get("nodalname").is_none());

    let app = common::build_test_app(backend.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/entities/color",
            json!({"colorname": "Red", "colorcode": "red"}),
        )
        .await,
    )
    .await;
    assert_eq!(
        json["fields"]["colorcode"],
        "Enter a valid hex color code (e.g. #FF0000)"
    );

    assert!(backend.writes().is_empty());
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_posts_typed_payload_and_redirects_to_list() {
    let backend = FakeBackend::new();
    let app = common::build_test_app(backend.clone());

    let response = post_json(
        app,
        "/api/v1/entities/profile",
        json!({
            "profilename": "Liver Function",
            "profilecode": "LFT",
            "departmentid": "3",
            "price": "450.50",
            "isactive": "false",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["notice"], "Profile added successfully");
    assert_eq!(json["redirect_to"], "/profile/list");
    assert_eq!(json["redirect_after_ms"], 1500);
    assert_eq!(json["data"]["id"], 101);

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_matches!(&writes[0], Call::Create { kind: EntityKind::Profile, payload } => {
        assert_eq!(payload["isactive"], json!(false));
        assert_eq!(payload["departmentid"], json!(3));
        assert_eq!(payload["price"], json!(450.5));
        assert_eq!(payload["profilename"], json!("Liver Function"));
    });
    assert!(backend.tokens().iter().all(|t| t == TOKEN));
}

#[tokio::test]
async fn omitted_status_submits_default_true() {
    let backend = FakeBackend::new();
    let app = common::build_test_app(backend.clone());

    let response = post_json(app, "/api/v1/entities/unit", json!({"unitname": "mg/dL"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_matches!(&backend.writes()[0], Call::Create { payload, .. } => {
        assert_eq!(payload["isactive"], json!(true));
    });
}

#[tokio::test]
async fn backend_rejection_keeps_status_and_message() {
    let backend = FakeBackend::new();
    backend.fail_writes(409, r#"{"message": "Nodal name already exists"}"#);
    let app = common::build_test_app(backend);

    let response = post_json(
        app,
        "/api/v1/entities/nodal",
        json!({"nodalname": "Central Lab", "address": "MG Road", "pincode": "411001"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Nodal name already exists");
}

#[tokio::test]
async fn backend_failure_without_message_uses_fallback() {
    let backend = FakeBackend::new();
    backend.fail_writes(500, "");
    let app = common::build_test_app(backend);

    let response = post_json(app, "/api/v1/entities/unit", json!({"unitname": "mg"})).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Something went wrong. Please try again.");
}

// ---------------------------------------------------------------------------
// Form screens
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_form_carries_defaults_locks_and_options() {
    let backend = FakeBackend::new();
    backend.seed(EntityKind::Role, json!([{"id": 1, "rolename": "Administrator"}]));
    let app = common::build_test_app(backend);

    let response = get(app, "/api/v1/entities/user/new").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["mode"], "create");
    assert_eq!(data["values"]["isactive"], "true");
    assert_eq!(data["values"]["createdon"].as_str().unwrap().len(), 10);
    assert_eq!(data["locked"], json!(["createdon"]));
    assert_eq!(data["list_route"], "/user/list");
    assert_eq!(data["options"]["roleid"]["options"][0]["label"], "Administrator");
}

#[tokio::test]
async fn role_type_default_comes_from_session() {
    let app = common::build_test_app(FakeBackend::new());
    let response = get_as(app, "/api/v1/entities/technician/new", Some("nodal")).await;

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["values"]["roletype"], "nodal");
}

#[tokio::test]
async fn edit_form_is_populated_by_fetch_by_id() {
    let backend = FakeBackend::new();
    backend.seed(
        EntityKind::Color,
        json!([{"id": 9, "colorname": "Lavender", "colorcode": "#E6E6FA", "isactive": true}]),
    );
    let app = common::build_test_app(backend.clone());

    let response = get(app, "/api/v1/entities/color/9/edit").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["mode"], "update");
    assert_eq!(data["id"], 9);
    assert_eq!(data["values"]["colorname"], "Lavender");
    assert_eq!(data["values"]["isactive"], "true");
    assert_eq!(data["baseline"], data["values"]);

    assert!(backend.calls().contains(&Call::Fetch {
        kind: EntityKind::Color,
        id: 9,
    }));
}

#[tokio::test]
async fn edit_form_for_missing_record_redirects_to_list() {
    let app = common::build_test_app(FakeBackend::new());
    let response = get(app, "/api/v1/entities/color/77/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_CONTEXT");
    assert_eq!(json["redirect_to"], "/color/list");
}

#[tokio::test]
async fn edit_form_without_usable_id_redirects_without_fetch() {
    let backend = FakeBackend::new();
    let app = common::build_test_app(backend.clone());

    let response = get(app, "/api/v1/entities/color/undefined/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_CONTEXT");
    assert_eq!(json["error"], "No Color selected for update");
    assert!(!backend
        .calls()
        .iter()
        .any(|c| matches!(c, Call::Fetch { .. })));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

fn seed_doctor(backend: &FakeBackend) {
    backend.seed(
        EntityKind::Doctor,
        json!([{
            "id": 3,
            "doctorname": "Meera Rao",
            "registrationno": "KMC-1",
            "hospitalid": 7,
            "contactno": "9876543210",
            "isactive": true,
        }]),
    );
}

#[tokio::test]
async fn update_puts_to_record_id_and_keeps_locked_fields() {
    let backend = FakeBackend::new();
    seed_doctor(&backend);
    let app = common::build_test_app(backend.clone());

    let response = put_json(
        app,
        "/api/v1/entities/doctor/3",
        json!({"doctorname": "Meera R", "registrationno": "CHANGED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["notice"], "Doctor updated successfully");
    assert_eq!(json["redirect_to"], "/doctor/list");

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_matches!(&writes[0], Call::Update { kind: EntityKind::Doctor, id: 3, payload } => {
        assert_eq!(payload["doctorname"], json!("Meera R"));
        assert_eq!(payload["registrationno"], json!("KMC-1"));
        assert_eq!(payload["hospitalid"], json!(7));
        assert_eq!(payload["isactive"], json!(true));
    });
}

#[tokio::test]
async fn missing_registration_number_can_be_filled_in_on_update() {
    let backend = FakeBackend::new();
    backend.seed(
        EntityKind::Doctor,
        json!([{
            "id": 4,
            "doctorname": "Anil Shah",
            "hospitalid": 7,
            "contactno": "9876543210",
            "isactive": true,
        }]),
    );
    let app = common::build_test_app(backend.clone());

    let response = put_json(
        app,
        "/api/v1/entities/doctor/4",
        json!({"doctorname": "Anil Shah", "registrationno": "KMC-9"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_matches!(&backend.writes()[0], Call::Update { id: 4, payload, .. } => {
        assert_eq!(payload["registrationno"], json!("KMC-9"));
    });
}

#[tokio::test]
async fn update_of_missing_record_redirects_without_write() {
    let backend = FakeBackend::new();
    let app = common::build_test_app(backend.clone());

    let response = put_json(app, "/api/v1/entities/doctor/44", json!({"doctorname": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_CONTEXT");
    assert_eq!(json["redirect_to"], "/doctor/list");
    assert!(backend.writes().is_empty());
}

#[tokio::test]
async fn invalid_update_is_not_sent() {
    let backend = FakeBackend::new();
    backend.seed(
        EntityKind::Color,
        json!([{"id": 9, "colorname": "Lavender", "colorcode": "#E6E6FA", "isactive": true}]),
    );
    let app = common::build_test_app(backend.clone());

    let response = put_json(app, "/api/v1/entities/color/9", json!({"colorcode": "#12"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["colorcode"],
        "Enter a valid hex color code (e.g. #FF0000)"
    );
    assert!(backend.writes().is_empty());
}
