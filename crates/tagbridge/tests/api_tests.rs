//! Route-level tests driving the full router with in-memory sources.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use tag_adapter_mem::TagSourceMem;
use tagbridge::app::{AppBuilderOpts, AppState};
use tagbridge::routes;
use tagbridge::types::Permissions;

const ALLOW_ALL: Permissions = Permissions { allow_add: true, allow_write: true, allow_remove: true };

fn test_app(permissions: Permissions, source: Arc<TagSourceMem>) -> Router {
	routes::init(Arc::new(AppState {
		opts: AppBuilderOpts { listen: "127.0.0.1:0".into(), permissions },
		source,
	}))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
	let mut builder = Request::builder().method(method).uri(uri);
	let body = match body {
		Some(raw) => {
			builder = builder.header(header::CONTENT_TYPE, "application/json");
			Body::from(raw.to_string())
		}
		None => Body::empty(),
	};
	let request = builder.body(body).expect("request");
	let response = router.clone().oneshot(request).await.expect("response");

	let status = response.status();
	let bytes = response.into_body().collect().await.expect("body").to_bytes();
	let value = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("json body")
	};
	(status, value)
}

#[tokio::test]
async fn test_list_tags_always_200() {
	let router = test_app(Permissions::default(), Arc::new(TagSourceMem::new()));
	let (status, body) = send(&router, Method::GET, "/tags", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!([]));

	let source = Arc::new(TagSourceMem::with_tags([("T1", json!(42)), ("T2", json!("on"))]));
	let router = test_app(Permissions::default(), source);
	let (status, body) = send(&router, Method::GET, "/tags", None).await;
	assert_eq!(status, StatusCode::OK);
	let items = body.as_array().expect("array body");
	assert_eq!(items.len(), 2);
	assert_eq!(items[0]["id"], "T1");
	assert_eq!(items[1]["id"], "T2");
}

#[tokio::test]
async fn test_get_tag_found_and_missing() {
	let source = Arc::new(TagSourceMem::with_tags([("T1", json!(42))]));
	let router = test_app(Permissions::default(), source);

	let (status, body) = send(&router, Method::GET, "/tag/T1", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "T1");
	assert_eq!(body["value"], 42);
	assert_eq!(body["quality"], "good");

	let (status, body) = send(&router, Method::GET, "/tag/T9", None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body, json!({"error": "tag not found"}));
}

#[tokio::test]
async fn test_get_zero_valued_tag_is_not_404() {
	let source = Arc::new(TagSourceMem::with_tags([("zero", json!(0))]));
	let router = test_app(Permissions::default(), source);

	let (status, body) = send(&router, Method::GET, "/tag/zero", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["value"], 0);
}

#[tokio::test]
async fn test_create_denied_without_allow_add() {
	let source = Arc::new(TagSourceMem::new());
	let router = test_app(Permissions::default(), source.clone());

	let (status, body) = send(&router, Method::POST, "/tag", Some(r#"["T1"]"#)).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "no additions allowed"}));
	// The source must never be invoked
	assert!(source.is_empty());
}

#[tokio::test]
async fn test_create_denied_precedes_payload_validation() {
	let router = test_app(Permissions::default(), Arc::new(TagSourceMem::new()));

	let (status, body) = send(&router, Method::POST, "/tag", Some("{not json")).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "no additions allowed"}));
}

#[tokio::test]
async fn test_create_invalid_payload() {
	let router = test_app(ALLOW_ALL, Arc::new(TagSourceMem::new()));

	// Not an array of strings
	let (status, body) = send(&router, Method::POST, "/tag", Some(r#"{"a": 1}"#)).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "Invalid request payload"}));
}

#[tokio::test]
async fn test_create_tags() {
	let source = Arc::new(TagSourceMem::new());
	let router = test_app(ALLOW_ALL, source.clone());

	let (status, body) = send(&router, Method::POST, "/tag", Some(r#"["T2", "T3"]"#)).await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body, json!({"result": "created"}));
	assert!(source.contains("T2"));
	assert!(source.contains("T3"));
}

#[tokio::test]
async fn test_create_partial_failure_names_failed_ids() {
	let source = Arc::new(TagSourceMem::with_tags([("T1", json!(1))]));
	let router = test_app(ALLOW_ALL, source.clone());

	let (status, body) = send(&router, Method::POST, "/tag", Some(r#"["T1", "T2"]"#)).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "Did not add tags: T1"}));
	// Best-effort: the accepted id was still registered
	assert!(source.contains("T2"));
}

#[tokio::test]
async fn test_update_denied_without_allow_write() {
	let permissions = Permissions { allow_add: true, allow_write: false, allow_remove: true };
	let router = test_app(permissions, Arc::new(TagSourceMem::with_tags([("T1", json!(1))])));

	// Denied regardless of body content, valid or not
	for body in ["99", "{not json"] {
		let (status, response) = send(&router, Method::PUT, "/tag/T1", Some(body)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(response, json!({"error": "read-only"}));
	}
}

#[tokio::test]
async fn test_update_invalid_payload() {
	let router = test_app(ALLOW_ALL, Arc::new(TagSourceMem::with_tags([("T1", json!(1))])));

	let (status, body) = send(&router, Method::PUT, "/tag/T1", Some("{not json")).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "Invalid request payload"}));
}

#[tokio::test]
async fn test_update_unknown_tag() {
	let router = test_app(ALLOW_ALL, Arc::new(TagSourceMem::new()));

	let (status, body) = send(&router, Method::PUT, "/tag/T9", Some("99")).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "value could not be written to tag"}));
}

#[tokio::test]
async fn test_delete_denied_without_allow_remove() {
	let source = Arc::new(TagSourceMem::with_tags([("T1", json!(1))]));
	let permissions = Permissions { allow_add: true, allow_write: true, allow_remove: false };
	let router = test_app(permissions, source.clone());

	let (status, body) = send(&router, Method::DELETE, "/tag/T1", None).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "deletions not allowed"}));
	// The store must not be mutated
	assert!(source.contains("T1"));
}

#[tokio::test]
async fn test_delete_unknown_tag() {
	let router = test_app(ALLOW_ALL, Arc::new(TagSourceMem::new()));

	let (status, body) = send(&router, Method::DELETE, "/tag/T9", None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body, json!({"error": "tag not found"}));
}

#[tokio::test]
async fn test_tag_lifecycle_end_to_end() {
	let source = Arc::new(TagSourceMem::with_tags([("T1", json!(42))]));
	let router = test_app(ALLOW_ALL, source);

	let (status, body) = send(&router, Method::GET, "/tag/T1", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["value"], 42);

	let (status, body) = send(&router, Method::PUT, "/tag/T1", Some("99")).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({"result": "updated"}));

	let (status, body) = send(&router, Method::GET, "/tag/T1", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["value"], 99);

	let (status, body) = send(&router, Method::DELETE, "/tag/T1", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({"result": "removed"}));

	let (status, _) = send(&router, Method::GET, "/tag/T1", None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_instances_hold_independent_permissions() {
	// Two apps over separate sources with different permission sets
	let open = test_app(ALLOW_ALL, Arc::new(TagSourceMem::new()));
	let closed = test_app(Permissions::default(), Arc::new(TagSourceMem::new()));

	let (status, _) = send(&open, Method::POST, "/tag", Some(r#"["T1"]"#)).await;
	assert_eq!(status, StatusCode::CREATED);

	let (status, body) = send(&closed, Method::POST, "/tag", Some(r#"["T1"]"#)).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body, json!({"error": "no additions allowed"}));
}

// vim: ts=4
