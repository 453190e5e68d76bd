use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use bookstore::auth::{create_jwt, decode_jwt, hash_password, verify_password};
use bookstore::{db, server};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

#[tokio::test]
async fn test_password_hashing() {
    let password = "super_secret_password";
    let hash = hash_password(password).expect("Failed to hash password");

    assert_ne!(password, hash);
    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("wrong_password", &hash).unwrap());
}

#[tokio::test]
async fn test_jwt_creation_and_verification() {
    let token = create_jwt("clerk", "staff").expect("Failed to create JWT");
    assert!(!token.is_empty());

    let claims = decode_jwt(&token).expect("Failed to verify JWT");
    assert_eq!(claims.sub, "clerk");
    assert_eq!(claims.role, "staff");
}

#[tokio::test]
async fn test_login_flow() {
    let db = setup_test_db().await;

    // 1. Create a user manually
    let password = "admin_password";
    let hash = hash_password(password).unwrap();

    let user = bookstore::models::user::ActiveModel {
        username: Set("admin".to_string()),
        password_hash: Set(hash),
        role: Set("admin".to_string()),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    bookstore::models::user::Entity::insert(user)
        .exec(&db)
        .await
        .expect("Failed to create user");

    let app = server::build_router(db, 1000);

    // 2. Successful login returns a token
    let payload = serde_json::json!({
        "username": "admin",
        "password": "admin_password"
    });
    let req = Request::builder()
        .uri("/api/auth/login")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // 3. Invalid password
    let payload_bad = serde_json::json!({
        "username": "admin",
        "password": "wrong_password"
    });
    let req_bad = Request::builder()
        .uri("/api/auth/login")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload_bad).unwrap()))
        .unwrap();

    let response_bad = app.clone().oneshot(req_bad).await.unwrap();
    assert_eq!(response_bad.status(), StatusCode::UNAUTHORIZED);

    // 4. Non-existent user
    let payload_none = serde_json::json!({
        "username": "nobody",
        "password": "password"
    });
    let req_none = Request::builder()
        .uri("/api/auth/login")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload_none).unwrap()))
        .unwrap();

    let response_none = app.oneshot(req_none).await.unwrap();
    assert_eq!(response_none.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthenticated_mutations_are_rejected_before_any_write() {
    let db = setup_test_db().await;
    let app = server::build_router(db.clone(), 1000);

    // Create without a token
    let payload = serde_json::json!({ "title": "Sneaky Insert" });
    let req = Request::builder()
        .uri("/api/books")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Update, patch, delete without a token
    for method in ["PUT", "PATCH", "DELETE"] {
        let req = Request::builder()
            .uri("/api/books/some-id")
            .method(method)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} must require auth", method);
    }

    // A garbage token is rejected the same way
    let req = Request::builder()
        .uri("/api/books")
        .method("POST")
        .header("content-type", "application/json")
        .header("Authorization", "Bearer not-a-jwt")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The store is untouched
    let count = bookstore::models::book::Entity::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 0);

    // And anonymous reads still work
    let req = Request::builder()
        .uri("/api/books")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
