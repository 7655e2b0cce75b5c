use alumnet::router::init_router;
use alumnet::state::AppState;
use alumnet_core::hash_password;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    init_router(AppState::from_pool(pool))
}

/// Inserts a user directly, bypassing registration, with the given role name.
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, role: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid =
        sqlx::query_scalar("INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id")
            .bind(email)
            .bind(hashed)
            .fetch_one(pool)
            .await
            .unwrap();

    sqlx::query(
        r#"
        INSERT INTO user_roles (user_id, role_id)
        SELECT $1, id FROM roles WHERE name = $2
        "#,
    )
    .bind(id)
    .bind(role)
    .execute(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Sends one request and returns the status plus the JSON body (`Null` when empty).
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Creates a user with `role` and returns a token for it.
#[allow(dead_code)]
pub async fn token_for_role(pool: &PgPool, role: &str) -> String {
    let email = generate_unique_email();
    create_test_user(pool, &email, "testpass123", role).await;
    get_auth_token(setup_test_app(pool.clone()).await, &email, "testpass123").await
}

#[allow(dead_code)]
pub async fn insert_alumni(pool: &PgPool, nim: &str, nama: &str, jurusan: &str) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO alumni (nim, nama, jurusan, angkatan, tahun_lulus, email)
        VALUES ($1, $2, $3, 2015, 2019, $4)
        RETURNING id
        "#,
    )
    .bind(nim)
    .bind(nama)
    .bind(jurusan)
    .bind(format!("{}@alumni.test", nim))
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn insert_pekerjaan(pool: &PgPool, alumni_id: Uuid, nama_perusahaan: &str) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO pekerjaan (alumni_id, nama_perusahaan, posisi_jabatan, bidang_industri,
                               lokasi_kerja, tanggal_mulai_kerja, status_pekerjaan)
        VALUES ($1, $2, 'Software Engineer', 'Teknologi', 'Jakarta', '2020-01-06', 'Aktif')
        RETURNING id
        "#,
    )
    .bind(alumni_id)
    .bind(nama_perusahaan)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub fn alumni_payload(nim: &str, nama: &str) -> Value {
    json!({
        "nim": nim,
        "nama": nama,
        "jurusan": "Teknik Informatika",
        "angkatan": 2016,
        "tahun_lulus": 2020,
        "email": format!("{}@alumni.test", nim),
        "no_telepon": "081234567890",
        "alamat": "Jl. Merdeka 1"
    })
}
