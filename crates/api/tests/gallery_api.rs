//! HTTP-level integration tests for the gallery: albums, photo uploads,
//! pricing tiers and the public checkout flow.

mod common;

use std::io::Cursor;
use std::time::Duration;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, delete_auth, get, get_auth, multipart_body, post_json, post_json_auth,
    post_multipart_auth, put_json_auth, seed_photographer, STUB_BILL_CODE,
};
use image::{ImageFormat, RgbImage};
use sqlx::PgPool;

use shutterdesk_core::types::DbId;
use shutterdesk_db::models::photo::{CreatePhoto, Photo};
use shutterdesk_db::repositories::PhotoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_album(pool: &PgPool, token: &str, name: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Insert a photo row directly, skipping the upload pipeline. Checkout
/// and listing tests only need rows, not files.
async fn seed_photo(pool: &PgPool, album_id: DbId, price: f64) -> Photo {
    let name = format!("{}.jpg", uuid::Uuid::new_v4());
    PhotoRepo::create(
        pool,
        &CreatePhoto {
            album_id,
            filename: name.clone(),
            original_path: format!("gallery/{album_id}/original/{name}"),
            watermarked_path: Some(format!("gallery/{album_id}/watermarked/{name}")),
            price,
            width: Some(800),
            height: Some(600),
        },
    )
    .await
    .expect("photo insert should succeed")
}

/// A valid encoded PNG of the given size.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

async fn put_tiers(
    pool: &PgPool,
    token: &str,
    album_id: &str,
    tiers: serde_json::Value,
) -> axum::response::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/v1/albums/{album_id}/pricing-tiers"),
        tiers,
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_returns_201(pool: PgPool) {
    let (user_id, token) = seed_photographer(&pool, "album_maker").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        serde_json::json!({ "name": "KL Marathon 2026", "description": "Finish line shots" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "KL Marathon 2026");
    assert_eq!(json["description"], "Finish line shots");
    assert_eq!(json["user_id"], user_id.to_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_album_lists_are_per_user(pool: PgPool) {
    let (_a, token_a) = seed_photographer(&pool, "album_a").await;
    let (_b, token_b) = seed_photographer(&pool, "album_b").await;

    create_album(&pool, &token_a, "A One").await;
    create_album(&pool, &token_a, "A Two").await;
    create_album(&pool, &token_b, "B One").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/albums", &token_a).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/albums", &token_b).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

/// Deleting an album removes its photos and pricing tiers with it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_album_cascades_photos_and_tiers(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "album_cascade").await;
    let album = create_album(&pool, &token, "Doomed Album").await;
    let id = album["id"].as_str().unwrap();
    let album_id: DbId = id.parse().unwrap();

    seed_photo(&pool, album_id, 10.0).await;
    seed_photo(&pool, album_id, 10.0).await;
    let response = put_tiers(
        &pool,
        &token,
        id,
        serde_json::json!([{ "quantity": 3, "price": 25.0 }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/albums/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let photos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM photos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(photos, 0, "photos should cascade with the album");

    let tiers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM album_pricing_tiers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(tiers, 0, "tiers should cascade with the album");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_album_cross_tenant_returns_404(pool: PgPool) {
    let (_a, token_a) = seed_photographer(&pool, "album_owner").await;
    let (_b, token_b) = seed_photographer(&pool, "album_thief").await;
    let album = create_album(&pool, &token_a, "Private Gallery").await;

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/albums/{}", album["id"].as_str().unwrap()),
        &token_b,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Photo upload
// ---------------------------------------------------------------------------

/// The upload stores the clean original plus a watermarked copy, reads
/// the pixel dimensions and never echoes the original path back.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_photo_stores_original_and_watermarked_copies(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "upload_files").await;
    let album = create_album(&pool, &token, "Race Day").await;
    let album_id = album["id"].as_str().unwrap();

    let media_root = tempfile::tempdir().expect("tempdir");
    let app = common::build_test_app_with_media_root(pool.clone(), media_root.path().to_path_buf());

    let png = png_bytes(4, 3);
    let boundary = "x-test-boundary";
    let body = multipart_body(boundary, "runner.png", &png, &[("price", "15.5")]);
    let response = post_multipart_auth(
        app,
        &format!("/api/v1/albums/{album_id}/photos"),
        boundary,
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["album_id"], album_id);
    assert_eq!(json["price"], 15.5);
    assert_eq!(json["width"], 4);
    assert_eq!(json["height"], 3);
    assert!(json.get("original_path").is_none());

    // Stored under a fresh server-side name keeping the client's extension.
    let stored = json["filename"].as_str().unwrap();
    assert!(stored.ends_with(".png"));
    assert_ne!(stored, "runner.png");

    let original = std::fs::read(
        media_root
            .path()
            .join(format!("gallery/{album_id}/original/{stored}")),
    )
    .unwrap();
    assert_eq!(original, png);

    let watermarked_path = json["watermarked_path"].as_str().unwrap();
    assert_eq!(
        watermarked_path,
        format!("gallery/{album_id}/watermarked/{stored}")
    );
    let watermarked = std::fs::read(media_root.path().join(watermarked_path)).unwrap();
    assert!(watermarked.starts_with(b"WM:"));
    assert_eq!(&watermarked[3..], png.as_slice());
}

/// Unreadable pixel data is not an error; the photo just has no
/// dimensions. The price also defaults to 0 when the field is absent.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_without_dimensions_or_price_still_succeeds(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "upload_blob").await;
    let album = create_album(&pool, &token, "Odd Files").await;
    let album_id = album["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let boundary = "x-test-boundary";
    let body = multipart_body(boundary, "notes.txt", b"not an image", &[]);
    let response = post_multipart_auth(
        app,
        &format!("/api/v1/albums/{album_id}/photos"),
        boundary,
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["price"], 0.0);
    assert!(json["width"].is_null());
    assert!(json["height"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_without_file_field_returns_400(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "upload_nofile").await;
    let album = create_album(&pool, &token, "Empty Upload").await;
    let album_id = album["id"].as_str().unwrap();

    // Multipart body carrying only the price field.
    let boundary = "x-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"price\"\r\n\r\n12.5\r\n");
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    let app = common::build_test_app(pool);
    let response = post_multipart_auth(
        app,
        &format!("/api/v1/albums/{album_id}/photos"),
        boundary,
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required 'file' field");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_with_bad_price_returns_400(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "upload_badprice").await;
    let album = create_album(&pool, &token, "Priced Wrong").await;
    let album_id = album["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let boundary = "x-test-boundary";
    let body = multipart_body(boundary, "p.png", &png_bytes(2, 2), &[("price", "free")]);
    let response = post_multipart_auth(
        app,
        &format!("/api/v1/albums/{album_id}/photos"),
        boundary,
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid price 'free'");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_to_foreign_album_returns_404(pool: PgPool) {
    let (_a, token_a) = seed_photographer(&pool, "upload_owner").await;
    let (_b, token_b) = seed_photographer(&pool, "upload_intruder").await;
    let album = create_album(&pool, &token_a, "Owned Gallery").await;

    let app = common::build_test_app(pool);
    let boundary = "x-test-boundary";
    let body = multipart_body(boundary, "p.png", &png_bytes(2, 2), &[]);
    let response = post_multipart_auth(
        app,
        &format!("/api/v1/albums/{}/photos", album["id"].as_str().unwrap()),
        boundary,
        body,
        &token_b,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// OCR tagging runs after the upload response; poll until it lands.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_tags_bib_numbers_in_background(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "upload_bibs").await;
    let album = create_album(&pool, &token, "Marathon Finish").await;
    let album_id = album["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let boundary = "x-test-boundary";
    let body = multipart_body(boundary, "finisher.png", &png_bytes(2, 2), &[]);
    let response = post_multipart_auth(
        app,
        &format!("/api/v1/albums/{album_id}/photos"),
        boundary,
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut bibs = serde_json::Value::Null;
    for _ in 0..100 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/albums/{album_id}/photos")).await;
        bibs = body_json(response).await[0]["bib_numbers"].clone();
        if !bibs.is_null() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    // The stub OCR yields an all-digit line and a short mixed token above
    // the confidence floor; prose and low-confidence lines are dropped.
    assert_eq!(bibs, "1234,A12");
}

// ---------------------------------------------------------------------------
// Public photo listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_photo_listing_hides_original_path(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "listing_owner").await;
    let album = create_album(&pool, &token, "Storefront").await;
    let album_id: DbId = album["id"].as_str().unwrap().parse().unwrap();

    seed_photo(&pool, album_id, 12.0).await;
    seed_photo(&pool, album_id, 18.0).await;

    // No auth header; buyers browse anonymously.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/albums/{album_id}/photos")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let photos = json.as_array().unwrap();
    assert_eq!(photos.len(), 2);
    for photo in photos {
        assert!(photo.get("original_path").is_none());
        assert!(photo["watermarked_path"].is_string());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_listing_of_unknown_album_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/albums/00000000-0000-0000-0000-000000000000/photos",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Pricing tiers
// ---------------------------------------------------------------------------

/// PUT replaces the whole schedule; rows come back largest bundle first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_pricing_tiers_replaces_schedule(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "tiers_owner").await;
    let album = create_album(&pool, &token, "Bundles").await;
    let id = album["id"].as_str().unwrap();

    let response = put_tiers(
        &pool,
        &token,
        id,
        serde_json::json!([
            { "quantity": 1, "price": 40.0 },
            { "quantity": 3, "price": 100.0 }
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tiers = json.as_array().unwrap();
    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0]["quantity"], 3);
    assert_eq!(tiers[1]["quantity"], 1);

    // A second PUT drops the old schedule entirely.
    let response = put_tiers(
        &pool,
        &token,
        id,
        serde_json::json!([{ "quantity": 5, "price": 150.0 }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/albums/{id}/pricing-tiers"), &token).await;
    let json = body_json(response).await;
    let tiers = json.as_array().unwrap();
    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0]["quantity"], 5);
    assert_eq!(tiers[0]["price"], 150.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tier_quantity_below_one_returns_400(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "tiers_zero").await;
    let album = create_album(&pool, &token, "Bad Bundles").await;

    let response = put_tiers(
        &pool,
        &token,
        album["id"].as_str().unwrap(),
        serde_json::json!([{ "quantity": 0, "price": 10.0 }]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Tier quantity must be at least 1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pricing_tiers_cross_tenant_returns_404(pool: PgPool) {
    let (_a, token_a) = seed_photographer(&pool, "tiers_a").await;
    let (_b, token_b) = seed_photographer(&pool, "tiers_b").await;
    let album = create_album(&pool, &token_a, "A's Bundles").await;

    let response = put_tiers(
        &pool,
        &token_b,
        album["id"].as_str().unwrap(),
        serde_json::json!([{ "quantity": 2, "price": 50.0 }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// 7 photos against {3: 100, 1: 40} resolve to two 3-packages plus one
/// single: 240. The stub gateway echoes the minor-unit amount into the
/// payment URL.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_checkout_resolves_tiered_total(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "checkout_tiers").await;
    let album = create_album(&pool, &token, "Finish Line").await;
    let id = album["id"].as_str().unwrap();
    let album_id: DbId = id.parse().unwrap();

    let response = put_tiers(
        &pool,
        &token,
        id,
        serde_json::json!([
            { "quantity": 3, "price": 100.0 },
            { "quantity": 1, "price": 40.0 }
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut photo_ids = Vec::new();
    for _ in 0..7 {
        photo_ids.push(seed_photo(&pool, album_id, 40.0).await.id);
    }

    // Checkout is public; buyers have no account.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checkout",
        serde_json::json!({
            "photo_ids": photo_ids,
            "customer_name": "Siti Aminah",
            "customer_email": "siti@example.com",
            "customer_phone": "+60123456789"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_price"], 240.0);
    assert_eq!(json["bill_code"], STUB_BILL_CODE);
    assert_eq!(json["payment_url"], "https://pay.test/testbill01/24000");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_checkout_without_tiers_charges_individual_prices(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "checkout_flat").await;
    let album = create_album(&pool, &token, "Unbundled").await;
    let album_id: DbId = album["id"].as_str().unwrap().parse().unwrap();

    let first = seed_photo(&pool, album_id, 15.5).await;
    let second = seed_photo(&pool, album_id, 20.0).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checkout",
        serde_json::json!({
            "photo_ids": [first.id, second.id],
            "customer_name": "Lim Wei",
            "customer_email": "lim@example.com",
            "customer_phone": "+60198765432"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_price"], 35.5);
    assert_eq!(json["payment_url"], "https://pay.test/testbill01/3550");
}

/// Submitting the same photo twice charges it once.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_checkout_deduplicates_selection(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "checkout_dupes").await;
    let album = create_album(&pool, &token, "Doubles").await;
    let album_id: DbId = album["id"].as_str().unwrap().parse().unwrap();
    let photo = seed_photo(&pool, album_id, 40.0).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checkout",
        serde_json::json!({
            "photo_ids": [photo.id, photo.id],
            "customer_name": "Raj Kumar",
            "customer_email": "raj@example.com",
            "customer_phone": "+60171112222"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_price"], 40.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_checkout_with_no_photos_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checkout",
        serde_json::json!({
            "photo_ids": [],
            "customer_name": "Nobody",
            "customer_email": "nobody@example.com",
            "customer_phone": "+60100000000"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "At least one photo must be selected");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_checkout_across_albums_returns_400(pool: PgPool) {
    let (_id, token) = seed_photographer(&pool, "checkout_mixed").await;
    let first_album = create_album(&pool, &token, "Album One").await;
    let second_album = create_album(&pool, &token, "Album Two").await;

    let first: DbId = first_album["id"].as_str().unwrap().parse().unwrap();
    let second: DbId = second_album["id"].as_str().unwrap().parse().unwrap();
    let photo_a = seed_photo(&pool, first, 10.0).await;
    let photo_b = seed_photo(&pool, second, 10.0).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checkout",
        serde_json::json!({
            "photo_ids": [photo_a.id, photo_b.id],
            "customer_name": "Mixed Buyer",
            "customer_email": "mixed@example.com",
            "customer_phone": "+60133334444"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "All photos must belong to the same album");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_checkout_with_unknown_photo_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checkout",
        serde_json::json!({
            "photo_ids": ["00000000-0000-0000-0000-000000000000"],
            "customer_name": "Ghost",
            "customer_email": "ghost@example.com",
            "customer_phone": "+60155556666"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Payment webhook
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_payment_callback_always_acknowledges(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/payments/callback",
        serde_json::json!({ "billcode": "testbill01", "paid": true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}
