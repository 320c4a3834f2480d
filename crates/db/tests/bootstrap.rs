use sqlx::PgPool;

use shutterdesk_db::models::user::CreateUser;
use shutterdesk_db::repositories::UserRepo;

/// Full bootstrap test: migrate, verify connectivity and core tables.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    shutterdesk_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "cameras",
        "lenses",
        "events",
        "event_costs",
        "transactions",
        "clients",
        "invoices",
        "invoice_items",
        "albums",
        "photos",
        "album_pricing_tiers",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Unique violations must carry the uq_-prefixed constraint name the
/// API layer maps to 409.
#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_username_names_the_constraint(pool: PgPool) {
    let input = CreateUser {
        username: "dupe".into(),
        email: "dupe@example.com".into(),
        password_hash: "x".into(),
        role: "photographer".into(),
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let second = CreateUser {
        username: "dupe".into(),
        email: "other@example.com".into(),
        password_hash: "x".into(),
        role: "photographer".into(),
    };
    let err = UserRepo::create(&pool, &second).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}
