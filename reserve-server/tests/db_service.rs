//! Database service tests: file-backed pool, migrations, persistence.

use reserve_server::db::DbService;
use reserve_server::db::repository::restaurant;

#[tokio::test]
async fn test_file_backed_database_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("reserve.db");
    let path = path.to_str().expect("utf-8 path");

    let db = DbService::new(path).await.expect("open database");
    {
        let mut conn = db.pool.acquire().await.expect("conn");
        restaurant::create(&mut conn, "Persisted", None)
            .await
            .expect("create restaurant");
    }
    db.pool.close().await;

    // Second open reuses the schema (migrations are idempotent) and the data
    let db = DbService::new(path).await.expect("reopen database");
    let mut conn = db.pool.acquire().await.expect("conn");
    let all = restaurant::find_all(&mut conn).await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Persisted");
}
