//! Shared test utilities for kotoba-db unit tests.

use crate::KotobaDb;
use crate::service::KotobaService;

/// Create an in-memory `KotobaService`.
pub async fn test_service() -> KotobaService {
    let db = KotobaDb::open_local(":memory:").await.unwrap();
    KotobaService::from_db(db)
}
