use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::database_service::DatabaseService;
use crate::store::Store;

/// Row counts reported by `/ready`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreCounts {
    pub users: usize,
    pub branches: usize,
    pub courses: usize,
    pub enrollments: usize,
    pub revenue: usize,
}

impl From<&Store> for StoreCounts {
    fn from(store: &Store) -> Self {
        Self {
            users: store.users.len(),
            branches: store.branches.len(),
            courses: store.courses.len(),
            enrollments: store.enrollments.len(),
            revenue: store.revenue.len(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreStatus {
    pub ready: bool,
    #[serde(default)]
    pub records: Option<StoreCounts>,
}

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// GET /ready
///
/// 503 once a panicking writer has poisoned the store lock.
pub async fn readiness_check(db: web::Data<DatabaseService>) -> HttpResponse {
    match db.store().read() {
        Ok(store) => HttpResponse::Ok().json(StoreStatus {
            ready: true,
            records: Some(StoreCounts::from(&*store)),
        }),
        Err(e) => {
            error!(error = %e, "Record store is not readable");
            HttpResponse::ServiceUnavailable().json(StoreStatus {
                ready: false,
                records: None,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
