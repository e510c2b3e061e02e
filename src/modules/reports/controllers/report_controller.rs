use actix_web::{web, HttpResponse};

use crate::core::{Result, Session};
use crate::database_service::DatabaseService;
use crate::modules::revenue::models::RevenueQuery;

/// GET /reports/statistics
pub async fn get_statistics(db: web::Data<DatabaseService>, session: Session) -> Result<HttpResponse> {
    session.require_staff()?;
    let stats = db.reports.get_statistics(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /reports/revenue?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
///
/// Both bounds are optional and inclusive. An inverted range is a 400.
pub async fn get_revenue_report(
    db: web::Data<DatabaseService>,
    session: Session,
    query: web::Query<RevenueQuery>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let report = db.reports.get_revenue_report(&query, &session.scope()?)?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /reports/branch-revenue
pub async fn get_branch_revenue(
    db: web::Data<DatabaseService>,
    session: Session,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let analysis = db.reports.get_branch_revenue_analysis(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(analysis))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/statistics", web::get().to(get_statistics))
            .route("/revenue", web::get().to(get_revenue_report))
            .route("/branch-revenue", web::get().to(get_branch_revenue)),
    );
}
