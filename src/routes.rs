use crate::{
    api::{self, attendance, dashboard, employee},
    error::extractor_error,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub type ApiLimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with a burst of the same size.
/// Build it once and share it so every worker draws from the same quota.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<ApiLimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| {
            anyhow::anyhow!("invalid rate limit: {requests_per_min} requests per minute")
        })
}

pub fn configure(cfg: &mut web::ServiceConfig, limiter: &ApiLimiterConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| extractor_error(err, req)))
        .app_data(web::QueryConfig::default().error_handler(|err, req| extractor_error(err, req)))
        .app_data(web::PathConfig::default().error_handler(|err, req| extractor_error(err, req)));

    cfg.route("/", web::get().to(api::index));

    cfg.service(
        web::scope("")
            .wrap(Governor::new(limiter))
            // /employees
            .service(
                web::resource("/employees")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{employee_id}
            .service(
                web::resource("/employees/{employee_id}")
                    .route(web::delete().to(employee::delete_employee)),
            )
            // /attendance
            .service(
                web::resource("/attendance").route(web::post().to(attendance::mark_attendance)),
            )
            // /attendance/{employee_id}
            .service(
                web::resource("/attendance/{employee_id}")
                    .route(web::get().to(attendance::employee_attendance)),
            )
            // /dashboard
            .service(web::resource("/dashboard").route(web::get().to(dashboard::get_dashboard))),
    );
}
