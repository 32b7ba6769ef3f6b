use crate::{config::Config, docs::ApiDoc, middleware::cors_middleware, routes};
use actix_web::dev::Server;
use actix_web::middleware::{Logger, NormalizePath, from_fn};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the HTTP server on an already bound listener. The returned future
/// must be awaited (or spawned) to start serving.
pub fn run(listener: TcpListener, pool: SqlitePool, config: Config) -> anyhow::Result<Server> {
    let limiter = routes::build_limiter(config.rate_api_per_min)?;
    let addr = listener.local_addr()?;
    let workers = config.workers;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(cors_middleware))
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(config.clone()))
            .configure(|cfg| routes::configure(cfg, &limiter))
    });

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    let server = server.listen(listener)?.run();
    info!(%addr, "Listening");

    Ok(server)
}
