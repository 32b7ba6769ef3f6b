#![allow(dead_code)]

use hrms_lite::{client::HrmsClient, config::Config, db::init_db, model::Employee, server};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing::Level;

pub struct TestApp {
    pub base_url: String,
    pub client: HrmsClient,
    pub pool: SqlitePool,
}

fn test_config(rate_api_per_min: u32) -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        workers: Some(1),
        rate_api_per_min,
        log_dir: std::env::temp_dir().to_string_lossy().to_string(),
        log_level: Level::WARN,
    }
}

/// Starts the service on a random local port backed by a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_rate(100_000).await
}

pub async fn spawn_app_with_rate(rate_api_per_min: u32) -> TestApp {
    let config = test_config(rate_api_per_min);
    let pool = init_db(&config.database_url, config.db_max_connections)
        .await
        .expect("in-memory database");

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().expect("local addr").port();

    let server = server::run(listener, pool.clone(), config).expect("server starts");
    actix_web::rt::spawn(server);

    let base_url = format!("http://127.0.0.1:{port}");
    let client = HrmsClient::new(&base_url).expect("client");

    TestApp {
        base_url,
        client,
        pool,
    }
}

pub fn employee(id: &str, name: &str) -> Employee {
    Employee::new(
        id,
        name,
        format!("{}@company.com", id.to_lowercase()),
        "Engineering",
    )
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

impl TestApp {
    pub async fn add_employee(&self, id: &str, name: &str) -> Employee {
        self.client
            .create_employee(&employee(id, name))
            .await
            .expect("create employee")
    }
}
