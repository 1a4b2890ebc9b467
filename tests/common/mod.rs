//! Helpers for integration tests.

use actix_web::http::header;
use actix_web::web;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use auctions_service::db::{DbPool, establish_connection_pool};
use auctions_service::domain::auction::{Auction, NewAuction};
use auctions_service::models::config::BasicAuthConfig;
use auctions_service::repository::{AuctionWriter, CategoryReader, DieselRepository};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Credentials accepted by the test application.
pub fn auth_config() -> web::Data<BasicAuthConfig> {
    web::Data::new(BasicAuthConfig {
        username: "user".to_string(),
        password: "password".to_string(),
    })
}

/// `Authorization` header for the configured test user.
pub fn basic_auth_header() -> (header::HeaderName, String) {
    (
        header::AUTHORIZATION,
        format!("Basic {}", STANDARD.encode("user:password")),
    )
}

/// Insert an auction into the seeded category and return the stored record.
pub fn seed_auction(repo: &DieselRepository, name: &str, description: &str) -> Auction {
    let category = repo
        .get_category_by_name("Moto")
        .expect("category lookup failed")
        .expect("Moto category should be seeded");

    let auction = NewAuction {
        category_id: category.id,
        name: name.try_into().expect("valid auction name"),
        starting_price: 1.0.try_into().expect("valid price"),
        current_price: 1.0.try_into().expect("valid price"),
        description: description.to_string(),
        created_at: Utc::now().naive_utc(),
    };

    repo.create_auction(&auction).expect("auction insert failed")
}
