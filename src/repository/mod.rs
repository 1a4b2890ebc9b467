use crate::db::{DbConnection, DbPool};
use crate::domain::auction::{Auction, NewAuction};
use crate::domain::category::Category;
use crate::domain::types::{AuctionId, CategoryId};
use crate::repository::errors::RepositoryResult;

pub mod auction;
pub mod category;
pub mod errors;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching auctions.
#[derive(Debug, Clone, Default)]
pub struct AuctionListQuery {
    /// Free-text search against name and description.
    pub search: Option<String>,
    /// Restrict to auctions in one category.
    pub category_id: Option<CategoryId>,
}

impl AuctionListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Read-only operations for auction entities.
pub trait AuctionReader {
    /// List auctions matching the supplied query parameters.
    fn list_auctions(&self, query: AuctionListQuery) -> RepositoryResult<Vec<Auction>>;
    /// Retrieve an auction by its identifier.
    fn get_auction_by_id(&self, id: AuctionId) -> RepositoryResult<Option<Auction>>;
}

/// Write operations for auction entities.
pub trait AuctionWriter {
    /// Persist a new auction, returning the stored record.
    fn create_auction(&self, auction: &NewAuction) -> RepositoryResult<Auction>;
    /// Fully replace an auction by id. Returns `None` when the id is absent.
    fn update_auction(
        &self,
        id: AuctionId,
        auction: &NewAuction,
    ) -> RepositoryResult<Option<Auction>>;
    /// Delete an auction by id, returning the number of affected rows.
    fn delete_auction(&self, id: AuctionId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by name, matched case-insensitively.
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
}
