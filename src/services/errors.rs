use thiserror::Error;

/// Generic error type used by service layer functions.
///
/// The `Display` output of the reference variants doubles as the `detail`
/// field of the problem body sent to clients.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// The referenced category is absent from the category set.
    #[error("Category {0} not exist")]
    CategoryNotFound(String),
    /// The auction id is absent from the store.
    #[error("Auction {0} not exist")]
    AuctionNotFound(i32),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
