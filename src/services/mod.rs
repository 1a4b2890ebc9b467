pub use errors::{ServiceError, ServiceResult};

pub mod auctions;
pub mod errors;
