pub mod auction;
pub mod category;
pub mod types;
