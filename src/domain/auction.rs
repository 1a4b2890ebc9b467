use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{AuctionId, AuctionName, AuctionPrice, CategoryId};

/// Canonical auction record joined with its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    pub name: AuctionName,
    pub starting_price: AuctionPrice,
    pub current_price: AuctionPrice,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub category: Category,
}

/// Data required to insert or fully replace an [`Auction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuction {
    pub category_id: CategoryId,
    pub name: AuctionName,
    pub starting_price: AuctionPrice,
    pub current_price: AuctionPrice,
    pub description: String,
    pub created_at: NaiveDateTime,
}
