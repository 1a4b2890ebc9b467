use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::auction::Auction;
use crate::domain::category::Category;

/// Wire representation of a category reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub name: String,
}

/// Wire representation of an auction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDto {
    pub id: i32,
    pub name: String,
    pub starting_price: f64,
    pub current_price: f64,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub category: CategoryDto,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            name: value.name.into_inner(),
        }
    }
}

impl From<Auction> for AuctionDto {
    fn from(value: Auction) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            starting_price: value.starting_price.get(),
            current_price: value.current_price.get(),
            description: value.description,
            created_at: value.created_at,
            category: value.category.into(),
        }
    }
}
