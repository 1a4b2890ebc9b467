use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::auction::{Auction as DomainAuction, NewAuction as DomainNewAuction};
use crate::domain::types::{AuctionName, AuctionPrice, TypeConstraintError};
use crate::models::category::Category;

/// Diesel model representing the `auctions` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::auctions)]
pub struct Auction {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub starting_price: f64,
    pub current_price: f64,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// Insertable/patchable form of [`Auction`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::auctions)]
pub struct NewAuction {
    pub category_id: i32,
    pub name: String,
    pub starting_price: f64,
    pub current_price: f64,
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<(Auction, Category)> for DomainAuction {
    type Error = TypeConstraintError;

    fn try_from((auction, category): (Auction, Category)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: auction.id.try_into()?,
            name: AuctionName::new(auction.name)?,
            starting_price: AuctionPrice::new(auction.starting_price)?,
            current_price: AuctionPrice::new(auction.current_price)?,
            description: auction.description,
            created_at: auction.created_at,
            category: category.try_into()?,
        })
    }
}

impl From<DomainNewAuction> for NewAuction {
    fn from(auction: DomainNewAuction) -> Self {
        Self {
            category_id: auction.category_id.get(),
            name: auction.name.into_inner(),
            starting_price: auction.starting_price.get(),
            current_price: auction.current_price.get(),
            description: auction.description,
            created_at: auction.created_at,
        }
    }
}
