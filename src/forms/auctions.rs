use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::auction::NewAuction;
use crate::domain::types::{
    AuctionName, AuctionPrice, CategoryId, CategoryName, TypeConstraintError,
};

/// Category reference supplied inside an auction body.
#[derive(Debug, Deserialize)]
pub struct CategoryRefForm {
    pub name: String,
}

/// Auction body accepted by the create and update endpoints.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuctionForm {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(min = 0.01, message = "must be greater than or equal to 0.01"))]
    pub starting_price: f64,
    pub current_price: f64,
    #[serde(default)]
    pub description: String,
    /// Defaults to the current time when the client omits it.
    pub created_at: Option<NaiveDateTime>,
    pub category: CategoryRefForm,
}

/// Validated payload produced from an [`AuctionForm`].
#[derive(Debug, Clone)]
pub struct AuctionFormPayload {
    pub name: AuctionName,
    pub starting_price: AuctionPrice,
    pub current_price: AuctionPrice,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub category: CategoryName,
}

impl AuctionFormPayload {
    pub fn into_new_auction(self, category_id: CategoryId) -> NewAuction {
        NewAuction {
            category_id,
            name: self.name,
            starting_price: self.starting_price,
            current_price: self.current_price,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuctionFormError {
    #[error("Auction form validation failed: {0}")]
    Validation(String),
    #[error("Auction form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AuctionFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AuctionFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AuctionForm> for AuctionFormPayload {
    type Error = AuctionFormError;

    fn try_from(value: AuctionForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: AuctionName::new(value.name)?,
            starting_price: AuctionPrice::new(value.starting_price)?,
            current_price: AuctionPrice::new(value.current_price)?,
            description: value.description,
            created_at: value.created_at.unwrap_or_else(|| Utc::now().naive_utc()),
            category: CategoryName::new(value.category.name)?,
        })
    }
}
