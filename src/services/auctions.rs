//! Core business logic behind the auction endpoints.
//!
//! All repository interactions and reference checks live here so that the
//! HTTP routes can remain thin wrappers. Every function is generic over the
//! repository traits and therefore unit-testable against `TestRepository`.

use crate::domain::category::Category;
use crate::domain::types::AuctionId;
use crate::dto::auctions::AuctionDto;
use crate::forms::auctions::AuctionFormPayload;
use crate::repository::{AuctionListQuery, AuctionReader, AuctionWriter, CategoryReader};

use super::{ServiceError, ServiceResult};

fn resolve_category<R>(name: &str, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_name(name) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::CategoryNotFound(name.to_string())),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Free-text search against auction names and descriptions.
///
/// An empty query matches everything; no match yields an empty list.
pub fn search_auctions<R>(query: &str, repo: &R) -> ServiceResult<Vec<AuctionDto>>
where
    R: AuctionReader,
{
    let mut list_query = AuctionListQuery::default();
    if !query.is_empty() {
        list_query = list_query.search(query);
    }

    match repo.list_auctions(list_query) {
        Ok(auctions) => Ok(auctions.into_iter().map(AuctionDto::from).collect()),
        Err(e) => {
            log::error!("Failed to search auctions: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List auctions in one category; unknown category names are an error.
pub fn search_by_category<R>(category: &str, repo: &R) -> ServiceResult<Vec<AuctionDto>>
where
    R: AuctionReader + CategoryReader,
{
    let category = resolve_category(category, repo)?;

    match repo.list_auctions(AuctionListQuery::default().category(category.id)) {
        Ok(auctions) => Ok(auctions.into_iter().map(AuctionDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list auctions by category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Validate the category reference and insert a new auction.
pub fn create_auction<R>(payload: AuctionFormPayload, repo: &R) -> ServiceResult<AuctionDto>
where
    R: AuctionWriter + CategoryReader,
{
    let category = resolve_category(payload.category.as_str(), repo)?;

    match repo.create_auction(&payload.into_new_auction(category.id)) {
        Ok(auction) => Ok(auction.into()),
        Err(e) => {
            log::error!("Failed to create auction: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fully replace an auction by id.
///
/// An absent id is reported before the category reference is checked.
pub fn update_auction<R>(
    id: i32,
    payload: AuctionFormPayload,
    repo: &R,
) -> ServiceResult<AuctionDto>
where
    R: AuctionReader + AuctionWriter + CategoryReader,
{
    let auction_id = AuctionId::new(id).map_err(|_| ServiceError::AuctionNotFound(id))?;

    match repo.get_auction_by_id(auction_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::AuctionNotFound(id)),
        Err(e) => {
            log::error!("Failed to get auction: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let category = resolve_category(payload.category.as_str(), repo)?;

    match repo.update_auction(auction_id, &payload.into_new_auction(category.id)) {
        Ok(Some(auction)) => Ok(auction.into()),
        Ok(None) => Err(ServiceError::AuctionNotFound(id)),
        Err(e) => {
            log::error!("Failed to update auction: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete an auction by id. Deleting an unknown id is a no-op.
pub fn delete_auction<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: AuctionWriter,
{
    // Non-positive ids cannot exist in the store, so there is nothing to do.
    let Ok(auction_id) = AuctionId::new(id) else {
        return Ok(());
    };

    match repo.delete_auction(auction_id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete auction: {e}");
            Err(ServiceError::Internal)
        }
    }
}
