use diesel::prelude::*;

use crate::domain::auction::{Auction, NewAuction};
use crate::domain::types::AuctionId;
use crate::models::auction::{Auction as DbAuction, NewAuction as DbNewAuction};
use crate::models::category::Category as DbCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AuctionListQuery, AuctionReader, AuctionWriter, DieselRepository};

impl AuctionReader for DieselRepository {
    fn list_auctions(&self, query: AuctionListQuery) -> RepositoryResult<Vec<Auction>> {
        use crate::schema::{auctions, categories};

        let mut conn = self.conn()?;

        let mut items = auctions::table
            .inner_join(categories::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(search) = &query.search {
            // SQLite LIKE is ASCII case-insensitive, matching the
            // case-insensitive search contract.
            let pattern = format!("%{search}%");
            items = items.filter(
                auctions::name
                    .like(pattern.clone())
                    .or(auctions::description.like(pattern)),
            );
        }

        if let Some(category_id) = query.category_id {
            items = items.filter(auctions::category_id.eq(category_id.get()));
        }

        let items = items
            .order(auctions::id.asc())
            .load::<(DbAuction, DbCategory)>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Auction>, _>>()?;

        Ok(items)
    }

    fn get_auction_by_id(&self, id: AuctionId) -> RepositoryResult<Option<Auction>> {
        use crate::schema::{auctions, categories};

        let mut conn = self.conn()?;

        let auction = auctions::table
            .inner_join(categories::table)
            .filter(auctions::id.eq(id.get()))
            .first::<(DbAuction, DbCategory)>(&mut conn)
            .optional()?;

        let auction = auction.map(TryInto::try_into).transpose()?;
        Ok(auction)
    }
}

impl AuctionWriter for DieselRepository {
    fn create_auction(&self, auction: &NewAuction) -> RepositoryResult<Auction> {
        use crate::schema::{auctions, categories};

        let mut conn = self.conn()?;
        let db_auction: DbNewAuction = auction.clone().into();

        let created = conn.transaction(|conn| {
            let row = diesel::insert_into(auctions::table)
                .values(&db_auction)
                .get_result::<DbAuction>(conn)?;
            let category = categories::table
                .find(row.category_id)
                .first::<DbCategory>(conn)?;
            Ok::<_, diesel::result::Error>((row, category))
        })?;

        Ok(created.try_into()?)
    }

    fn update_auction(
        &self,
        id: AuctionId,
        auction: &NewAuction,
    ) -> RepositoryResult<Option<Auction>> {
        use crate::schema::{auctions, categories};

        let mut conn = self.conn()?;
        let db_auction: DbNewAuction = auction.clone().into();

        let updated = conn.transaction(|conn| {
            let row = diesel::update(auctions::table.find(id.get()))
                .set(&db_auction)
                .get_result::<DbAuction>(conn)
                .optional()?;

            match row {
                Some(row) => {
                    let category = categories::table
                        .find(row.category_id)
                        .first::<DbCategory>(conn)?;
                    Ok::<_, diesel::result::Error>(Some((row, category)))
                }
                None => Ok(None),
            }
        })?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_auction(&self, id: AuctionId) -> RepositoryResult<usize> {
        use crate::schema::auctions;

        let mut conn = self.conn()?;

        let affected = diesel::delete(auctions::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
