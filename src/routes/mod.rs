use actix_web::web;

pub mod auctions;
pub mod problem;

/// Wire the auction routes into an actix application.
///
/// Used by both `main` and the integration tests so the tested surface is
/// exactly the served one.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auctions")
            .service(auctions::search_auctions)
            .service(auctions::search_by_category)
            .service(auctions::create_auction)
            .service(auctions::update_auction)
            .service(auctions::delete_auction),
    );
}
