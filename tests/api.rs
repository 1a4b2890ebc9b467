//! Integration tests exercising the HTTP surface end to end: basic auth,
//! validation, persistence and the problem-details error mapping.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};

use auctions_service::dto::auctions::AuctionDto;
use auctions_service::repository::DieselRepository;
use auctions_service::routes;
use auctions_service::routes::problem::ProblemDetail;

mod common;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .app_data(common::auth_config())
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn finds_auction_by_query() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    common::seed_auction(&repo, "Sprzedam Opla", "Opla sprzedam, pierwszy wlasciciel");
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/auctions/search?query=opla%20sprzedam")
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let auctions: Vec<AuctionDto> = test::read_body_json(resp).await;
    assert_eq!(auctions.len(), 1);
    assert_eq!(auctions[0].name, "Sprzedam Opla");
}

#[actix_web::test]
async fn search_without_match_returns_empty_list() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    common::seed_auction(&repo, "Sprzedam Opla", "test description");
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/auctions/search?query=yacht")
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let auctions: Vec<AuctionDto> = test::read_body_json(resp).await;
    assert!(auctions.is_empty());
}

#[actix_web::test]
async fn adds_auction_to_db() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/auctions")
        .insert_header(common::basic_auth_header())
        .set_json(serde_json::json!({
            "name": "test auction",
            "startingPrice": 1.0,
            "currentPrice": 1.0,
            "description": "test description",
            "createdAt": "2024-06-01T12:00:00",
            "category": {"name": "Moto"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let created: AuctionDto = test::read_body_json(resp).await;
    assert!(created.id > 0);
    assert_eq!(created.name, "test auction");
    assert_eq!(created.category.name, "Moto");
}

#[actix_web::test]
async fn returns_400_for_not_existing_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/auctions")
        .insert_header(common::basic_auth_header())
        .set_json(serde_json::json!({
            "name": "test auction",
            "startingPrice": 1.0,
            "currentPrice": 1.0,
            "description": "test description",
            "category": {"name": "Non Existing Category"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "type": "about:blank",
            "title": "Bad Request",
            "status": 400,
            "detail": "Category Non Existing Category not exist",
            "instance": "/auctions"
        })
    );
}

#[actix_web::test]
async fn returns_400_for_starting_price_below_minimum() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/auctions")
        .insert_header(common::basic_auth_header())
        .set_json(serde_json::json!({
            "name": "test auction",
            "startingPrice": -1.0,
            "currentPrice": 1.0,
            "description": "test description",
            "category": {"name": "Moto"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ProblemDetail = test::read_body_json(resp).await;
    assert_eq!(problem.problem_type, "about:blank");
    assert_eq!(problem.title, "Bad Request");
    assert_eq!(problem.status, 400);
    assert_eq!(problem.instance, "/auctions");
    assert!(problem.detail.contains("starting_price"));
}

#[actix_web::test]
async fn deletes_auction() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let auction = common::seed_auction(&repo, "Sprzedam Opla", "test description");
    let app = test_app!(repo);

    let req = test::TestRequest::delete()
        .uri(&format!("/auctions/{}", auction.id))
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    // Deleting the same id again is a no-op.
    let req = test::TestRequest::delete()
        .uri(&format!("/auctions/{}", auction.id))
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn updates_auction() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let auction = common::seed_auction(&repo, "Sprzedam Opla", "test description");
    let app = test_app!(repo);

    let req = test::TestRequest::put()
        .uri(&format!("/auctions/{}", auction.id))
        .insert_header(common::basic_auth_header())
        .set_json(serde_json::json!({
            "name": "Updated",
            "startingPrice": 10.0,
            "currentPrice": 1.0,
            "description": "test description",
            "category": {"name": "Moto"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: AuctionDto = test::read_body_json(resp).await;
    assert_eq!(updated.name, "Updated");
    assert_eq!(updated.starting_price, 10.0);
    assert_eq!(updated.id, auction.id.get());
}

#[actix_web::test]
async fn returns_404_when_updating_unknown_id() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::put()
        .uri("/auctions/999")
        .insert_header(common::basic_auth_header())
        .set_json(serde_json::json!({
            "name": "Updated",
            "startingPrice": 10.0,
            "currentPrice": 1.0,
            "description": "test description",
            "category": {"name": "Moto"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "type": "about:blank",
            "title": "Not Found",
            "status": 404,
            "detail": "Auction 999 not exist",
            "instance": "/auctions/999"
        })
    );
}

#[actix_web::test]
async fn lists_auctions_for_existing_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    common::seed_auction(&repo, "Sprzedam Opla", "test description");
    common::seed_auction(&repo, "Kawasaki", "test description");
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/auctions/searchByCategory?category=moto")
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let auctions: Vec<AuctionDto> = test::read_body_json(resp).await;
    assert_eq!(auctions.len(), 2);
}

#[actix_web::test]
async fn returns_empty_list_for_category_without_auctions() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    common::seed_auction(&repo, "Sprzedam Opla", "test description");
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/auctions/searchByCategory?category=tools")
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let auctions: Vec<AuctionDto> = test::read_body_json(resp).await;
    assert_eq!(auctions.len(), 0);
}

#[actix_web::test]
async fn returns_400_for_unknown_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/auctions/searchByCategory?category=wrongCategory")
        .insert_header(common::basic_auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ProblemDetail = test::read_body_json(resp).await;
    assert_eq!(problem.detail, "Category wrongCategory not exist");
    assert_eq!(problem.instance, "/auctions/searchByCategory");
}

#[actix_web::test]
async fn rejects_requests_without_credentials() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/auctions/search?query=opla")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key("www-authenticate"));
}

#[actix_web::test]
async fn rejects_requests_with_wrong_password() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    use base64::Engine;
    let header = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("user:wrong")
    );
    let req = test::TestRequest::get()
        .uri("/auctions/search?query=opla")
        .insert_header(("Authorization", header))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
