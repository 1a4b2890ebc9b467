use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::auth::BasicAuthUser;
use crate::forms::auctions::{AuctionForm, AuctionFormPayload};
use crate::repository::DieselRepository;
use crate::routes::problem::ProblemDetail;
use crate::services::ServiceError;
use crate::services::auctions::{
    create_auction as create_auction_service, delete_auction as delete_auction_service,
    search_auctions as search_auctions_service, search_by_category as search_by_category_service,
    update_auction as update_auction_service,
};

#[derive(Deserialize, Debug)]
struct SearchQueryParams {
    query: String,
}

#[derive(Deserialize, Debug)]
struct SearchByCategoryQueryParams {
    category: String,
}

fn error_response(err: ServiceError, instance: &str) -> HttpResponse {
    match &err {
        ServiceError::CategoryNotFound(_) => {
            HttpResponse::BadRequest().json(ProblemDetail::bad_request(err.to_string(), instance))
        }
        ServiceError::AuctionNotFound(_) => {
            HttpResponse::NotFound().json(ProblemDetail::not_found(err.to_string(), instance))
        }
        ServiceError::Internal => HttpResponse::InternalServerError().json(
            ProblemDetail::internal_server_error(err.to_string(), instance),
        ),
    }
}

#[get("/search")]
pub async fn search_auctions(
    _user: BasicAuthUser,
    params: web::Query<SearchQueryParams>,
    repo: web::Data<DieselRepository>,
    req: HttpRequest,
) -> impl Responder {
    match search_auctions_service(&params.query, repo.get_ref()) {
        Ok(auctions) => HttpResponse::Ok().json(auctions),
        Err(err) => error_response(err, req.path()),
    }
}

#[get("/searchByCategory")]
pub async fn search_by_category(
    _user: BasicAuthUser,
    params: web::Query<SearchByCategoryQueryParams>,
    repo: web::Data<DieselRepository>,
    req: HttpRequest,
) -> impl Responder {
    match search_by_category_service(&params.category, repo.get_ref()) {
        Ok(auctions) => HttpResponse::Ok().json(auctions),
        Err(err) => error_response(err, req.path()),
    }
}

#[post("")]
pub async fn create_auction(
    _user: BasicAuthUser,
    repo: web::Data<DieselRepository>,
    req: HttpRequest,
    web::Json(form): web::Json<AuctionForm>,
) -> impl Responder {
    let payload: AuctionFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(ProblemDetail::bad_request(e.to_string(), req.path()));
        }
    };

    match create_auction_service(payload, repo.get_ref()) {
        Ok(auction) => HttpResponse::Ok().json(auction),
        Err(err) => error_response(err, req.path()),
    }
}

#[put("/{auction_id}")]
pub async fn update_auction(
    _user: BasicAuthUser,
    auction_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    req: HttpRequest,
    web::Json(form): web::Json<AuctionForm>,
) -> impl Responder {
    let payload: AuctionFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(ProblemDetail::bad_request(e.to_string(), req.path()));
        }
    };

    match update_auction_service(auction_id.into_inner(), payload, repo.get_ref()) {
        Ok(auction) => HttpResponse::Ok().json(auction),
        Err(err) => error_response(err, req.path()),
    }
}

#[delete("/{auction_id}")]
pub async fn delete_auction(
    _user: BasicAuthUser,
    auction_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    req: HttpRequest,
) -> impl Responder {
    match delete_auction_service(auction_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, req.path()),
    }
}
