//! Core library exports for the auctions service.
//!
//! This crate exposes the auth gate, domain types, forms, models,
//! repositories, routes and service layers used by the auctions HTTP API.

pub mod auth;
pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
