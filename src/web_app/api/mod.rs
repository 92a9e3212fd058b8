// web_app/api/mod.rs - Catalog API access
//
// This module contains the REST client used by the product manager. The
// API itself (and its persistence) is an external service.

pub mod client;

pub use client::{CatalogApi, HttpCatalogClient};
