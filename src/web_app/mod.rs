// web_app/mod.rs - Root module for the Leptos admin application
//
// This module contains the product manager screen of the catalog admin UI.
//
// Architecture:
// - model/: Catalog data types (Product, DraftProduct, NewProduct, notices)
// - config.rs: Admin configuration (API base URL, navigation paths)
// - error.rs: Error type for REST and file-reading failures
// - session.rs: Explicit logged-in handle and the mount decision
// - image.rs: Data URI encoding for chosen image files
// - api/: REST client for the catalog API
// - state.rs: Plain view state and its transitions
// - controller.rs: Async orchestration of load/create/update/delete
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod error;
pub mod session;
pub mod image;
pub mod api;
pub mod state;
pub mod controller;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod logging;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
