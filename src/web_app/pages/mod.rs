// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ProductManagerPage: List, add, edit and delete catalog products
// - AdminPanelPage / SignInNotice: Landing pages around it

pub mod admin;
pub mod products;

// Re-export page components
pub use admin::{AdminPanelPage, SignInNotice};
pub use products::ProductManagerPage;
