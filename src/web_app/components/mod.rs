// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - product.rs: Catalog display (ProductCard, ProductList)
// - form.rs: Add and edit forms, image input, brand editor slot
// - dialog.rs: Delete confirmation and success notice

pub mod common;
pub mod dialog;
pub mod form;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use dialog::*;
pub use form::*;
pub use product::*;
