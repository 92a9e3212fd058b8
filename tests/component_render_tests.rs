// Component render tests
//
// Components are rendered to HTML inside a throwaway reactive owner and the
// output is checked for the texts a user would see. Interactive behavior is
// covered by the controller tests.

use leptos::prelude::*;

use catalog_admin::web_app::components::*;
use catalog_admin::web_app::model::{Product, SuccessNotice};
use catalog_admin::web_app::state::{ListDisplay, ProductListState};

fn render<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

fn lamp() -> Product {
    Product {
        id: "a1".to_string(),
        title: "Lamp".to_string(),
        description: "Desk lamp with a long arm".to_string(),
        image: "https://cdn.example/lamp.png".to_string(),
        tags: vec!["home".to_string(), "light".to_string()],
    }
}

// ===== Product display =====

#[test]
fn test_product_card_shows_fields() {
    let html = render(|| view! {
        <ProductCard product=lamp() on_select=Callback::new(|_: Product| {}) />
    });

    assert!(html.contains("Lamp"));
    assert!(html.contains("Desk lamp with a long arm"));
    assert!(html.contains("https://cdn.example/lamp.png"));
    assert!(html.contains("Tags: home, light"));
    assert!(html.contains("line-clamp-2"));
}

#[test]
fn test_product_list_spinner() {
    let html = render(|| view! {
        <ProductList
            display=Signal::stored(ListDisplay::Spinner)
            products=Signal::stored(vec![lamp()])
            on_select=Callback::new(|_: Product| {})
        />
    });

    assert!(html.contains("animate-spin"));
    assert!(!html.contains("Lamp"));
    assert!(!html.contains(EMPTY_MESSAGE));
}

#[test]
fn test_product_list_empty_message() {
    let html = render(|| view! {
        <ProductList
            display=Signal::stored(ListDisplay::Empty)
            products=Signal::stored(Vec::<Product>::new())
            on_select=Callback::new(|_: Product| {})
        />
    });

    assert!(html.contains("No products available."));
    assert!(!html.contains("animate-spin"));
}

#[test]
fn test_product_list_grid() {
    let mut rug = lamp();
    rug.id = "b2".to_string();
    rug.title = "Rug".to_string();

    let html = render(move || view! {
        <ProductList
            display=Signal::stored(ListDisplay::Grid)
            products=Signal::stored(vec![lamp(), rug])
            on_select=Callback::new(|_: Product| {})
        />
    });

    assert!(html.contains("Lamp"));
    assert!(html.contains("Rug"));
    assert!(!html.contains(EMPTY_MESSAGE));
}

// ===== Forms =====

#[test]
fn test_create_form_shows_preview_after_image() {
    let html = render(|| {
        let mut state = ProductListState::new();
        state.image_preview = Some("data:image/png;base64,AA==".to_string());
        let state = RwSignal::new(state);
        view! {
            <ProductCreateForm
                state=state
                on_submit=Callback::new(|_| {})
                on_image=Callback::new(|_| {})
            />
        }
    });

    assert!(html.contains("Add Product"));
    assert!(html.contains("data:image/png;base64,AA=="));
    assert!(html.contains("type=\"file\""));
}

#[test]
fn test_create_form_without_preview() {
    let html = render(|| {
        let state = RwSignal::new(ProductListState::new());
        view! {
            <ProductCreateForm
                state=state
                on_submit=Callback::new(|_| {})
                on_image=Callback::new(|_| {})
            />
        }
    });

    assert!(html.contains("Add Product"));
    assert!(!html.contains("alt=\"Preview\""));
}

#[test]
fn test_edit_form_renders_selection_and_brand_slot() {
    fn brand_editor(product: Product, _refresh: Callback<()>) -> AnyView {
        view! { <p>{format!("Brands of {}", product.title)}</p> }.into_any()
    }

    let html = render(|| {
        let mut state = ProductListState::new();
        state.select(lamp());
        let state = RwSignal::new(state);
        view! {
            <ProductEditForm
                state=state
                on_update=Callback::new(|_| {})
                on_delete=Callback::new(|_: String| {})
                on_image=Callback::new(|_| {})
                on_refresh=Callback::new(|_| {})
                brand_editor=Some(brand_editor as BrandEditor)
            />
        }
    });

    assert!(html.contains("Update"));
    assert!(html.contains("Delete"));
    assert!(html.contains("https://cdn.example/lamp.png"));
    assert!(html.contains("Brands of Lamp"));
}

#[test]
fn test_edit_form_without_brand_editor() {
    let html = render(|| {
        let mut state = ProductListState::new();
        state.select(lamp());
        let state = RwSignal::new(state);
        view! {
            <ProductEditForm
                state=state
                on_update=Callback::new(|_| {})
                on_delete=Callback::new(|_: String| {})
                on_image=Callback::new(|_| {})
                on_refresh=Callback::new(|_| {})
            />
        }
    });

    assert!(html.contains("Update"));
    assert!(!html.contains("Brands of"));
}

// ===== Dialogs =====

#[test]
fn test_delete_dialog_idle() {
    let html = render(|| view! {
        <DeleteConfirmDialog
            deleting=Signal::stored(false)
            on_confirm=Callback::new(|_| {})
            on_cancel=Callback::new(|_| {})
        />
    });

    assert!(html.contains("Delete Product"));
    assert!(html.contains("Cancel"));
    assert!(!html.contains("Deleting..."));
}

#[test]
fn test_delete_dialog_busy() {
    let html = render(|| view! {
        <DeleteConfirmDialog
            deleting=Signal::stored(true)
            on_confirm=Callback::new(|_| {})
            on_cancel=Callback::new(|_| {})
        />
    });

    assert!(html.contains("Deleting..."));
}

#[test]
fn test_success_dialog_added() {
    let html = render(|| view! {
        <SuccessDialog notice=SuccessNotice::Added on_close=Callback::new(|_| {}) />
    });

    assert!(html.contains("Product Added!"));
    assert!(html.contains(SuccessNotice::Added.detail()));
    assert!(html.contains("Close"));
}

#[test]
fn test_success_dialog_updated() {
    let html = render(|| view! {
        <SuccessDialog notice=SuccessNotice::Updated on_close=Callback::new(|_| {}) />
    });

    assert!(html.contains("Product Updated!"));
    assert!(!html.contains("Product Added!"));
}

// ===== Common components =====

#[test]
fn test_error_display() {
    let html = render(|| view! {
        <ErrorDisplay error="invalid API base URL".to_string() />
    });

    assert!(html.contains("Error Occurred"));
    assert!(html.contains("invalid API base URL"));
}

#[test]
fn test_loading_message() {
    let html = render(|| view! { <Loading message="Loading products..." /> });

    assert!(html.contains("Loading products..."));
}
