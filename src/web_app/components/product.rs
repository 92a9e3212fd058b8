// web_app/components/product.rs - Product display components
//
// Components for displaying the catalog including:
// - ProductCard: Grid card, click opens the edit modal
// - ProductList: Spinner, empty message, or grid of cards

use leptos::prelude::*;
use crate::web_app::model::Product;
use crate::web_app::state::ListDisplay;
use super::common::Loading;

pub const EMPTY_MESSAGE: &str = "No products available.";

/// "Tags: a, b" line shown on each card
pub fn tags_caption(product: &Product) -> String {
    format!("Tags: {}", product.tags_text())
}

/// Product card for the catalog grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Click handler, receives a copy of the product
    on_select: Callback<Product>,
) -> impl IntoView {
    let caption = tags_caption(&product);
    let title = product.title.clone();
    let description = product.description.clone();
    let image = product.image.clone();

    view! {
        <div
            class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-xl \
                   transition-shadow duration-300 cursor-pointer"
            on:click=move |_| on_select.run(product.clone())
        >
            <img src=image alt=title.clone() class="w-full h-40 object-cover" />
            <div class="p-4">
                <h3 class="text-xl font-semibold text-gray-800">{title}</h3>
                <p class="text-gray-600 text-sm mt-1 line-clamp-2">{description}</p>
                <p class="text-xs text-gray-500 mt-2">{caption}</p>
            </div>
        </div>
    }
}

/// Product list area
///
/// Shows a spinner while loading, an explicit message when the catalog is
/// empty, and the card grid otherwise.
#[component]
pub fn ProductList(
    #[prop(into)]
    display: Signal<ListDisplay>,
    #[prop(into)]
    products: Signal<Vec<Product>>,
    on_select: Callback<Product>,
) -> impl IntoView {
    view! {
        <section>
            {move || match display.get() {
                ListDisplay::Spinner => view! {
                    <Loading message="Loading products..." />
                }.into_any(),
                ListDisplay::Empty => view! {
                    <p class="text-gray-500 text-center py-10">{EMPTY_MESSAGE}</p>
                }.into_any(),
                ListDisplay::Grid => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {products.get().into_iter().map(|product| view! {
                            <ProductCard product=product on_select=on_select />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_caption() {
        let product = Product {
            id: "1".to_string(),
            title: "Lamp".to_string(),
            tags: vec!["home".to_string(), "light".to_string()],
            ..Default::default()
        };
        assert_eq!(tags_caption(&product), "Tags: home, light");
    }

    #[test]
    fn test_tags_caption_without_tags() {
        assert_eq!(tags_caption(&Product::default()), "Tags: ");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(EMPTY_MESSAGE, "No products available.");
    }
}
