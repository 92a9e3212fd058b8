// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the session handle, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::AdminConfig;
use crate::web_app::pages::{AdminPanelPage, ProductManagerPage, SignInNotice};
use crate::web_app::session::SessionState;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The session handle shared by the pages
/// - Router with the admin routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let config = AdminConfig::from_env();
    let session = RwSignal::new(SessionState::new(config.assume_logged_in));

    let root_config = config.clone();
    let panel_config = config.clone();
    let products_config = config.clone();

    view! {
        // HTML meta tags
        <Title text="Catalog Admin" />
        <Meta name="description" content="Product catalog administration" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/catalog_admin.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <SignInNotice config=root_config.clone() session=session /> }
                    />
                    <Route
                        path=path!("/admin-panel")
                        view=move || view! { <AdminPanelPage config=panel_config.clone() /> }
                    />
                    <Route
                        path=path!("/admin-panel/products")
                        view=move || view! {
                            <ProductManagerPage config=products_config.clone() session=session />
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/admin-panel"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Admin Panel"
                </a>
            </div>
        </div>
    }
}
