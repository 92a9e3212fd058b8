// web_app/pages/products.rs - Product manager page
//
// Composes the add form, catalog grid, edit modal and dialogs around one
// RwSignal<ProductListState>. All network work goes through the controller.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::File;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::web_app::api::HttpCatalogClient;
use crate::web_app::components::*;
use crate::web_app::config::AdminConfig;
use crate::web_app::controller::ProductListController;
use crate::web_app::model::{ImageTarget, Product};
use crate::web_app::session::{MountAction, SessionState};
use crate::web_app::state::ProductListState;

pub const PAGE_TITLE: &str = "Product Manager";

type PageController = ProductListController<HttpCatalogClient, RwSignal<ProductListState>>;

/// Product manager page
///
/// Redirects to the root path when the session is not logged in. Shows a
/// configuration error instead of the manager when the API base URL does
/// not parse.
#[component]
pub fn ProductManagerPage(
    config: AdminConfig,
    #[prop(into)]
    session: Signal<SessionState>,
    #[prop(optional)]
    brand_editor: Option<BrandEditor>,
) -> impl IntoView {
    match HttpCatalogClient::new(&config.api_base_url) {
        Ok(client) => {
            tracing::debug!("Product manager using {}", client.base_url());
            view! {
                <ProductManager
                    client=Arc::new(client)
                    config=config
                    session=session
                    brand_editor=brand_editor
                />
            }
            .into_any()
        }
        Err(e) => {
            tracing::error!("Catalog client not available: {}", e);
            view! {
                <div class="max-w-3xl mx-auto p-8">
                    <ErrorDisplay error=e.to_string() />
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ProductManager(
    client: Arc<HttpCatalogClient>,
    config: AdminConfig,
    session: Signal<SessionState>,
    brand_editor: Option<BrandEditor>,
) -> impl IntoView {
    let state = RwSignal::new(ProductListState::new());
    let ctrl: PageController = ProductListController::new(client, state);

    // Session check and first fetch, client side only
    let navigate = use_navigate();
    let root_path = config.root_path.clone();
    let mount_ctrl = ctrl.clone();
    Effect::new(move |_| {
        let session = session.get();
        let ctrl = mount_ctrl.clone();
        let root_path = root_path.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let MountAction::Redirect(path) = ctrl.mount(session, &root_path).await {
                navigate(&path, Default::default());
            }
        });
    });

    // Handlers
    let on_submit = {
        let ctrl = ctrl.clone();
        Callback::new(move |()| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.create().await });
        })
    };

    let on_update = {
        let ctrl = ctrl.clone();
        Callback::new(move |()| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.update().await });
        })
    };

    let on_refresh = {
        let ctrl = ctrl.clone();
        Callback::new(move |()| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.load().await });
        })
    };

    let on_confirm_delete = {
        let ctrl = ctrl.clone();
        Callback::new(move |()| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.confirm_delete().await });
        })
    };

    let image_handler = |target: ImageTarget| {
        let ctrl = ctrl.clone();
        Callback::new(move |file: File| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.apply_image_file(target, file).await });
        })
    };
    let on_draft_image = image_handler(ImageTarget::Draft);
    let on_selection_image = image_handler(ImageTarget::Selection);

    let on_request_delete = {
        let ctrl = ctrl.clone();
        Callback::new(move |id: String| ctrl.request_delete(id))
    };
    let on_cancel_delete = {
        let ctrl = ctrl.clone();
        Callback::new(move |()| ctrl.cancel_delete())
    };

    let on_select = Callback::new(move |product: Product| state.update(|s| s.select(product)));
    let on_close_edit = Callback::new(move |()| state.update(|s| s.deselect()));
    let on_dismiss_notice = Callback::new(move |()| state.update(|s| s.dismiss_notice()));

    // Derived view state
    let display = Signal::derive(move || state.with(|s| s.list_display()));
    let products = Signal::derive(move || state.with(|s| s.products.clone()));
    let editing = Signal::derive(move || state.with(|s| s.is_editing()));
    let delete_open = Signal::derive(move || state.with(|s| s.delete.is_open()));
    let deleting = Signal::derive(move || state.with(|s| s.delete.is_deleting()));
    let notice = Signal::derive(move || state.with(|s| s.notice));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-4">
                    <A href=config.admin_panel_path.clone()>
                        <span class="text-blue-600 hover:text-blue-800 font-medium">"← Back"</span>
                    </A>
                    <h1 class="text-xl font-bold text-gray-800">{PAGE_TITLE}</h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <ProductCreateForm
                    state=state
                    on_submit=on_submit
                    on_image=on_draft_image
                />

                <ProductList
                    display=display
                    products=products
                    on_select=on_select
                />
            </main>

            <Show when=move || editing.get()>
                <ModalWrapper on_close=on_close_edit title="Edit Product">
                    <ProductEditForm
                        state=state
                        on_update=on_update
                        on_delete=on_request_delete
                        on_image=on_selection_image
                        on_refresh=on_refresh
                        brand_editor=brand_editor
                    />
                </ModalWrapper>
            </Show>

            <Show when=move || delete_open.get()>
                <DeleteConfirmDialog
                    deleting=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>

            {move || notice.get().map(|notice| view! {
                <SuccessDialog notice=notice on_close=on_dismiss_notice />
            })}
        </div>
    }
}
