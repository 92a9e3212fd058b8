// web_app/pages/admin.rs - Landing pages around the product manager

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::config::AdminConfig;
use crate::web_app::session::SessionState;

/// Admin panel landing page
#[component]
pub fn AdminPanelPage(config: AdminConfig) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="bg-white rounded-xl shadow-md p-10 text-center">
                <h1 class="text-3xl font-bold text-gray-800 mb-6">"Admin Panel"</h1>
                <A href=config.products_path>
                    <span class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors">
                        "Manage Products"
                    </span>
                </A>
            </div>
        </div>
    }
}

/// Root page; unauthenticated visitors are sent here
#[component]
pub fn SignInNotice(
    config: AdminConfig,
    #[prop(into)]
    session: Signal<SessionState>,
) -> impl IntoView {
    let admin_panel_path = config.admin_panel_path;

    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-700 mb-4">"Catalog Admin"</h1>
                <Show
                    when=move || session.get().is_logged_in()
                    fallback=|| view! {
                        <p class="text-lg text-gray-600">"Please sign in to manage the catalog."</p>
                    }
                >
                    <A href=admin_panel_path.clone()>
                        <span class="text-blue-600 hover:text-blue-800 font-medium">"Go to Admin Panel"</span>
                    </A>
                </Show>
            </div>
        </div>
    }
}
