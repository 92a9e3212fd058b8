// web_app/controller.rs - Async orchestration for the product manager
//
// Each user action that needs the network is one method here. Failures are
// logged and swallowed (no retry, no user-facing error); the loading and
// deleting indicators always clear. Every successful mutation is followed
// by exactly one full refetch of the list.

use std::sync::Arc;

use crate::web_app::api::CatalogApi;
use crate::web_app::model::{ImageTarget, SuccessNotice};
use crate::web_app::session::{MountAction, SessionState};
use crate::web_app::state::StateHandle;

/// Drives a [`StateHandle`] against a [`CatalogApi`]
pub struct ProductListController<C: ?Sized, S> {
    client: Arc<C>,
    state: S,
}

impl<C: ?Sized, S: Clone> Clone for ProductListController<C, S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: self.state.clone(),
        }
    }
}

impl<C, S> ProductListController<C, S>
where
    C: CatalogApi + ?Sized,
    S: StateHandle,
{
    pub fn new(client: Arc<C>, state: S) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Runs the session check and, when allowed, the initial fetch.
    ///
    /// The redirect decision is returned before any request is made.
    pub async fn mount(&self, session: SessionState, root_path: &str) -> MountAction {
        let action = session.mount_action(root_path);
        if action == MountAction::Load {
            self.load().await;
        }
        action
    }

    /// Fetches the full product list.
    pub async fn load(&self) {
        self.state.update_state(|s| s.begin_load());

        let products = match self.client.list_products().await {
            Ok(products) => Some(products),
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                None
            }
        };

        self.state.update_state(|s| s.finish_load(products));
    }

    /// Submits the add form with normalized tags.
    pub async fn create(&self) {
        let payload = self.state.read_state(|s| s.draft.to_new_product());

        match self.client.create_product(&payload).await {
            Ok(()) => {
                tracing::info!("Product created: {}", payload.title);
                self.state.update_state(|s| s.clear_draft());
                self.load().await;
                self.state.update_state(|s| s.show_notice(SuccessNotice::Added));
            }
            Err(e) => tracing::error!("Error adding product: {}", e),
        }
    }

    /// Saves the product open in the edit modal.
    pub async fn update(&self) {
        let Some(product) = self.state.read_state(|s| s.selected.clone()) else {
            tracing::debug!("Update requested with no product selected");
            return;
        };

        match self.client.update_product(&product).await {
            Ok(()) => {
                tracing::info!("Product updated: {}", product.id);
                self.load().await;
                self.state.update_state(|s| {
                    s.deselect();
                    s.show_notice(SuccessNotice::Updated);
                });
            }
            Err(e) => tracing::error!("Error updating product {}: {}", product.id, e),
        }
    }

    /// Stages `id` for deletion; no request is made until confirmed.
    pub fn request_delete(&self, id: String) {
        self.state.update_state(|s| s.request_delete(id));
    }

    /// Drops the staged id. Has no effect once the DELETE is in flight.
    pub fn cancel_delete(&self) {
        self.state.update_state(|s| {
            if let Some(id) = s.delete.staged_id() {
                tracing::debug!("Cancel requested for delete of {}", id);
            }
            s.cancel_delete();
        });
    }

    /// Deletes the staged product.
    pub async fn confirm_delete(&self) {
        let mut staged = None;
        self.state.update_state(|s| staged = s.begin_delete());
        let Some(id) = staged else {
            return;
        };

        match self.client.delete_product(&id).await {
            Ok(()) => {
                tracing::info!("Product deleted: {}", id);
                self.load().await;
            }
            Err(e) if e.status() == Some(404) => {
                tracing::warn!("Product {} was already gone: {}", id, e)
            }
            Err(e) => tracing::error!("Error deleting product {}: {}", id, e),
        }

        self.state.update_state(|s| s.finish_delete());
    }

    /// Stores an already encoded image on the named form.
    pub fn apply_image(&self, target: ImageTarget, data_uri: String) {
        self.state.update_state(|s| {
            s.apply_image(target, data_uri);
        });
    }

    /// Reads a chosen file and stores it on the named form.
    #[cfg(any(feature = "ssr", feature = "hydrate"))]
    pub async fn apply_image_file(&self, target: ImageTarget, file: web_sys::File) {
        match crate::web_app::image::read_file_as_data_uri(&file).await {
            Ok(data_uri) => self.apply_image(target, data_uri),
            Err(e) => tracing::error!("Error reading image for {}: {}", target, e),
        }
    }
}
