// web_app/state.rs - Product manager view state
//
// Every piece of local UI state lives in one plain struct. The four state
// machines are independent:
// - list:    idle | loading
// - modal:   closed | editing (selection present)
// - delete:  closed | confirming | deleting
// - banner:  hidden | shown
//
// Transitions here are synchronous and never touch the network; see
// `controller.rs` for the async orchestration.

use std::cell::RefCell;
use std::rc::Rc;

use crate::web_app::model::{DraftProduct, ImageTarget, Product, SuccessNotice};

/// Two-step delete confirmation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Closed,
    /// Id staged, confirmation dialog visible
    Confirming(String),
    /// Delete request in flight (busy indicator)
    Deleting(String),
}

impl DeleteFlow {
    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteFlow::Closed)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteFlow::Deleting(_))
    }

    pub fn staged_id(&self) -> Option<&str> {
        match self {
            DeleteFlow::Closed => None,
            DeleteFlow::Confirming(id) | DeleteFlow::Deleting(id) => Some(id),
        }
    }
}

/// What the product list area shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListDisplay {
    Spinner,
    /// Explicit "no products" message instead of an empty grid
    Empty,
    Grid,
}

/// All local state of the product manager screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub draft: DraftProduct,
    /// Preview of the add form's image; the edit modal previews
    /// `selected.image` directly
    pub image_preview: Option<String>,
    pub selected: Option<Product>,
    pub delete: DeleteFlow,
    pub notice: Option<SuccessNotice>,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            // The first fetch starts as soon as the page mounts
            loading: true,
            draft: DraftProduct::default(),
            image_preview: None,
            selected: None,
            delete: DeleteFlow::Closed,
            notice: None,
        }
    }
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once loading finished with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.products.is_empty()
    }

    pub fn list_display(&self) -> ListDisplay {
        if self.loading {
            ListDisplay::Spinner
        } else if self.is_empty() {
            ListDisplay::Empty
        } else {
            ListDisplay::Grid
        }
    }

    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    // ----- list -----

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, products: Option<Vec<Product>>) {
        if let Some(products) = products {
            self.products = products;
        }
        self.loading = false;
    }

    // ----- add form -----

    pub fn set_draft_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_draft_description(&mut self, description: String) {
        self.draft.description = description;
    }

    pub fn set_draft_tags(&mut self, tags: String) {
        self.draft.tags = tags;
    }

    /// Resets the add form after a successful create.
    pub fn clear_draft(&mut self) {
        self.draft = DraftProduct::default();
        self.image_preview = None;
    }

    // ----- edit modal -----

    pub fn select(&mut self, product: Product) {
        tracing::debug!("Selected product {}", product.id);
        self.selected = Some(product);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Applies `edit` to the selected product, if any.
    pub fn edit_selected(&mut self, edit: impl FnOnce(&mut Product)) {
        if let Some(product) = self.selected.as_mut() {
            edit(product);
        }
    }

    pub fn set_selected_title(&mut self, title: String) {
        self.edit_selected(|p| p.title = title);
    }

    pub fn set_selected_description(&mut self, description: String) {
        self.edit_selected(|p| p.description = description);
    }

    /// Normalizes the tag field in place on every change.
    pub fn set_selected_tags(&mut self, raw: &str) {
        self.edit_selected(|p| p.set_tags_from_text(raw));
    }

    // ----- image -----

    /// Stores an encoded image on the named form.
    ///
    /// Returns false when the target is the edit modal but nothing is
    /// selected; the state is then left untouched.
    pub fn apply_image(&mut self, target: ImageTarget, data_uri: String) -> bool {
        match target {
            ImageTarget::Draft => {
                self.draft.image = data_uri.clone();
                self.image_preview = Some(data_uri);
            }
            ImageTarget::Selection => match self.selected.as_mut() {
                Some(product) => product.image = data_uri,
                None => {
                    tracing::warn!("Image chosen for edit form with no product selected");
                    return false;
                }
            },
        }
        true
    }

    // ----- delete -----

    /// Stages `id`; ignored while another delete is in flight.
    pub fn request_delete(&mut self, id: String) {
        if self.delete.is_deleting() {
            tracing::debug!("Delete of {} ignored, another delete is running", id);
            return;
        }
        tracing::debug!("Delete requested for product {}", id);
        self.delete = DeleteFlow::Confirming(id);
    }

    /// Discards the staged id. A running delete cannot be cancelled.
    pub fn cancel_delete(&mut self) {
        if let DeleteFlow::Deleting(id) = &self.delete {
            tracing::debug!("Cancel ignored, delete of {} is running", id);
            return;
        }
        self.delete = DeleteFlow::Closed;
    }

    /// Moves a staged delete into the in-flight state and returns its id.
    ///
    /// `None` when nothing is staged or a delete is already running.
    pub fn begin_delete(&mut self) -> Option<String> {
        match std::mem::take(&mut self.delete) {
            DeleteFlow::Confirming(id) => {
                self.delete = DeleteFlow::Deleting(id.clone());
                Some(id)
            }
            other => {
                self.delete = other;
                None
            }
        }
    }

    /// Closes the dialog and the edit modal whatever the delete outcome.
    pub fn finish_delete(&mut self) {
        self.delete = DeleteFlow::Closed;
        self.selected = None;
    }

    // ----- banner -----

    pub fn show_notice(&mut self, notice: SuccessNotice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Shared access to a [`ProductListState`]
///
/// The controller only touches state through short closures so no borrow is
/// held across an await.
pub trait StateHandle: Clone {
    fn read_state<R>(&self, f: impl FnOnce(&ProductListState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut ProductListState));
}

impl StateHandle for Rc<RefCell<ProductListState>> {
    fn read_state<R>(&self, f: impl FnOnce(&ProductListState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut ProductListState)) {
        f(&mut self.borrow_mut());
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl StateHandle for leptos::prelude::RwSignal<ProductListState> {
    fn read_state<R>(&self, f: impl FnOnce(&ProductListState) -> R) -> R {
        use leptos::prelude::WithUntracked;
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut ProductListState)) {
        use leptos::prelude::Update;
        self.update(f);
    }
}
