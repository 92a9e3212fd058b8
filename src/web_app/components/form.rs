// web_app/components/form.rs - Product forms
//
// - ProductCreateForm: the "add" form bound to the draft
// - ProductEditForm: body of the edit modal bound to the selection
// - ImageInput: single-file picker feeding either form
//
// Both forms are views over one RwSignal<ProductListState>; they write
// field edits straight into it and leave network work to the page.

use leptos::prelude::*;
use leptos::web_sys::{File, HtmlInputElement};

use crate::web_app::model::Product;
use crate::web_app::state::ProductListState;
use super::common::{Button, Field, TextArea, TextInput};

/// Renders the nested brand editor for the product open in the edit modal.
///
/// Receives a copy of the selected product and a callback that refetches
/// the catalog after the brand editor saved something.
pub type BrandEditor = fn(Product, Callback<()>) -> AnyView;

/// File input that reports the first chosen file
#[component]
pub fn ImageInput(on_file: Callback<File>) -> impl IntoView {
    view! {
        <input
            type="file"
            accept="image/*"
            class="block w-full text-sm text-gray-600 file:mr-4 file:py-2 file:px-4 \
                   file:rounded-lg file:border-0 file:bg-blue-50 file:text-blue-700"
            on:change=move |ev| {
                let input = event_target::<HtmlInputElement>(&ev);
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    on_file.run(file);
                }
            }
        />
    }
}

/// The "add product" form
#[component]
pub fn ProductCreateForm(
    state: RwSignal<ProductListState>,
    /// Submits the draft
    on_submit: Callback<()>,
    /// Receives the chosen image file
    on_image: Callback<File>,
) -> impl IntoView {
    let title = Signal::derive(move || state.with(|s| s.draft.title.clone()));
    let description = Signal::derive(move || state.with(|s| s.draft.description.clone()));
    let tags = Signal::derive(move || state.with(|s| s.draft.tags.clone()));
    let preview = Signal::derive(move || state.with(|s| s.image_preview.clone()));

    view! {
        <div class="bg-white rounded-xl shadow-md p-6 mb-8 flex flex-col gap-4">
            <TextInput
                value=title
                placeholder="Title"
                on_input=Callback::new(move |v| state.update(|s| s.set_draft_title(v)))
            />
            <TextArea
                value=description
                on_input=Callback::new(move |v| state.update(|s| s.set_draft_description(v)))
            />
            <ImageInput on_file=on_image />
            <TextInput
                value=tags
                placeholder="Tags (comma separated)"
                on_input=Callback::new(move |v| state.update(|s| s.set_draft_tags(v)))
            />
            {move || preview.get().map(|src| view! {
                <img src=src alt="Preview" class="h-32 w-32 object-cover rounded-lg" />
            })}
            <div>
                <Button on_click=on_submit>"Add Product"</Button>
            </div>
        </div>
    }
}

/// Edit modal body for the selected product
#[component]
pub fn ProductEditForm(
    state: RwSignal<ProductListState>,
    /// Saves the selection
    on_update: Callback<()>,
    /// Stages the given id for deletion
    on_delete: Callback<String>,
    on_image: Callback<File>,
    /// Refetches the catalog, handed to the brand editor
    on_refresh: Callback<()>,
    #[prop(default = None)]
    brand_editor: Option<BrandEditor>,
) -> impl IntoView {
    let field = move |get: fn(&Product) -> String| {
        Signal::derive(move || {
            state.with(|s| s.selected.as_ref().map(get).unwrap_or_default())
        })
    };
    let title = field(|p| p.title.clone());
    let description = field(|p| p.description.clone());
    let image = field(|p| p.image.clone());
    let tags = field(Product::tags_text);

    // The brand editor is rebuilt only when a different product is opened,
    // not on every keystroke in the fields above.
    let selected_id = Memo::new(move |_| {
        state.with(|s| s.selected.as_ref().map(|p| p.id.clone()))
    });

    let delete_selected = move |_| {
        if let Some(id) = selected_id.get_untracked() {
            on_delete.run(id);
        }
    };

    view! {
        <div>
            <Field label="Title">
                <TextInput
                    value=title
                    class="w-full"
                    on_input=Callback::new(move |v| state.update(|s| s.set_selected_title(v)))
                />
            </Field>
            <Field label="Description">
                <TextArea
                    value=description
                    rows=4
                    on_input=Callback::new(move |v| state.update(|s| s.set_selected_description(v)))
                />
            </Field>
            <Field label="Image">
                <ImageInput on_file=on_image />
                <Show when=move || !image.get().is_empty()>
                    <img src=move || image.get() alt="Preview" class="mt-2 h-32 w-32 object-cover rounded-lg" />
                </Show>
            </Field>
            <Field label="Tags">
                <TextInput
                    value=tags
                    class="w-full"
                    on_input=Callback::new(move |v: String| state.update(|s| s.set_selected_tags(&v)))
                />
            </Field>
            <div class="flex gap-3 mt-6">
                <Button on_click=on_update>"Update"</Button>
                <button
                    type="button"
                    class="px-6 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 font-medium"
                    on:click=delete_selected
                >
                    "Delete"
                </button>
            </div>
            {move || {
                selected_id.track();
                let editor = brand_editor?;
                let product = state.with_untracked(|s| s.selected.clone())?;
                Some(view! {
                    <div class="mt-8 border-t pt-6">{editor(product, on_refresh)}</div>
                })
            }}
        </div>
    }
}
