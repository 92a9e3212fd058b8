// web_app/components/dialog.rs - Confirmation and notice dialogs

use leptos::prelude::*;

use crate::web_app::model::SuccessNotice;
use super::common::{Button, ModalWrapper, SecondaryButton};

/// Confirm button label for the delete dialog
pub fn delete_button_label(deleting: bool) -> &'static str {
    if deleting {
        "Deleting..."
    } else {
        "Delete"
    }
}

/// "Are you sure?" dialog shown while a delete is staged
///
/// Both buttons are disabled while the request runs. Escape and the
/// backdrop still call `on_cancel`, which ignores a running delete.
#[component]
pub fn DeleteConfirmDialog(
    /// True while the DELETE request is in flight
    #[prop(into)]
    deleting: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalWrapper on_close=on_cancel title="Delete Product">
            <p class="text-gray-600 mb-6">
                "Are you sure you want to delete this product? This cannot be undone."
            </p>
            <div class="flex justify-end gap-3">
                <SecondaryButton on_click=on_cancel disabled=deleting>"Cancel"</SecondaryButton>
                <Button
                    on_click=on_confirm
                    disabled=deleting
                    class="bg-red-600 hover:bg-red-700"
                >
                    {move || delete_button_label(deleting.get())}
                </Button>
            </div>
        </ModalWrapper>
    }
}

/// Banner confirming a successful create or update
#[component]
pub fn SuccessDialog(notice: SuccessNotice, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black bg-opacity-30" on:click=move |_| on_close.run(())></div>
            <div class="relative bg-white rounded-xl shadow-2xl p-8 max-w-sm w-full text-center">
                <div class="text-green-600 text-4xl mb-2">"✓"</div>
                <h3 class="text-2xl font-bold text-gray-800 mb-2">{notice.heading()}</h3>
                <p class="text-gray-600 mb-6">{notice.detail()}</p>
                <Button on_click=on_close class="bg-green-600 hover:bg-green-700">"Close"</Button>
            </div>
        </div>
    }
}
