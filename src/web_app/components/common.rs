// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

const BUTTON_BASE_CLASS: &str = "px-6 py-2 text-white rounded-lg transition-colors \
                                 disabled:opacity-70 disabled:cursor-not-allowed \
                                 font-medium shadow-sm active:transform active:scale-95";

/// Full class list of a primary button with the given color classes
pub fn button_class(colors: &str) -> String {
    format!("{} {}", BUTTON_BASE_CLASS, colors)
}

/// Keys that dismiss an open modal
pub fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-40">
            <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-500"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Additional CSS classes (colors default to blue)
    #[prop(default = "bg-blue-600 hover:bg-blue-700")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=button_class(class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-6 py-2 bg-gray-300 text-gray-800 rounded-lg hover:bg-gray-400 \
                 transition-colors duration-200 disabled:opacity-50 font-medium";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic should be
/// handled by the parent using Show.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    // Close on escape key
    let handle_keydown = move |ev: KeyboardEvent| {
        if closes_modal(&ev.key()) {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-xl shadow-2xl w-full max-w-3xl max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-gray-500 hover:text-gray-700 text-2xl"
                    on:click=move |_| on_close.run(())
                    title="Close"
                >
                    "×"
                </button>
                <div class="p-6">
                    <h3 class="text-2xl font-bold mb-4 text-gray-800">{title}</h3>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Text input component
///
/// Controlled input: shows `value` and reports every edit through `on_input`.
#[component]
pub fn TextInput(
    /// The current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every keystroke
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "border border-gray-300 rounded-lg px-4 py-2 \
                      focus:outline-none focus:ring-2 focus:ring-blue-400";

    view! {
        <input
            type="text"
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                on_input.run(event_target_value(&ev));
            }
        />
    }
}

/// Multi-line text input component
#[component]
pub fn TextArea(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    view! {
        <textarea
            rows=rows.to_string()
            class="w-full border border-gray-300 rounded-lg px-4 py-2"
            prop:value=move || value.get()
            on:input=move |ev| {
                on_input.run(event_target_value(&ev));
            }
        ></textarea>
    }
}

/// Labelled form row used by the edit modal
#[component]
pub fn Field(
    label: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            {children()}
        </div>
    }
}
