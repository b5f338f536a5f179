use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "spinner spinner-circle".to_string()
    } else {
        format!("spinner spinner-circle {class}")
    };

    view! {
        <div class=full_classes role="status" aria-live="polite">
            <div class="spinner-circle-inner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Centered spinner with an optional label
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="spinner-container spinner-centered">
            <Spinner/>
            {(!message.is_empty()).then(|| view! {
                <div class="spinner-label">{message.clone()}</div>
            })}
        </div>
    }
}
