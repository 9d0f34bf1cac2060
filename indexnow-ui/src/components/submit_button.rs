use leptos::prelude::*;

#[component]
pub fn SubmitButton(#[prop(into)] is_submitting: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="submit-form__button"
            prop:disabled=move || is_submitting.get()
        >
            {move || if is_submitting.get() { "Sending..." } else { "Submit" }}
        </button>
    }
}
