use leptos::prelude::*;

/// Multiline link box. One URL per line, all on the same domain.
#[component]
pub fn UrlListInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_focus: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"Links from a single domain"</span>
            <textarea
                name="url_list"
                class=move || {
                    if error.get().is_empty() {
                        "field__input field__input--multiline"
                    } else {
                        "field__input field__input--multiline field__input--invalid"
                    }
                }
                rows="4"
                placeholder="https://www.example.com/url1"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
            ></textarea>
            <Show when=move || !error.get().is_empty()>
                <span class="field__error">{move || error.get()}</span>
            </Show>
        </label>
    }
}
