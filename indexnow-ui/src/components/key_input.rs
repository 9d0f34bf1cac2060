use leptos::prelude::*;

#[component]
pub fn KeyInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_focus: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"Verification key"</span>
            <input
                type="text"
                name="key"
                class=move || {
                    if error.get().is_empty() {
                        "field__input"
                    } else {
                        "field__input field__input--invalid"
                    }
                }
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
            />
            <Show when=move || !error.get().is_empty()>
                <span class="field__error">{move || error.get()}</span>
            </Show>
        </label>
    }
}
