use indexnow_app::domain::{ResultKind, SubmissionResult};
use leptos::prelude::*;

#[component]
pub fn ResultBanner(#[prop(into)] result: Signal<Option<SubmissionResult>>) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let class = match result.kind {
                ResultKind::Success => "banner banner--success",
                ResultKind::Error => "banner banner--error",
            };
            view! {
                <div class=class role="status">
                    <p class="banner__text">{result.text}</p>
                </div>
            }
        })
    }
}
