use crate::components::{KeyInput, ResultBanner, SubmitButton, UrlListInput};
use indexnow_app::application::{Effect, FormMsg};
use indexnow_app::domain::{Field, FormState, RequestPayload, SubmitResponse};
use indexnow_errors::AppError;
use leptos::prelude::*;
use server_fn::ServerFnError;
use std::str::FromStr;

#[server(SubmitUrlsFn, "/api", endpoint = "submit_urls", input = server_fn::codec::Json)]
pub async fn submit_urls(payload: RequestPayload) -> Result<SubmitResponse, ServerFnError> {
    use indexnow_app::application::{FormValidator, IndexNowApi};
    use indexnow_app::AppContext;

    let ctx = use_context::<AppContext>().ok_or_else(|| {
        tracing::error!("submit_urls: AppContext was not provided");
        ServerFnError::new(AppError::Internal("service is not configured".to_string()).to_string())
    })?;

    FormValidator::check_payload(&payload).map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(
        "submit_urls: forwarding {} link(s) for host {}",
        payload.url_list.len(),
        payload.host
    );

    ctx.indexnow
        .submit(&payload)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Recovers the error kind from the text the server function carried back.
fn into_app_error(err: ServerFnError) -> AppError {
    match err {
        ServerFnError::ServerError(message) => {
            AppError::from_str(&message).unwrap_or_else(|never| match never {})
        }
        other => AppError::Transport(other.to_string()),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Send links to IndexNow online"</h1>
            <p class="hero__subtitle">
                "Paste your verification key and the pages you want search engines to recrawl"
            </p>
        </div>

        <SubmissionForm/>
    }
}

#[component]
pub fn SubmissionForm() -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    let dispatch = move |msg: FormMsg| {
        form.try_update(|state| state.update(msg))
            .unwrap_or(Effect::None)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Effect::Send(payload) = dispatch(FormMsg::Submit) {
            leptos::task::spawn_local(async move {
                let outcome = submit_urls(payload).await.map_err(into_app_error);
                if let Err(e) = &outcome {
                    tracing::warn!("Submission failed: {}", e);
                }
                let _ = dispatch(FormMsg::Completed(outcome));
            });
        }
    };

    // Without JS the browser posts the same fields to /submit.
    view! {
        <form class="submit-form" action="/submit" method="post" on:submit=on_submit>
            <KeyInput
                value=Signal::derive(move || form.with(|s| s.verification_key.clone()))
                error=Signal::derive(move || form.with(|s| s.errors.key_error.clone()))
                on_input=move |value: String| {
                    let _ = dispatch(FormMsg::KeyChanged(value));
                }
                on_focus=move |_: ()| {
                    let _ = dispatch(FormMsg::Focused(Field::VerificationKey));
                }
            />
            <UrlListInput
                value=Signal::derive(move || form.with(|s| s.url_list_text.clone()))
                error=Signal::derive(move || form.with(|s| s.errors.url_list_error.clone()))
                on_input=move |value: String| {
                    let _ = dispatch(FormMsg::UrlListChanged(value));
                }
                on_focus=move |_: ()| {
                    let _ = dispatch(FormMsg::Focused(Field::UrlList));
                }
            />
            <SubmitButton is_submitting=Signal::derive(move || form.with(|s| s.is_submitting))/>
            <ResultBanner result=Signal::derive(move || form.with(|s| s.result.clone()))/>
        </form>
    }
}
