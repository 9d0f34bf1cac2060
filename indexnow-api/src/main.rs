use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Router,
};
use indexnow_app::application::{FormMsg, SubmissionController};
use indexnow_app::domain::{FormState, ResultKind};
use indexnow_app::AppContext;
use indexnow_ui::pages::SubmitUrlsFn;
use indexnow_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;

/// Field names match the Leptos form so the page still works without JS.
#[derive(Deserialize)]
struct SubmitForm {
    #[serde(default)]
    key: String,
    #[serde(default)]
    url_list: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<SubmitUrlsFn>();
    tracing::info!("Registered server function: SubmitUrlsFn");

    let app = Router::new()
        .route(
            "/submit",
            get(|| async { Html(render_form_page(&FormState::default())) }).post({
                let ctx = app_context.clone();
                move |form: Form<SubmitForm>| {
                    let ctx = ctx.clone();
                    async move { handle_submit_form(ctx, form.0).await }
                }
            }),
        )
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("IndexNow endpoint: {}", app_context.indexnow.endpoint());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn handle_submit_form(ctx: AppContext, form: SubmitForm) -> impl IntoResponse {
    let controller = SubmissionController::new(ctx.indexnow.clone());
    let _ = controller.dispatch(FormMsg::KeyChanged(form.key));
    let _ = controller.dispatch(FormMsg::UrlListChanged(form.url_list));

    let state = controller.submit().await;
    Html(render_form_page(&state))
}

fn render_form_page(state: &FormState) -> String {
    let banner = state
        .result
        .as_ref()
        .map(|result| {
            let modifier = match result.kind {
                ResultKind::Success => "success",
                ResultKind::Error => "error",
            };
            format!(
                r#"<div class="banner banner--{modifier}" role="status"><p class="banner__text">{text}</p></div>"#,
                modifier = modifier,
                text = escape_html(&result.text)
            )
        })
        .unwrap_or_default();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>IndexNow Submit</title>
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="hero">
            <h1 class="hero__title">Send links to IndexNow online</h1>
        </div>
        <form class="submit-form" action="/submit" method="post">
            <label class="field">
                <span class="field__label">Verification key</span>
                <input type="text" name="key" class="{key_class}" autocomplete="off" value="{key}">
                {key_error}
            </label>
            <label class="field">
                <span class="field__label">Links from a single domain</span>
                <textarea name="url_list" class="{urls_class}" rows="4" placeholder="https://www.example.com/url1">{url_list}</textarea>
                {url_list_error}
            </label>
            <button type="submit" class="submit-form__button">Submit</button>
            {banner}
        </form>
    </main>
</body>
</html>"#,
        CSS = CSS,
        key_class = field_class("field__input", &state.errors.key_error),
        key = escape_html(&state.verification_key),
        key_error = field_error(&state.errors.key_error),
        urls_class = field_class("field__input field__input--multiline", &state.errors.url_list_error),
        url_list = escape_html(&state.url_list_text),
        url_list_error = field_error(&state.errors.url_list_error),
        banner = banner,
    )
}

fn field_class(base: &str, error: &str) -> String {
    if error.is_empty() {
        base.to_string()
    } else {
        format!("{} field__input--invalid", base)
    }
}

fn field_error(error: &str) -> String {
    if error.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="field__error">{}</span>"#, escape_html(error))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 850px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 1.5rem; }
.hero__title { font-size: clamp(1.6rem, 4vw, 2.4rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.05rem; max-width: 520px; margin: 0 auto; }
.submit-form {
    display: flex; flex-direction: column; gap: 1rem; margin: 1.5rem 0;
    background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.5rem;
}
.field { display: flex; flex-direction: column; gap: 0.4rem; }
.field__label { font-weight: 600; }
.field__input {
    padding: 0.85rem 1rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--base); color: var(--text); font-size: 1rem; font-family: inherit;
}
.field__input--multiline { min-height: 8rem; resize: vertical; }
.field__input:focus { outline: none; border-color: var(--pine); }
.field__input--invalid { border-color: var(--love); }
.field__input::placeholder { color: var(--muted); }
.field__error { color: var(--love); font-size: 0.9rem; }
.submit-form__button {
    align-self: flex-start; width: 220px; padding: 0.9rem 1.5rem; background: var(--pine); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.submit-form__button:hover { opacity: 0.9; }
.submit-form__button:disabled { background: var(--muted); cursor: wait; }
.banner { border-radius: 8px; padding: 1rem 1.25rem; border: 2px solid; word-break: break-word; }
.banner--success { background: #e6f2ef; border-color: var(--foam); color: #2f5f66; }
.banner--error { background: #fce8ec; border-color: var(--love); color: #8b3d4d; }
"#;

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"IndexNow Submit"</title>
                <style>{CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
