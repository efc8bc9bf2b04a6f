//! Login page component.

use crate::browser::{LocalStorageTokenStore, RouterNavigator};
use crate::settings::{ClientSettings, get_client_settings};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use portcullis_identity::IdentityToolkitClient;
use portcullis_login::{
    Credentials, LoginConfig, LoginFlow, LoginState, TokenStore, clear_session, routes,
};
use std::rc::Rc;

/// Login page - loads client settings, then shows the sign-in form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let settings = Resource::new(|| (), |_| get_client_settings());

    // Reaching the login screen ends any previous session, whether or not
    // the settings load
    Effect::new(move || end_previous_session(&LocalStorageTokenStore));

    view! {
        <div class="login-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    settings.get().map(|result| {
                        match result {
                            Ok(settings) => view! {
                                <LoginForm settings=settings/>
                            }.into_any(),
                            Err(_) => view! {
                                <div class="login-box">
                                    <p class="login-error">"Sign-in is unavailable right now. Please try again later."</p>
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Removes the token stored under the default key.
///
/// A deployment with a custom key has it cleared by [`LoginForm`] once the
/// settings arrive.
fn end_previous_session(store: &dyn TokenStore) {
    clear_session(store, LoginConfig::default().token_key());
}

/// Email and password form.
///
/// Clears any stored session when it mounts. On submit it signs in with the
/// identity provider, stores a freshly issued token, and navigates home; on
/// failure it shows the provider's message above the inputs.
#[component]
pub fn LoginForm(settings: ClientSettings) -> impl IntoView {
    let ClientSettings { identity, login } = settings;
    let flow = StoredValue::new_local(Rc::new(LoginFlow::new(
        Rc::new(IdentityToolkitClient::new(identity)),
        Rc::new(LocalStorageTokenStore),
        Rc::new(RouterNavigator::from_context()),
        login,
    )));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginState::new());

    Effect::new(move || {
        flow.with_value(|flow| flow.clear_stale_session());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let flow = flow.get_value();
        state.update(LoginState::begin);
        spawn_local(async move {
            let outcome = flow.submit(credentials).await;
            // A successful sign-in may already have navigated away and disposed the form
            state.try_update(|state| state.record(&outcome));
        });
    };

    login_form_view(state, email, password, on_submit)
}

/// Markup of the login form, driven by its signals.
fn login_form_view(
    state: RwSignal<LoginState>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    on_submit: impl FnMut(SubmitEvent) + 'static,
) -> impl IntoView {
    let is_pending = move || state.with(LoginState::is_pending);

    view! {
        <form class="login-box" on:submit=on_submit>
            <h1>"Login"</h1>
            {move || {
                state
                    .with(|state| state.error().map(str::to_owned))
                    .map(|message| view! { <p class="login-error">{message}</p> })
            }}
            <input
                type="email"
                name="email"
                placeholder="Email"
                required=true
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="password"
                name="password"
                placeholder="Password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit" class="login-button" disabled=is_pending>
                {move || if is_pending() { "Signing in…" } else { "Sign In" }}
            </button>
            <p class="login-footer">
                "Don't have an account? "
                <A href=routes::REGISTER>"Sign up"</A>
            </p>
        </form>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;
    use portcullis_identity::IdentityConfig;
    use portcullis_login::{AuthenticationFailure, SubmitOutcome};

    fn render_at_login(view: impl FnOnce() -> AnyView + 'static) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new("/login"));
            view! { <Router>{view()}</Router> }.to_html()
        })
    }

    fn input_tags(html: &str) -> Vec<&str> {
        html.split("<input")
            .skip(1)
            .map(|rest| rest.split('>').next().unwrap_or_default())
            .collect()
    }

    #[test]
    fn form_links_to_registration_and_requires_both_fields() {
        let settings = ClientSettings {
            identity: IdentityConfig::new("public-key".to_string()),
            login: LoginConfig::default(),
        };

        let html = render_at_login(move || view! { <LoginForm settings=settings/> }.into_any());

        assert!(html.contains(r#"href="/register""#), "{html}");
        let inputs = input_tags(&html);
        assert_eq!(inputs.len(), 2, "{html}");
        assert!(inputs.iter().all(|tag| tag.contains("required")), "{html}");
        assert!(inputs[0].contains(r#"type="email""#));
        assert!(inputs[1].contains(r#"type="password""#));
        assert!(!html.contains("login-error"), "{html}");
    }

    #[test]
    fn error_is_rendered_above_inputs() {
        let html = render_at_login(|| {
            let mut failed = LoginState::new();
            failed.record(&SubmitOutcome::Failed(AuthenticationFailure::new(
                "Invalid password",
            )));
            login_form_view(
                RwSignal::new(failed),
                RwSignal::new("user@example.com".to_string()),
                RwSignal::new(String::new()),
                |_| {},
            )
            .into_any()
        });

        let error_at = html.find("Invalid password").expect("error rendered");
        let input_at = html.find("<input").expect("inputs rendered");
        assert!(error_at < input_at, "{html}");
        assert!(html.contains(r#"class="login-error""#));
    }

    #[test]
    fn pending_submit_disables_button() {
        let html = render_at_login(|| {
            let mut pending = LoginState::new();
            pending.begin();
            login_form_view(
                RwSignal::new(pending),
                RwSignal::new(String::new()),
                RwSignal::new(String::new()),
                |_| {},
            )
            .into_any()
        });

        assert!(html.contains("Signing in…"), "{html}");
        assert!(html.contains("disabled"), "{html}");
    }
}
