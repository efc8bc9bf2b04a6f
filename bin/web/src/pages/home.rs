//! Home page component.

use crate::browser::LocalStorageTokenStore;
use crate::settings::get_client_settings;
use leptos::prelude::*;
use leptos_router::components::A;
use portcullis_login::{TokenStore, routes};

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let settings = Resource::new(|| (), |_| get_client_settings());

    view! {
        <div class="home-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    settings.get().map(|result| {
                        match result {
                            Ok(settings) => view! {
                                <SessionStatus token_key=settings.login.token_key().to_string()/>
                            }.into_any(),
                            Err(_) => view! {
                                <div>
                                    <h1>"portcullis"</h1>
                                    <p>"Failed to load. Please try again."</p>
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Shows whether a session token is stored in this browser.
#[component]
fn SessionStatus(token_key: String) -> impl IntoView {
    let (signed_in, set_signed_in) = signal(false);

    // Storage is only readable once hydrated
    Effect::new(move || {
        let stored = LocalStorageTokenStore.get(&token_key);
        set_signed_in.set(matches!(stored, Ok(Some(_))));
    });

    view! {
        {move || {
            if signed_in.get() {
                view! {
                    <div>
                        <h1>"Welcome back!"</h1>
                        <p>"You are signed in."</p>
                        <A href=routes::LOGIN>"Sign out"</A>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div>
                        <h1>"portcullis"</h1>
                        <p>"Please log in to continue."</p>
                        <A href=routes::LOGIN attr:class="cta-button">"Log in"</A>
                    </div>
                }.into_any()
            }
        }}
    }
}
