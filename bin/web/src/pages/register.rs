//! Registration page component.

use leptos::prelude::*;
use leptos_router::components::A;
use portcullis_login::routes;

/// Registration page - accounts are created with the identity provider.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Create an account"</h1>
                <p>"Accounts are managed by your identity provider. Ask your administrator for an invitation."</p>
                <p class="login-footer">
                    "Already have an account? "
                    <A href=routes::LOGIN>"Log in"</A>
                </p>
            </div>
        </div>
    }
}
