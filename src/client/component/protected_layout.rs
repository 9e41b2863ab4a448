use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    // Bounce unauthenticated visitors to the login page once the fetch settles
    {
        let auth_context = use_context::<AuthContext>();
        use_effect(move || {
            let state = auth_context.read();
            if matches!(&*state, AuthState::NotLoggedIn) {
                nav.push(Route::Login {});
            }
        });
    }

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Initializing => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn => rsx! {
                // Render nothing meaningful while the redirect happens
                LoadingPage {}
            },
            AuthState::Error(message) => rsx! {
                ErrorPage { status: 500, message: "{message}" }
            },
            AuthState::Authenticated(_) => rsx! {
                Outlet::<Route> {}
            },
        }
    }
}
