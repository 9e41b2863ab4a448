use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_context_provider(AuthContext::new);

    // Resolve the session user on first load
    #[cfg(feature = "web")]
    {
        let mut auth_context = use_context::<AuthContext>();
        use_future(move || async move {
            let state = AuthState::from_fetch(get_user().await);
            auth_context.set(state);
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: " Web dashboard for configuring the guild's Discord moderation bot "
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
