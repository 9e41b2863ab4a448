pub mod guild;
pub mod home;
pub mod login;

pub use home::Home;
pub use login::Login;

use dioxus::prelude::*;

use crate::client::component::page::ErrorPage;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        ErrorPage { status: 404, message: "No page at /{path}" }
    }
}
