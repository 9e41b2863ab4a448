//! Input building blocks for the guild settings form.

use dioxus::prelude::*;

use crate::model::discord::{ChannelOptionDto, RoleOptionDto};

/// Violation messages rendered under an input.
#[component]
pub fn FieldErrors(errors: Vec<String>) -> Element {
    rsx! {
        for message in errors {
            p {
                class: "text-error text-sm mt-1",
                "{message}"
            }
        }
    }
}

#[component]
pub fn ChannelSelect(
    label: &'static str,
    value: String,
    options: Vec<ChannelOptionDto>,
    #[props(default = false)] required: bool,
    #[props(default = Vec::new())] errors: Vec<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            div {
                class: "label",
                span {
                    class: "label-text",
                    "{label}"
                    if required {
                        span { class: "text-error", " *" }
                    }
                }
            }
            select {
                class: "select select-bordered w-full",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                option {
                    value: "",
                    "(none)"
                }
                for channel in options {
                    option {
                        value: "{channel.id}",
                        selected: channel.id == value,
                        "{channel.name}"
                    }
                }
            }
            FieldErrors { errors }
        }
    }
}

#[component]
pub fn RoleSelect(
    label: &'static str,
    value: String,
    options: Vec<RoleOptionDto>,
    #[props(default = Vec::new())] errors: Vec<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            div {
                class: "label",
                span {
                    class: "label-text",
                    "{label}"
                }
            }
            select {
                class: "select select-bordered w-full",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                option {
                    value: "",
                    "(none)"
                }
                for role in options {
                    option {
                        value: "{role.id}",
                        selected: role.id == value,
                        "{role.name}"
                    }
                }
            }
            FieldErrors { errors }
        }
    }
}

#[component]
pub fn ThresholdInput(
    label: &'static str,
    value: Option<i32>,
    #[props(default = Vec::new())] errors: Vec<String>,
    on_change: EventHandler<Option<i32>>,
) -> Element {
    let display = value.map(|v| v.to_string()).unwrap_or_default();

    rsx! {
        label {
            class: "form-control w-full",
            div {
                class: "label",
                span {
                    class: "label-text",
                    "{label}"
                }
            }
            input {
                r#type: "number",
                min: 0,
                class: "input input-bordered w-full",
                value: "{display}",
                oninput: move |evt| {
                    let raw = evt.value();
                    if raw.is_empty() {
                        on_change.call(None);
                    } else if let Ok(parsed) = raw.parse::<i32>() {
                        on_change.call(Some(parsed));
                    }
                },
            }
            FieldErrors { errors }
        }
    }
}

#[component]
pub fn ToggleField(
    label: &'static str,
    value: bool,
    #[props(default = Vec::new())] errors: Vec<String>,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        label {
            class: "label cursor-pointer justify-start gap-3",
            input {
                r#type: "checkbox",
                class: "toggle",
                checked: value,
                onchange: move |evt| on_change.call(evt.checked()),
            }
            span {
                class: "label-text",
                "{label}"
            }
            FieldErrors { errors }
        }
    }
}
