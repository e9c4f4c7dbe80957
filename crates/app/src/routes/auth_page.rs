use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::auth::use_auth;
use crate::routes::Route;

/// Combined sign-in / sign-up page. One form, a toggle between the two
/// modes, field-level validation errors surfaced under each input.
#[component]
pub fn AuthPage() -> Element {
    let mut auth = use_auth();
    let mut registering = use_signal(|| false);

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);

    let mut error_message = use_signal(|| None::<String>);
    let mut field_errors = use_signal(std::collections::HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        error_message.set(None);
        field_errors.set(Default::default());

        let result = if registering() {
            let phone_value = {
                let p = phone();
                if p.trim().is_empty() { None } else { Some(p) }
            };
            server::api::register(email(), password(), full_name(), phone_value).await
        } else {
            server::api::login(email(), password()).await
        };

        match result {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::Home {});
            }
            Err(e) => {
                let error_string = e.to_string();
                let fields = AppError::parse_field_errors(&error_string);
                if fields.is_empty() {
                    error_message.set(Some(AppError::friendly_message(&error_string)));
                } else {
                    field_errors.set(fields);
                }
            }
        }
        submitting.set(false);
    };

    let (title, description, submit_label, toggle_prompt, toggle_label) = if registering() {
        (
            "Create your account",
            "Sign up to book rooms and track your requests.",
            "Sign up",
            "Already have an account?",
            "Sign in instead",
        )
    } else {
        (
            "Welcome back",
            "Sign in to manage your bookings.",
            "Sign in",
            "New to RoomNest?",
            "Create an account",
        )
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent {
                    form { class: "auth-form", onsubmit: handle_submit,
                        if registering() {
                            Input {
                                label: "Full name",
                                placeholder: "Priya Sharma",
                                value: "{full_name}",
                                on_input: move |evt: FormEvent| full_name.set(evt.value()),
                            }
                            if let Some(msg) = field_errors.read().get("full_name") {
                                p { class: "field-error", "{msg}" }
                            }
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        if let Some(msg) = field_errors.read().get("email") {
                            p { class: "field-error", "{msg}" }
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: if registering() { "At least 8 characters" } else { "" },
                            value: "{password}",
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(msg) = field_errors.read().get("password") {
                            p { class: "field-error", "{msg}" }
                        }
                        if registering() {
                            Input {
                                label: "Phone (optional)",
                                input_type: "tel",
                                placeholder: "+91 98765 43210",
                                value: "{phone}",
                                on_input: move |evt: FormEvent| phone.set(evt.value()),
                            }
                            if let Some(msg) = field_errors.read().get("phone") {
                                p { class: "field-error", "{msg}" }
                            }
                        }

                        if let Some(msg) = error_message() {
                            p { class: "form-error", "{msg}" }
                        }

                        Button { disabled: submitting(),
                            if submitting() { "Please wait..." } else { "{submit_label}" }
                        }
                    }

                    div { class: "auth-toggle",
                        span { "{toggle_prompt} " }
                        button {
                            class: "auth-toggle-button",
                            r#type: "button",
                            onclick: move |_| {
                                registering.toggle();
                                error_message.set(None);
                                field_errors.set(Default::default());
                            },
                            "{toggle_label}"
                        }
                    }
                }
            }
        }
    }
}
