use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    PageHeader, PageTitle, Textarea, ToastOptions,
};

/// Contact page. The enquiry form isn't persisted anywhere; it just
/// acknowledges the message and points at the support channels.
#[component]
pub fn Contact() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if message().trim().is_empty() {
            toast.error(
                "Please write a message before sending.".to_string(),
                ToastOptions::new(),
            );
            return;
        }
        toast.success(
            "Thanks for reaching out. We'll reply by email within a day.".to_string(),
            ToastOptions::new(),
        );
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    rsx! {
        PageHeader {
            PageTitle { "Contact us" }
        }

        div { class: "contact-page",
            Card { class: "contact-card",
                CardHeader {
                    CardTitle { "Send us a message" }
                    CardDescription { "Questions about a listing or a booking? We're happy to help." }
                }
                CardContent {
                    form { class: "contact-form", onsubmit: handle_submit,
                        Input {
                            label: "Your name",
                            value: "{name}",
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: "{email}",
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Textarea {
                            label: "Message",
                            rows: 6,
                            value: "{message}",
                            on_input: move |evt: FormEvent| message.set(evt.value()),
                        }
                        Button { "Send message" }
                    }
                }
            }

            div { class: "contact-details",
                p { "Email: " a { href: "mailto:hello@roomnest.example", "hello@roomnest.example" } }
                p { "Phone: +91 80 4000 1234 (Mon-Sat, 9am-7pm IST)" }
                p { "Office: 2nd Floor, 14 MG Road, Bengaluru 560001" }
            }
        }
    }
}
