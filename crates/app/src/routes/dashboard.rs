use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMapPin;
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{
    use_toast, Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input,
    PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::auth::use_auth;
use crate::components::{payment_badge_variant, status_badge_variant};
use crate::format_helpers::{format_date_human, format_price};
use crate::routes::Route;

/// The signed-in user's dashboard: profile panel and bookings, newest first.
#[component]
pub fn Dashboard() -> Element {
    let bookings = use_resource(|| async move { server::api::my_bookings().await });

    rsx! {
        PageHeader {
            PageTitle { "My dashboard" }
        }

        ProfileCard {}

        section { class: "dashboard-bookings",
            h2 { "My bookings" }
            match &*bookings.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div { class: "booking-list",
                        for booking in list.iter() {
                            Card { key: "{booking.id}", class: "booking-card",
                                CardHeader {
                                    CardTitle {
                                        if let Some(title) = booking.room_title.as_ref() {
                                            if let Some(room_id) = booking.room_id {
                                                Link { to: Route::RoomDetail { id: room_id }, "{title}" }
                                            } else {
                                                "{title}"
                                            }
                                        } else {
                                            span { class: "booking-room-gone", "Room no longer listed" }
                                        }
                                    }
                                    Badge { variant: status_badge_variant(&booking.status),
                                        "{booking.status}"
                                    }
                                    Badge { variant: payment_badge_variant(&booking.payment_status),
                                        "{booking.payment_status}"
                                    }
                                }
                                CardContent {
                                    if let Some(location) = booking.room_location.as_ref() {
                                        p { class: "booking-location",
                                            Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                                            "{location}"
                                        }
                                    }
                                    div { class: "booking-facts",
                                        span { "Check-in: " {format_date_human(booking.check_in)} }
                                        span { class: "booking-amount", {format_price(booking.total_amount)} }
                                    }
                                    if let Some(requests) = booking.special_requests.as_ref() {
                                        p { class: "booking-requests", "“{requests}”" }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    Card { class: "empty-card",
                        CardContent {
                            p { "You haven't booked a room yet." }
                            Link { to: Route::Home {}, "Browse rooms" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card { class: "empty-card",
                        CardContent {
                            p { {AppError::friendly_message(&e.to_string())} }
                        }
                    }
                },
                None => rsx! {
                    div { class: "booking-list",
                        for i in 0..3 {
                            Skeleton { key: "{i}", class: "booking-card-skeleton" }
                        }
                    }
                },
            }
        }
    }
}

/// Read-only profile fields with an edit form for name and phone.
#[component]
fn ProfileCard() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut editing = use_signal(|| false);
    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);

    let start_edit = move |_| {
        if let Some(user) = auth.current_user.read().as_ref() {
            full_name.set(user.full_name.clone());
            phone.set(user.phone.clone().unwrap_or_default());
        }
        editing.set(true);
    };

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        let phone_value = {
            let raw = phone();
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        };
        match server::api::update_profile(full_name(), phone_value).await {
            Ok(user) => {
                auth.set_user(user);
                toast.success("Profile updated.".to_string(), ToastOptions::new());
                editing.set(false);
            }
            Err(e) => {
                toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
            }
        }
    };

    let user = auth.current_user.read().as_ref().cloned();

    rsx! {
        Card { class: "profile-card",
            CardHeader {
                CardTitle { "My profile" }
                if !editing() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: start_edit,
                        "Edit profile"
                    }
                }
            }
            CardContent {
                if editing() {
                    form { class: "profile-form", onsubmit: handle_save,
                        Input {
                            label: "Full name",
                            value: "{full_name}",
                            on_input: move |evt: FormEvent| full_name.set(evt.value()),
                        }
                        Input {
                            label: "Phone",
                            input_type: "tel",
                            value: "{phone}",
                            on_input: move |evt: FormEvent| phone.set(evt.value()),
                        }
                        div { class: "profile-form-actions",
                            Button { "Save" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    editing.set(false);
                                },
                                "Cancel"
                            }
                        }
                    }
                } else if let Some(user) = user {
                    dl { class: "profile-fields",
                        div {
                            dt { "Name" }
                            dd { "{user.full_name}" }
                        }
                        div {
                            dt { "Email" }
                            dd { "{user.email}" }
                        }
                        div {
                            dt { "Phone" }
                            dd {
                                if let Some(number) = user.phone.as_ref() {
                                    "{number}"
                                } else {
                                    span { class: "profile-missing", "not set" }
                                }
                            }
                        }
                    }
                } else {
                    Skeleton { class: "profile-skeleton" }
                }
            }
        }
    }
}
