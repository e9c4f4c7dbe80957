use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMapPin, LdStar, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, Separator,
    Skeleton, Textarea, ToastOptions,
};
use uuid::Uuid;

use crate::auth::use_auth;
use crate::components::FacilityIcon;
use crate::format_helpers::{format_price, format_rating};
use crate::routes::Route;

/// Full room page: gallery, facts, facilities, description and the
/// booking panel.
#[component]
pub fn RoomDetail(id: Uuid) -> Element {
    let room = use_resource(move || async move { server::api::get_room(id).await });

    rsx! {
        match &*room.read() {
            Some(Ok(room)) => rsx! {
                RoomDetailContent { room: room.clone() }
            },
            Some(Err(e)) => rsx! {
                Card { class: "empty-card",
                    CardContent {
                        p { {AppError::friendly_message(&e.to_string())} }
                        Link { to: Route::Home {}, "Back to all rooms" }
                    }
                }
            },
            None => rsx! {
                div { class: "room-detail-skeleton",
                    Skeleton { class: "room-detail-skeleton-media" }
                    Skeleton { class: "room-detail-skeleton-text" }
                    Skeleton { class: "room-detail-skeleton-text" }
                }
            },
        }
    }
}

#[component]
fn RoomDetailContent(room: shared_types::RoomResponse) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut special_requests = use_signal(String::new);
    let mut booking_in_flight = use_signal(|| false);

    let room_id = room.id;
    let discount = room.discount_percent();
    let cover = room.images.first().cloned();
    // Client-side guard only; the server does not re-check occupancy.
    let full = room.is_full();

    let handle_book = move |_| async move {
        if !auth.is_authenticated() {
            navigator().push(Route::AuthPage {});
            return;
        }
        booking_in_flight.set(true);
        let requests = {
            let text = special_requests();
            if text.trim().is_empty() { None } else { Some(text) }
        };
        match server::api::create_booking(room_id, requests).await {
            Ok(_) => {
                toast.success(
                    "Booking request sent. We'll confirm it shortly.".to_string(),
                    ToastOptions::new(),
                );
                navigator().push(Route::Dashboard {});
            }
            Err(e) => {
                toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
            }
        }
        booking_in_flight.set(false);
    };

    rsx! {
        div { class: "room-detail",
            div { class: "room-detail-main",
                div { class: "room-detail-media",
                    if let Some(src) = cover {
                        img { class: "room-detail-image", src: "{src}", alt: "{room.title}" }
                    } else {
                        div { class: "room-detail-image room-card-image-placeholder" }
                    }
                    if room.images.len() > 1 {
                        div { class: "room-detail-thumbs",
                            for (i, src) in room.images.iter().skip(1).enumerate() {
                                img {
                                    key: "{i}",
                                    class: "room-detail-thumb",
                                    src: "{src}",
                                    alt: "{room.title} photo {i + 2}",
                                }
                            }
                        }
                    }
                }

                h1 { class: "room-detail-title", "{room.title}" }
                p { class: "room-detail-location",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                    "{room.location}"
                }

                div { class: "room-detail-facts",
                    Badge { variant: BadgeVariant::Outline, "{room.room_type}" }
                    Badge { variant: BadgeVariant::Outline, "{room.gender_preference}" }
                    span { class: "room-detail-capacity",
                        Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        "{room.current_occupancy}/{room.capacity} occupied"
                    }
                    span { class: "room-card-rating",
                        Icon::<LdStar> { icon: LdStar, width: 16, height: 16 }
                        {format_rating(room.rating, room.total_reviews)}
                    }
                }

                Separator {}

                if !room.facilities.is_empty() {
                    section { class: "room-detail-facilities",
                        h2 { "Facilities" }
                        div { class: "facility-list",
                            for facility in room.facilities.iter() {
                                FacilityIcon { label: facility.clone() }
                            }
                        }
                    }
                }

                if let Some(description) = room.description.as_ref() {
                    section { class: "room-detail-description",
                        h2 { "About this place" }
                        p { "{description}" }
                    }
                }
            }

            aside { class: "room-detail-booking",
                Card {
                    CardHeader {
                        CardTitle {
                            div { class: "room-card-pricing",
                                span { class: "room-card-price", {format_price(room.price)} }
                                span { class: "room-card-price-period", "/month" }
                                if discount.is_some() {
                                    if let Some(original) = room.original_price {
                                        s { class: "room-card-original-price",
                                            {format_price(original)}
                                        }
                                    }
                                }
                            }
                        }
                        if let Some(pct) = discount {
                            Badge { variant: BadgeVariant::Destructive, "{pct}% off" }
                        }
                    }
                    CardContent {
                        if !room.available {
                            Badge { variant: BadgeVariant::Neutral, "Currently unavailable" }
                            p { class: "room-detail-signin-note",
                                "This room is not open for booking right now. Check back later."
                            }
                        } else if full {
                            Badge { variant: BadgeVariant::Neutral, "Fully occupied" }
                            p { class: "room-detail-signin-note",
                                "All {room.capacity} places are taken."
                            }
                        } else {
                            Textarea {
                                label: "Special requests (optional)",
                                placeholder: "Ground floor, near campus gate...",
                                value: "{special_requests}",
                                on_input: move |evt: FormEvent| special_requests.set(evt.value()),
                            }
                            Button {
                                class: "room-detail-book-button",
                                disabled: booking_in_flight(),
                                onclick: handle_book,
                                if booking_in_flight() { "Booking..." } else { "Book now" }
                            }
                            if !auth.is_authenticated() {
                                p { class: "room-detail-signin-note",
                                    "You'll be asked to sign in first."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
