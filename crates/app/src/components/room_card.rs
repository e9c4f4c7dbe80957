use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMapPin, LdStar};
use dioxus_free_icons::Icon;
use shared_types::RoomResponse;
use shared_ui::{Badge, BadgeVariant, Card, CardContent};

use crate::components::{facility_overflow_label, FacilityIcon, CARD_FACILITY_LIMIT};
use crate::format_helpers::{format_price, format_rating};
use crate::routes::Route;

/// Catalog card for a room: cover image, price with discount, rating,
/// type/preference badges and the first few facilities.
#[component]
pub fn RoomCard(room: RoomResponse) -> Element {
    let discount = room.discount_percent();
    let cover = room.images.first().cloned();

    rsx! {
        Link { class: "room-card-link", to: Route::RoomDetail { id: room.id },
            Card { class: "room-card",
                div { class: "room-card-media",
                    if let Some(src) = cover {
                        img { class: "room-card-image", src: "{src}", alt: "{room.title}" }
                    } else {
                        div { class: "room-card-image room-card-image-placeholder" }
                    }
                    if let Some(pct) = discount {
                        Badge { class: "room-card-discount", variant: BadgeVariant::Destructive,
                            "{pct}% off"
                        }
                    }
                    if !room.available {
                        Badge { class: "room-card-unavailable", variant: BadgeVariant::Neutral,
                            "Unavailable"
                        }
                    }
                }
                CardContent {
                    h3 { class: "room-card-title", "{room.title}" }
                    p { class: "room-card-location",
                        Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                        "{room.location}"
                    }
                    div { class: "room-card-meta",
                        Badge { variant: BadgeVariant::Outline, "{room.room_type}" }
                        Badge { variant: BadgeVariant::Outline, "{room.gender_preference}" }
                        span { class: "room-card-rating",
                            Icon::<LdStar> { icon: LdStar, width: 14, height: 14 }
                            {format_rating(room.rating, room.total_reviews)}
                        }
                    }
                    div { class: "room-card-facilities",
                        for facility in room.facilities.iter().take(CARD_FACILITY_LIMIT) {
                            FacilityIcon { label: facility.clone() }
                        }
                        if let Some(overflow) = facility_overflow_label(room.facilities.len()) {
                            span { class: "room-card-facility-overflow", "{overflow}" }
                        }
                    }
                    div { class: "room-card-pricing",
                        span { class: "room-card-price", {format_price(room.price)} }
                        span { class: "room-card-price-period", "/month" }
                        if discount.is_some() {
                            if let Some(original) = room.original_price {
                                s { class: "room-card-original-price", {format_price(original)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
