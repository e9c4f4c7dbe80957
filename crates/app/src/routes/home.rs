use dioxus::prelude::*;
use shared_types::RoomQuery;
use shared_ui::{Button, Card, CardContent, Skeleton};

use crate::components::RoomCard;

/// Landing page: hero with a location search and the featured rooms grid.
#[component]
pub fn Home() -> Element {
    let mut search_input = use_signal(String::new);
    let mut submitted_search = use_signal(String::new);

    let rooms = use_resource(move || async move {
        let term = submitted_search();
        if term.trim().is_empty() {
            server::api::featured_rooms().await
        } else {
            server::api::list_rooms(RoomQuery {
                search: Some(term),
                available_only: true,
                ..Default::default()
            })
            .await
        }
    });

    let heading = if submitted_search().trim().is_empty() {
        "Featured rooms"
    } else {
        "Search results"
    };

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Student rooms near your campus" }
            p { class: "hero-subtitle",
                "Browse verified PGs and shared flats, compare prices, and book in minutes."
            }
            form {
                class: "hero-search",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submitted_search.set(search_input());
                },
                input {
                    class: "hero-search-input",
                    r#type: "search",
                    placeholder: "Search by area or landmark...",
                    value: "{search_input}",
                    oninput: move |evt| search_input.set(evt.value()),
                }
                Button { "Search" }
            }
        }

        section { class: "room-grid-section",
            h2 { class: "section-title", "{heading}" }
            match &*rooms.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div { class: "room-grid",
                        for room in list.iter() {
                            RoomCard { key: "{room.id}", room: room.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    Card { class: "empty-card",
                        CardContent {
                            p { "No rooms match your search yet. Try a different area." }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card { class: "empty-card",
                        CardContent {
                            p { {shared_types::AppError::friendly_message(&e.to_string())} }
                        }
                    }
                },
                None => rsx! {
                    div { class: "room-grid",
                        for i in 0..6 {
                            Skeleton { key: "{i}", class: "room-card-skeleton" }
                        }
                    }
                },
            }
        }
    }
}
