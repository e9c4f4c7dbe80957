use dioxus::prelude::*;
use shared_ui::{Card, CardContent};

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Card { class: "empty-card",
            CardContent {
                h1 { "Page not found" }
                p { "There's nothing at /{path}." }
                Link { to: Route::Home {}, "Back to all rooms" }
            }
        }
    }
}
