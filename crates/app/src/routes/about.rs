use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle};

#[component]
pub fn About() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "About RoomNest" }
        }

        div { class: "static-page",
            p { class: "static-lead",
                "RoomNest helps students find verified PGs, hostels and shared flats \
                 close to campus, with upfront pricing and no broker fees."
            }

            div { class: "static-grid",
                Card {
                    CardHeader { CardTitle { "Verified listings" } }
                    CardContent {
                        p {
                            "Every room on RoomNest is visited and photographed by our \
                             team before it goes live, so what you see is what you get."
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Transparent pricing" } }
                    CardContent {
                        p {
                            "Monthly rent is shown upfront, discounts included. No hidden \
                             charges and no brokerage."
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Simple booking" } }
                    CardContent {
                        p {
                            "Request a booking in one click and track its status from \
                             your dashboard. Our team confirms within a day."
                        }
                    }
                }
            }
        }
    }
}
