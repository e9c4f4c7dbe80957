use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCar, LdCheck, LdUtensils, LdWifi};
use dioxus_free_icons::Icon;
use shared_types::Facility;

/// Icon plus label for a facility. Known facilities get a dedicated icon;
/// everything else renders a generic check mark.
#[component]
pub fn FacilityIcon(label: String) -> Element {
    let icon = match Facility::from_label(&label) {
        Facility::Wifi => rsx! { Icon::<LdWifi> { icon: LdWifi, width: 16, height: 16 } },
        Facility::Parking => rsx! { Icon::<LdCar> { icon: LdCar, width: 16, height: 16 } },
        Facility::Meals => rsx! { Icon::<LdUtensils> { icon: LdUtensils, width: 16, height: 16 } },
        Facility::Other => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } },
    };

    rsx! {
        span { class: "facility",
            {icon}
            span { class: "facility-label", "{label}" }
        }
    }
}
