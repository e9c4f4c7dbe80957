use dioxus::prelude::*;
use shared_types::{
    AppError, CreateRoomRequest, Room, UpdateRoomRequest, GENDER_PREFERENCES, ROOM_TYPES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Input, PageActions, PageHeader, PageTitle, Separator, Skeleton, Textarea,
    ToastOptions,
};
use uuid::Uuid;

use crate::components::{payment_badge_variant, status_badge_variant};
use crate::format_helpers::{format_date_human, format_price};

/// Admin console: overview stats, room management and booking review.
///
/// The role check here only decides what to render; every server function
/// called below re-checks the admin role on its own.
#[component]
pub fn Admin() -> Element {
    if !crate::auth::use_is_admin() {
        return rsx! {
            Card { class: "empty-card",
                CardContent {
                    p { "You need an administrator account to view this page." }
                }
            }
        };
    }

    rsx! { AdminContent {} }
}

#[component]
fn AdminContent() -> Element {
    let toast = use_toast();

    let mut stats = use_resource(|| async move { server::api::admin_stats().await });
    let mut rooms = use_resource(|| async move { server::api::list_rooms_admin().await });
    let mut bookings = use_resource(|| async move { server::api::list_bookings_admin().await });

    // None = form hidden, Some(None) = creating, Some(Some(room)) = editing.
    let mut form_state = use_signal(|| None::<Option<Room>>);

    let mut refresh_rooms = move || {
        rooms.restart();
        stats.restart();
    };

    let form = form_state();
    let form_key = form
        .as_ref()
        .map(|editing| {
            editing
                .as_ref()
                .map(|r| r.id.to_string())
                .unwrap_or_else(|| "new".to_string())
        })
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { "Administration" }
            PageActions {
                Button {
                    onclick: move |_| form_state.set(Some(None)),
                    "Add room"
                }
            }
        }

        section { class: "admin-stats",
            match &*stats.read() {
                Some(Ok(s)) => rsx! {
                    StatCard { label: "Rooms", value: s.total_rooms }
                    StatCard { label: "Available", value: s.available_rooms }
                    StatCard { label: "Bookings", value: s.total_bookings }
                    StatCard { label: "Pending", value: s.pending_bookings }
                },
                Some(Err(e)) => rsx! {
                    p { class: "form-error", {AppError::friendly_message(&e.to_string())} }
                },
                None => rsx! {
                    for i in 0..4 {
                        Skeleton { key: "{i}", class: "stat-card-skeleton" }
                    }
                },
            }
        }

        if let Some(editing) = form {
            RoomForm {
                key: "{form_key}",
                editing,
                on_done: move |_| {
                    form_state.set(None);
                    refresh_rooms();
                },
                on_cancel: move |_| form_state.set(None),
            }
        }

        section { class: "admin-section",
            h2 { "Rooms" }
            match &*rooms.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Location" }
                                th { "Type" }
                                th { "Price" }
                                th { "Available" }
                                th { "" }
                            }
                        }
                        tbody {
                            for room in list.iter() {
                                AdminRoomRow {
                                    key: "{room.id}",
                                    room: room.clone(),
                                    on_edit: move |room: Room| form_state.set(Some(Some(room))),
                                    on_deleted: move |_| {
                                        toast.success("Room deleted.".to_string(), ToastOptions::new());
                                        refresh_rooms();
                                    },
                                    on_error: move |msg: String| {
                                        toast.error(msg, ToastOptions::new());
                                    },
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    p { class: "admin-empty", "No rooms yet. Add the first one." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "form-error", {AppError::friendly_message(&e.to_string())} }
                },
                None => rsx! {
                    Skeleton { class: "admin-table-skeleton" }
                },
            }
        }

        Separator {}

        section { class: "admin-section",
            h2 { "Bookings" }
            match &*bookings.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Room" }
                                th { "Booked by" }
                                th { "Check-in" }
                                th { "Amount" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for booking in list.iter() {
                                tr { key: "{booking.id}",
                                    td {
                                        if let Some(title) = booking.room_title.as_ref() {
                                            "{title}"
                                        } else {
                                            span { class: "booking-room-gone", "deleted room" }
                                        }
                                    }
                                    td {
                                        div { "{booking.booker_name}" }
                                        div { class: "admin-table-sub", "{booking.booker_email}" }
                                    }
                                    td { {format_date_human(booking.check_in)} }
                                    td { {format_price(booking.total_amount)} }
                                    td {
                                        Badge { variant: status_badge_variant(&booking.status),
                                            "{booking.status}"
                                        }
                                        Badge { variant: payment_badge_variant(&booking.payment_status),
                                            "{booking.payment_status}"
                                        }
                                    }
                                    td { class: "admin-table-actions",
                                        if booking.status == "pending" {
                                            BookingStatusButton {
                                                booking_id: booking.id,
                                                status: "confirmed",
                                                label: "Confirm",
                                                variant: ButtonVariant::Secondary,
                                                on_done: move |_| {
                                                    bookings.restart();
                                                    stats.restart();
                                                },
                                            }
                                        }
                                        if booking.status != "cancelled" {
                                            BookingStatusButton {
                                                booking_id: booking.id,
                                                status: "cancelled",
                                                label: "Cancel",
                                                variant: ButtonVariant::Destructive,
                                                on_done: move |_| {
                                                    bookings.restart();
                                                    stats.restart();
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    p { class: "admin-empty", "No bookings yet." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "form-error", {AppError::friendly_message(&e.to_string())} }
                },
                None => rsx! {
                    Skeleton { class: "admin-table-skeleton" }
                },
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: i64) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                span { class: "stat-card-value", "{value}" }
                span { class: "stat-card-label", "{label}" }
            }
        }
    }
}

#[component]
fn AdminRoomRow(
    room: Room,
    on_edit: EventHandler<Room>,
    on_deleted: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let room_id = room.id;
    let room_for_edit = room.clone();

    let handle_delete = move |_| async move {
        match server::api::delete_room(room_id).await {
            Ok(()) => on_deleted.call(()),
            Err(e) => on_error.call(AppError::friendly_message(&e.to_string())),
        }
    };

    rsx! {
        tr {
            td { "{room.title}" }
            td { "{room.location}" }
            td { "{room.room_type}" }
            td { {format_price(room.price)} }
            td {
                if room.available {
                    Badge { variant: BadgeVariant::Success, "yes" }
                } else {
                    Badge { variant: BadgeVariant::Neutral, "no" }
                }
            }
            td { class: "admin-table-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(room_for_edit.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn BookingStatusButton(
    booking_id: Uuid,
    status: &'static str,
    label: &'static str,
    variant: ButtonVariant,
    on_done: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    rsx! {
        Button {
            variant,
            onclick: move |_| async move {
                match server::api::set_booking_status(booking_id, status.to_string()).await {
                    Ok(_) => {
                        toast.success(format!("Booking {status}."), ToastOptions::new());
                        on_done.call(());
                    }
                    Err(e) => {
                        toast.error(
                            AppError::friendly_message(&e.to_string()),
                            ToastOptions::new(),
                        );
                    }
                }
            },
            "{label}"
        }
    }
}

/// Create / edit form for a room. Facilities and image URLs are entered as
/// comma-separated lists.
#[component]
fn RoomForm(editing: Option<Room>, on_done: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let toast = use_toast();
    let editing_id = editing.as_ref().map(|r| r.id);

    let seed = editing.clone();
    let mut title = use_signal(|| seed.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        seed.as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default()
    });
    let mut price = use_signal(|| {
        seed.as_ref()
            .map(|r| r.price.to_string())
            .unwrap_or_default()
    });
    let mut original_price = use_signal(|| {
        seed.as_ref()
            .and_then(|r| r.original_price.map(|p| p.to_string()))
            .unwrap_or_default()
    });
    let mut location = use_signal(|| seed.as_ref().map(|r| r.location.clone()).unwrap_or_default());
    let mut room_type = use_signal(|| {
        seed.as_ref()
            .map(|r| r.room_type.clone())
            .unwrap_or_else(|| "single".to_string())
    });
    let mut gender_preference = use_signal(|| {
        seed.as_ref()
            .map(|r| r.gender_preference.clone())
            .unwrap_or_else(|| "mixed".to_string())
    });
    let mut capacity = use_signal(|| {
        seed.as_ref()
            .map(|r| r.capacity.to_string())
            .unwrap_or_else(|| "1".to_string())
    });
    let mut current_occupancy = use_signal(|| {
        seed.as_ref()
            .map(|r| r.current_occupancy.to_string())
            .unwrap_or_else(|| "0".to_string())
    });
    let mut available = use_signal(|| seed.as_ref().map(|r| r.available).unwrap_or(true));
    let mut facilities = use_signal(|| {
        seed.as_ref()
            .map(|r| r.facilities.join(", "))
            .unwrap_or_default()
    });
    let mut images = use_signal(|| {
        seed.as_ref()
            .map(|r| r.images.join(", "))
            .unwrap_or_default()
    });
    let mut contact_person = use_signal(|| {
        seed.as_ref()
            .and_then(|r| r.contact_person.clone())
            .unwrap_or_default()
    });
    let mut contact_phone = use_signal(|| {
        seed.as_ref()
            .and_then(|r| r.contact_phone.clone())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let Ok(price_value) = price().trim().parse::<i64>() else {
            toast.error("Price must be a whole number.".to_string(), ToastOptions::new());
            return;
        };
        let original_price_value = {
            let raw = original_price();
            let raw = raw.trim();
            if raw.is_empty() {
                None
            } else {
                match raw.parse::<i64>() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        toast.error(
                            "Original price must be a whole number.".to_string(),
                            ToastOptions::new(),
                        );
                        return;
                    }
                }
            }
        };
        let Ok(capacity_value) = capacity().trim().parse::<i32>() else {
            toast.error("Capacity must be a whole number.".to_string(), ToastOptions::new());
            return;
        };
        let Ok(occupancy_value) = current_occupancy().trim().parse::<i32>() else {
            toast.error(
                "Current occupancy must be a whole number.".to_string(),
                ToastOptions::new(),
            );
            return;
        };
        if occupancy_value < 0 || occupancy_value > capacity_value {
            toast.error(
                "Current occupancy cannot exceed capacity.".to_string(),
                ToastOptions::new(),
            );
            return;
        }

        let split_list = |raw: String| -> Vec<String> {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };
        let optional = |raw: String| -> Option<String> {
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        };

        saving.set(true);
        let result = if let Some(id) = editing_id {
            server::api::update_room(
                id,
                UpdateRoomRequest {
                    title: Some(title()),
                    description: optional(description()),
                    price: Some(price_value),
                    original_price: original_price_value,
                    location: Some(location()),
                    room_type: Some(room_type()),
                    gender_preference: Some(gender_preference()),
                    capacity: Some(capacity_value),
                    current_occupancy: Some(occupancy_value),
                    available: Some(available()),
                    facilities: Some(split_list(facilities())),
                    images: Some(split_list(images())),
                    contact_person: optional(contact_person()),
                    contact_phone: optional(contact_phone()),
                },
            )
            .await
            .map(|_| ())
        } else {
            server::api::create_room(CreateRoomRequest {
                title: title(),
                description: optional(description()),
                price: price_value,
                original_price: original_price_value,
                location: location(),
                room_type: room_type(),
                gender_preference: gender_preference(),
                capacity: capacity_value,
                current_occupancy: occupancy_value,
                available: available(),
                facilities: split_list(facilities()),
                images: split_list(images()),
                contact_person: optional(contact_person()),
                contact_phone: optional(contact_phone()),
            })
            .await
            .map(|_| ())
        };
        saving.set(false);

        match result {
            Ok(()) => {
                let verb = if editing_id.is_some() { "updated" } else { "created" };
                toast.success(format!("Room {verb}."), ToastOptions::new());
                on_done.call(());
            }
            Err(e) => {
                toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
            }
        }
    };

    rsx! {
        Card { class: "room-form-card",
            CardHeader {
                CardTitle {
                    if editing_id.is_some() { "Edit room" } else { "Add a room" }
                }
            }
            CardContent {
                form { class: "room-form", onsubmit: handle_submit,
                    div { class: "room-form-grid",
                        Input {
                            label: "Title",
                            value: "{title}",
                            on_input: move |evt: FormEvent| title.set(evt.value()),
                        }
                        Input {
                            label: "Location",
                            value: "{location}",
                            on_input: move |evt: FormEvent| location.set(evt.value()),
                        }
                        Input {
                            label: "Price per month",
                            input_type: "number",
                            value: "{price}",
                            on_input: move |evt: FormEvent| price.set(evt.value()),
                        }
                        Input {
                            label: "Original price (optional)",
                            input_type: "number",
                            value: "{original_price}",
                            on_input: move |evt: FormEvent| original_price.set(evt.value()),
                        }
                        div { class: "input-wrapper",
                            label { class: "input-label", "Room type" }
                            select {
                                class: "room-form-select",
                                value: "{room_type}",
                                onchange: move |evt| room_type.set(evt.value()),
                                for option in ROOM_TYPES {
                                    option { value: "{option}", "{option}" }
                                }
                            }
                        }
                        div { class: "input-wrapper",
                            label { class: "input-label", "Gender preference" }
                            select {
                                class: "room-form-select",
                                value: "{gender_preference}",
                                onchange: move |evt| gender_preference.set(evt.value()),
                                for option in GENDER_PREFERENCES {
                                    option { value: "{option}", "{option}" }
                                }
                            }
                        }
                        Input {
                            label: "Capacity",
                            input_type: "number",
                            value: "{capacity}",
                            on_input: move |evt: FormEvent| capacity.set(evt.value()),
                        }
                        Input {
                            label: "Currently occupied",
                            input_type: "number",
                            value: "{current_occupancy}",
                            on_input: move |evt: FormEvent| current_occupancy.set(evt.value()),
                        }
                        div { class: "input-wrapper room-form-checkbox",
                            label { class: "input-label",
                                input {
                                    r#type: "checkbox",
                                    checked: available(),
                                    onchange: move |evt| available.set(evt.checked()),
                                }
                                " Open for booking"
                            }
                        }
                        Input {
                            label: "Facilities (comma separated)",
                            placeholder: "WiFi, Parking, Meals",
                            value: "{facilities}",
                            on_input: move |evt: FormEvent| facilities.set(evt.value()),
                        }
                        Input {
                            label: "Image URLs (comma separated)",
                            value: "{images}",
                            on_input: move |evt: FormEvent| images.set(evt.value()),
                        }
                        Input {
                            label: "Contact person",
                            value: "{contact_person}",
                            on_input: move |evt: FormEvent| contact_person.set(evt.value()),
                        }
                        Input {
                            label: "Contact phone",
                            input_type: "tel",
                            value: "{contact_phone}",
                            on_input: move |evt: FormEvent| contact_phone.set(evt.value()),
                        }
                    }
                    Textarea {
                        label: "Description",
                        value: "{description}",
                        on_input: move |evt: FormEvent| description.set(evt.value()),
                    }
                    div { class: "room-form-actions",
                        Button { disabled: saving(),
                            if saving() { "Saving..." } else { "Save room" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_cancel.call(());
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
