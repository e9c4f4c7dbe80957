pub mod facility_icon;
pub mod room_card;

pub use facility_icon::FacilityIcon;
pub use room_card::RoomCard;

use shared_ui::BadgeVariant;

/// Map a booking status to its badge color: pending is yellow, confirmed
/// green, cancelled red, anything unrecognized neutral.
pub fn status_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "pending" => BadgeVariant::Warning,
        "confirmed" => BadgeVariant::Success,
        "cancelled" => BadgeVariant::Destructive,
        _ => BadgeVariant::Neutral,
    }
}

/// Badge color for a booking's payment state.
pub fn payment_badge_variant(payment_status: &str) -> BadgeVariant {
    match payment_status {
        "paid" => BadgeVariant::Success,
        "unpaid" => BadgeVariant::Warning,
        _ => BadgeVariant::Neutral,
    }
}

/// Cards show at most this many facility icons; the rest collapse into a
/// "+N more" label.
pub const CARD_FACILITY_LIMIT: usize = 3;

/// The overflow label for a card's facility strip, when one is needed.
pub fn facility_overflow_label(total: usize) -> Option<String> {
    if total > CARD_FACILITY_LIMIT {
        Some(format!("+{} more", total - CARD_FACILITY_LIMIT))
    } else {
        None
    }
}
