#[cfg(test)]
mod common;

#[cfg(test)]
mod room_catalog_tests;

#[cfg(test)]
mod room_featured_tests;

#[cfg(test)]
mod room_admin_tests;

#[cfg(test)]
mod booking_create_tests;

#[cfg(test)]
mod booking_list_tests;

#[cfg(test)]
mod booking_status_tests;

#[cfg(test)]
mod account_tests;
