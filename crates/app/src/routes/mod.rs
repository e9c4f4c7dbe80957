pub mod about;
pub mod admin;
pub mod auth_page;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod room_detail;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::auth::use_auth;

use about::About;
use admin::Admin;
use auth_page::AuthPage;
use contact::Contact;
use dashboard::Dashboard;
use home::Home;
use not_found::NotFound;
use room_detail::RoomDetail;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/room/:id")]
    RoomDetail { id: Uuid },
    #[route("/auth")]
    AuthPage {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[layout(AuthGuard)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /auth when not signed in.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the auth check completes; the
/// `SuspenseBoundary` in `App` shows the fallback meanwhile.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::AuthPage {});
            rsx! {
                div { class: "page-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Site-wide layout: top navigation, routed content, footer.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    // Hydrate the session for public pages so the navbar and the booking
    // button know whether someone is signed in.
    let session = use_server_future(move || async move { server::api::get_current_user().await })?;
    if let Some(Ok(Some(user))) = session.read().as_ref() {
        if !auth.is_authenticated() {
            auth.set_user(user.clone());
        }
    }

    let page_title = match &route {
        Route::Home {} => "Find your room",
        Route::RoomDetail { .. } => "Room details",
        Route::Dashboard {} => "My dashboard",
        Route::Admin {} => "Administration",
        Route::AuthPage {} => "Sign in",
        Route::About {} => "About",
        Route::Contact {} => "Contact",
        Route::NotFound { .. } => "Not found",
    };

    let signed_in = auth.is_authenticated();
    let is_admin = crate::auth::use_is_admin();

    let handle_logout = move |_| async move {
        if server::api::logout().await.is_ok() {
            auth.clear_auth();
            navigator().push(Route::Home {});
        }
    };

    rsx! {
        document::Title { "RoomNest — {page_title}" }

        header { class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "RoomNest" }
            nav { class: "navbar-links",
                Link { to: Route::Home {}, "Rooms" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Contact {}, "Contact" }
                if signed_in {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                if is_admin {
                    Link { to: Route::Admin {}, "Admin" }
                }
            }
            div { class: "navbar-actions",
                if signed_in {
                    button { class: "navbar-signout", onclick: handle_logout, "Sign out" }
                } else {
                    Link { class: "navbar-signin", to: Route::AuthPage {}, "Sign in" }
                }
            }
        }

        main { class: "page-content",
            Outlet::<Route> {}
        }

        footer { class: "site-footer",
            p { "RoomNest — student housing made simple." }
        }
    }
}
