use dioxus::prelude::*;

mod auth;
mod components;
pub mod format_helpers;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        // Background task: purge expired/revoked refresh tokens hourly
        let cleanup_pool = pool.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(60 * 60));
            loop {
                interval.tick().await;
                let _ = sqlx::query(
                    "DELETE FROM refresh_tokens WHERE expires_at < NOW() OR revoked",
                )
                .execute(&cleanup_pool)
                .await;
            }
        });

        let state = server::db::AppState { pool: pool.clone() };

        let mut router = dioxus::server::router(App)
            .merge(server::rest::api_router().with_state(state.clone()))
            .route(
                "/health",
                axum::routing::get(server::health::health_check).with_state(pool.clone()),
            );

        if flags.docs {
            router = router.merge(server::openapi::docs_router().with_state(state.clone()));
        }

        let router = router
            .layer(axum::middleware::from_fn_with_state(
                state,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http());
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "page-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
