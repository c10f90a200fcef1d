//! HTTP surface of the office queue
//!
//! | Method | Path                                  | Effect                        |
//! |--------|---------------------------------------|-------------------------------|
//! | GET    | `/view/:day`                          | day's queue, internal fields  |
//! | POST   | `/addPatient/:day`                    | append one patient            |
//! | POST   | `/deletePatient/:day/:patient_id`     | remove by patient id          |
//! | POST   | `/addList/:day`                       | replace the day's queue       |
//!
//! Mutations answer `301 Moved Permanently` pointing at `/view/:day`.

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::serve;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the router with request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/view/:day", get(handlers::view))
        .route("/addPatient/:day", post(handlers::add_patient))
        .route(
            "/deletePatient/:day/:patient_id",
            post(handlers::delete_patient),
        )
        .route("/addList/:day", post(handlers::add_list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
