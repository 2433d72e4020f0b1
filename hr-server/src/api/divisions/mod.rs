//! Division API
//!
//! | Path | Method | Parameters |
//! |------|--------|------------|
//! | /divisions | GET | - |
//! | /division/add | POST | title |
//! | /division/edit | PUT | id, title |
//! | /division/delete | DELETE | id |
//! | /division/get | GET | id |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/divisions", get(handler::list))
        .route("/division/add", post(handler::create))
        .route("/division/edit", put(handler::update))
        .route("/division/delete", delete(handler::delete))
        .route("/division/get", get(handler::get_by_id))
}
