//! Position API
//!
//! | Path | Method | Parameters |
//! |------|--------|------------|
//! | /positions | GET | - |
//! | /position/add | POST | title |
//! | /position/edit | PUT | id, title |
//! | /position/delete | DELETE | id |
//! | /position/get | GET | id |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/positions", get(handler::list))
        .route("/position/add", post(handler::create))
        .route("/position/edit", put(handler::update))
        .route("/position/delete", delete(handler::delete))
        .route("/position/get", get(handler::get_by_id))
}
