//! Employment API
//!
//! | Path | Method | Parameters |
//! |------|--------|------------|
//! | /employment | POST | employee_id, position_id, division_id, date_of_employment |
//! | /dismissal | PUT | id (employee id), date_of_dismissal |
//! | /job/get | GET | id |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employment", post(handler::employ))
        .route("/dismissal", put(handler::dismiss))
        .route("/job/get", get(handler::get_by_id))
}
