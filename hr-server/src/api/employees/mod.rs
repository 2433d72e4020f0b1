//! Employee API
//!
//! | Path | Method | Parameters |
//! |------|--------|------------|
//! | / , /employees | GET | division_id?, employment_after_date? |
//! | /employee/add | POST | name, last_name, patronymic, birth_date, address? |
//! | /employee/edit | PUT | id, last_name, name?, patronymic?, address?, birth_date? |
//! | /employee/delete | DELETE | id |
//! | /employee/get | GET | id |
//! | /employee/jobs | GET | id |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/employees", get(handler::list))
        .route("/employee/add", post(handler::create))
        .route("/employee/edit", put(handler::update))
        .route("/employee/delete", delete(handler::delete))
        .route("/employee/get", get(handler::get_by_id))
        .route("/employee/jobs", get(handler::list_jobs))
}
