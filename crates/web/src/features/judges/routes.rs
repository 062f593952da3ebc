use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_judge, list_judges};

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_judges).post(create_judge))
}
