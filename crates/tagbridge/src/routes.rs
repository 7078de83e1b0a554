use axum::{
	Router,
	routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;

use crate::app::App;
use crate::tag;

/// Builds the route table. Unmatched methods/paths fall through to the
/// framework default (404/405).
pub fn init(state: App) -> Router {
	Router::new()
		.route("/tags", get(tag::handler::list_tags)) // ReadAll
		.route("/tag", post(tag::handler::create_tags)) // Add(...)
		.route("/tag/{tag_id}", get(tag::handler::get_tag)) // ReadItem(id)
		.route("/tag/{tag_id}", put(tag::handler::update_tag)) // Write(id, value)
		.route("/tag/{tag_id}", delete(tag::handler::delete_tag)) // Remove(id)
		.layer(CorsLayer::permissive())
		.with_state(state)
}

// vim: ts=4
