//! Handlers for the tag routes: list, read, create, update, delete.
//!
//! Every mutating handler checks its permission gate before it looks at the
//! request body, so a disabled operation answers with the gate message no
//! matter what the client sent.

use axum::{
	Json,
	extract::{Path, State, rejection::JsonRejection},
	http::StatusCode,
};
use serde_json::Value;

use crate::prelude::*;
use tagbridge_types::types::{OpOutcome, TagItem};

/// GET /tags - lists the current item of every tag
pub async fn list_tags(State(app): State<App>) -> Json<Vec<TagItem>> {
	let items = app.source.read_all().await;
	debug!(count = items.len(), "GET /tags");
	Json(items)
}

/// GET /tag/{id} - reads one tag, 404 if the source does not know the id
pub async fn get_tag(
	State(app): State<App>,
	Path(tag_id): Path<Box<str>>,
) -> TbResult<Json<TagItem>> {
	match app.source.read_item(&tag_id).await {
		Some(item) => Ok(Json(item)),
		None => Err(Error::NotFound),
	}
}

/// POST /tag - registers the tag ids given in the body with the source.
///
/// The body must be a JSON array of id strings. Adding is best-effort per
/// id; 201 only when every id was accepted, otherwise 400 naming the ids
/// that were not.
#[axum::debug_handler]
pub async fn create_tags(
	State(app): State<App>,
	payload: Result<Json<Vec<Box<str>>>, JsonRejection>,
) -> TbResult<(StatusCode, Json<OpOutcome>)> {
	if !app.opts.permissions.allow_add {
		return Err(Error::Denied("no additions allowed"));
	}
	let Json(tag_ids) = payload.map_err(|_| Error::InvalidPayload)?;

	let report = app.source.add_tags(&tag_ids).await;
	if !report.all_added() {
		warn!(failed = ?report.failed, "POST /tag - source rejected some tags");
		return Err(Error::Upstream(
			format!("Did not add tags: {}", report.failed.join(", ")).into(),
		));
	}

	info!(count = report.added.len(), "POST /tag - tags created");
	Ok((StatusCode::CREATED, Json(OpOutcome::created())))
}

/// PUT /tag/{id} - writes a new value to a tag.
///
/// The body is any JSON value; typing it against the tag is the source's
/// concern, and a coercion failure surfaces as 400.
pub async fn update_tag(
	State(app): State<App>,
	Path(tag_id): Path<Box<str>>,
	payload: Result<Json<Value>, JsonRejection>,
) -> TbResult<Json<OpOutcome>> {
	if !app.opts.permissions.allow_write {
		return Err(Error::Denied("read-only"));
	}
	let Json(value) = payload.map_err(|_| Error::InvalidPayload)?;

	app.source.write_tag(&tag_id, &value).await.map_err(|err| {
		warn!(%tag_id, %err, "PUT /tag - write rejected");
		Error::Upstream("value could not be written to tag".into())
	})?;

	info!(%tag_id, "PUT /tag - tag updated");
	Ok(Json(OpOutcome::updated()))
}

/// DELETE /tag/{id} - removes a tag, 404 if the source does not know the id
pub async fn delete_tag(
	State(app): State<App>,
	Path(tag_id): Path<Box<str>>,
) -> TbResult<Json<OpOutcome>> {
	if !app.opts.permissions.allow_remove {
		return Err(Error::Denied("deletions not allowed"));
	}

	app.source.remove_tag(&tag_id).await.map_err(|err| match err {
		Error::NotFound => Error::NotFound,
		err => {
			warn!(%tag_id, %err, "DELETE /tag - removal rejected");
			Error::Upstream("could not remove tag".into())
		}
	})?;

	info!(%tag_id, "DELETE /tag - tag removed");
	Ok(Json(OpOutcome::removed()))
}

// vim: ts=4
