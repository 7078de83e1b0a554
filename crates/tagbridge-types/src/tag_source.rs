//! Capability trait for the live process-data source.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::error::TbResult;
use crate::types::TagItem;

/// Per-id outcome of an add operation.
///
/// Adding is best-effort: ids the source could not register end up in
/// `failed`, the rest in `added`. Order follows the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddReport {
	pub added: Vec<Box<str>>,
	pub failed: Vec<Box<str>>,
}

impl AddReport {
	pub fn all_added(&self) -> bool {
		self.failed.is_empty()
	}
}

/// A live tag source.
///
/// The handle is shared across all concurrent request handlers; any mutual
/// exclusion over the tag store is the implementation's responsibility. The
/// API layer never caches, batches, or transforms what the source returns.
#[async_trait]
pub trait TagSource: Debug + Send + Sync {
	/// Reads the current item of every tag. Total: an empty source yields
	/// an empty list.
	async fn read_all(&self) -> Vec<TagItem>;

	/// Reads the current item of one tag, `None` if the id is unknown
	async fn read_item(&self, tag_id: &str) -> Option<TagItem>;

	/// Registers the given tag ids with the source, best-effort per id
	async fn add_tags(&self, tag_ids: &[Box<str>]) -> AddReport;

	/// Writes a new value to a tag.
	///
	/// The source coerces the JSON value to its own item typing; coercion
	/// failure and unknown ids surface as errors.
	async fn write_tag(&self, tag_id: &str, value: &Value) -> TbResult<()>;

	/// Removes a tag. `Error::NotFound` if the id is unknown.
	async fn remove_tag(&self, tag_id: &str) -> TbResult<()>;
}

// vim: ts=4
