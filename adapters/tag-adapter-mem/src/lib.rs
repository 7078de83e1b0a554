#![forbid(unsafe_code)]

//! In-memory implementation of the tagbridge `TagSource` capability.
//!
//! Serves as the simulated source for the bundled server binary and as the
//! test double for the API layer. A real deployment replaces this with an
//! adapter that speaks the plant's data-acquisition protocol.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use tagbridge::prelude::*;
use tagbridge::tag_source::{AddReport, TagSource};
use tagbridge::types::Quality;

/// In-memory tag store.
///
/// The `RwLock` provides the mutual exclusion the API layer leaves to the
/// source; concurrent mutations serialize here.
#[derive(Debug, Default)]
pub struct TagSourceMem {
	tags: RwLock<HashMap<Box<str>, TagItem>>,
}

impl TagSourceMem {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a source pre-populated with good-quality items for the given
	/// (id, value) pairs
	pub fn with_tags<I, S>(tags: I) -> Self
	where
		I: IntoIterator<Item = (S, Value)>,
		S: Into<Box<str>>,
	{
		let now = Timestamp::now();
		let tags = tags
			.into_iter()
			.map(|(id, value)| {
				let id: Box<str> = id.into();
				(id.clone(), TagItem { id, value, quality: Quality::Good, timestamp: now })
			})
			.collect();
		TagSourceMem { tags: RwLock::new(tags) }
	}

	pub fn len(&self) -> usize {
		self.tags.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.tags.read().is_empty()
	}

	pub fn contains(&self, tag_id: &str) -> bool {
		self.tags.read().contains_key(tag_id)
	}
}

#[async_trait]
impl TagSource for TagSourceMem {
	async fn read_all(&self) -> Vec<TagItem> {
		let mut items: Vec<TagItem> = self.tags.read().values().cloned().collect();
		items.sort_by(|a, b| a.id.cmp(&b.id));
		items
	}

	async fn read_item(&self, tag_id: &str) -> Option<TagItem> {
		self.tags.read().get(tag_id).cloned()
	}

	async fn add_tags(&self, tag_ids: &[Box<str>]) -> AddReport {
		let mut report = AddReport::default();
		let mut tags = self.tags.write();
		for id in tag_ids {
			// Empty ids and ids already registered fail; the rest proceed
			if id.is_empty() || tags.contains_key(id) {
				report.failed.push(id.clone());
				continue;
			}
			tags.insert(
				id.clone(),
				TagItem {
					id: id.clone(),
					value: Value::Null,
					quality: Quality::Uncertain,
					timestamp: Timestamp::now(),
				},
			);
			report.added.push(id.clone());
		}
		debug!(added = report.added.len(), failed = report.failed.len(), "add_tags");
		report
	}

	async fn write_tag(&self, tag_id: &str, value: &Value) -> TbResult<()> {
		let mut tags = self.tags.write();
		let item = tags.get_mut(tag_id).ok_or(Error::NotFound)?;
		item.value = value.clone();
		item.quality = Quality::Good;
		item.timestamp = Timestamp::now();
		Ok(())
	}

	async fn remove_tag(&self, tag_id: &str) -> TbResult<()> {
		match self.tags.write().remove(tag_id) {
			Some(_) => Ok(()),
			None => Err(Error::NotFound),
		}
	}
}

// vim: ts=4
