//! Common types used throughout tagbridge.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	/// Current time as Unix seconds
	pub fn now() -> Self {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(res.as_secs() as i64)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

// Quality //
//*********//
/// Validity of a tag item as reported by the source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
	Good,
	Uncertain,
	Bad,
}

// TagItem //
//*********//
/// Current state of one tag.
///
/// The API layer passes items through unmodified; value typing beyond the
/// JSON model is the source's concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TagItem {
	pub id: Box<str>,
	pub value: serde_json::Value,
	pub quality: Quality,
	pub timestamp: Timestamp,
}

// Permissions //
//*************//
/// Per-operation gates for the mutating routes.
///
/// Loaded once before serving and immutable afterwards. An explicit value
/// held by the app state, so separate instances can run with different
/// permission sets concurrently. Missing fields deserialize to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Permissions {
	pub allow_add: bool,
	pub allow_write: bool,
	pub allow_remove: bool,
}

// OpOutcome //
//***********//
/// Success envelope for the mutating routes: `{"result": "<verb>"}`
#[derive(Clone, Debug, Serialize)]
pub struct OpOutcome {
	pub result: Box<str>,
}

impl OpOutcome {
	pub fn created() -> Self {
		OpOutcome { result: "created".into() }
	}

	pub fn updated() -> Self {
		OpOutcome { result: "updated".into() }
	}

	pub fn removed() -> Self {
		OpOutcome { result: "removed".into() }
	}
}


// vim: ts=4
