pub use crate::error::{Error, TbResult};
pub use crate::types::{Permissions, TagItem, Timestamp};

// vim: ts=4
