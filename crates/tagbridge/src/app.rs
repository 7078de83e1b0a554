//! App state and builder

use std::sync::Arc;

use tagbridge_types::tag_source::TagSource;
use tagbridge_types::types::Permissions;

use crate::prelude::*;
use crate::webserver;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub source: Arc<dyn TagSource>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub permissions: Permissions,
}

/// Builds and runs a tagbridge instance.
///
/// Configuration is fixed at build time; the resulting [`AppState`] is
/// immutable for the process lifetime.
pub struct AppBuilder {
	opts: AppBuilderOpts,
	source: Option<Arc<dyn TagSource>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				permissions: Permissions::default(),
			},
			source: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn permissions(&mut self, permissions: Permissions) -> &mut Self {
		self.opts.permissions = permissions;
		self
	}
	pub fn source(&mut self, source: Arc<dyn TagSource>) -> &mut Self {
		self.source = Some(source);
		self
	}

	pub fn build(&mut self) -> TbResult<App> {
		let source =
			self.source.take().ok_or_else(|| Error::Config("no tag source configured".into()))?;
		info!(version = VERSION, permissions = ?self.opts.permissions, "Building tagbridge");
		Ok(Arc::new(AppState {
			opts: AppBuilderOpts {
				listen: self.opts.listen.clone(),
				permissions: self.opts.permissions,
			},
			source,
		}))
	}

	pub async fn run(&mut self) -> TbResult<()> {
		let app = self.build()?;
		webserver::serve(app).await
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
