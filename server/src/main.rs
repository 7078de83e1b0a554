//! Bundled tagbridge server wired to a simulated in-memory tag source.
//!
//! Configuration comes from the environment, read once before serving:
//! `TAGBRIDGE_LISTEN` and the three permission flags `TAGBRIDGE_ALLOW_ADD`,
//! `TAGBRIDGE_ALLOW_WRITE`, `TAGBRIDGE_ALLOW_REMOVE` ("1"/"true").

use std::{env, process, sync::Arc};

use serde_json::json;
use tag_adapter_mem::TagSourceMem;
use tagbridge::AppBuilder;
use tagbridge::types::Permissions;

fn env_flag(name: &str) -> bool {
	env::var(name).map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[tokio::main]
async fn main() {
	let listen = env::var("TAGBRIDGE_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
	let permissions = Permissions {
		allow_add: env_flag("TAGBRIDGE_ALLOW_ADD"),
		allow_write: env_flag("TAGBRIDGE_ALLOW_WRITE"),
		allow_remove: env_flag("TAGBRIDGE_ALLOW_REMOVE"),
	};

	// Simulated source; a deployment swaps in a protocol adapter here
	let source = Arc::new(TagSourceMem::with_tags([
		("sim.ramp", json!(0)),
		("sim.sine", json!(0.0)),
		("sim.state", json!("init")),
	]));

	let result = AppBuilder::new()
		.listen(listen)
		.permissions(permissions)
		.source(source)
		.run()
		.await;

	if let Err(err) = result {
		eprintln!("tagbridge-server: {err}");
		process::exit(1);
	}
}

// vim: ts=4
