// Webserver implementation

use tokio::net::TcpListener;

use crate::prelude::*;
use crate::routes;

/// Binds the listen address and serves the tag API over plain HTTP.
///
/// Requests are dispatched concurrently by the runtime; this layer adds no
/// ordering, timeout, or cancellation of its own.
pub async fn serve(app: App) -> TbResult<()> {
	let listen = app.opts.listen.clone();
	let router = routes::init(app);

	let listener = TcpListener::bind(&*listen).await?;
	info!("Listening on http://{}", listen);
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
