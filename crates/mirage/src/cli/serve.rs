//! `serve` command handler.

use mirage_error::MirageResult;
use mirage_server::{MirageConfig, run};

/// Handle the `serve` command.
pub async fn serve_gallery(config: MirageConfig, bind: Option<String>) -> MirageResult<()> {
    let config = match bind {
        Some(bind) => {
            let server = config.server().clone().with_bind(bind);
            config.with_server(server)
        }
        None => config,
    };
    config.validate()?;

    tracing::info!(bind = %config.server().bind(), bucket = %config.bucket().name(), "Starting gallery");
    run(&config).await
}
