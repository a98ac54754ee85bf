use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tucash_client::{restore_session, ApiClient, ClientConfig};
use tucash_core::session::AuthSession;

/// Installs the global subscriber. `TUCASH_LOG_FORMAT=json` switches to JSON
/// lines; `RUST_LOG` controls the filter (default `info`).
pub fn init_tracing(verbose: bool) {
    let log_format = std::env::var("TUCASH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub struct AppContext {
    pub config: ClientConfig,
    pub session: Arc<AuthSession>,
    pub client: Arc<ApiClient>,
}

pub fn build_context(config: ClientConfig) -> anyhow::Result<AppContext> {
    let session = restore_session(&config).map_err(anyhow::Error::new)?;
    tracing::debug!(
        "Session file in use: {}",
        config.session_file.to_string_lossy()
    );
    let client = Arc::new(ApiClient::new(&config, session.clone()).map_err(anyhow::Error::new)?);
    tracing::debug!("Using TuCash API at {}", client.base_url());
    Ok(AppContext {
        config,
        session,
        client,
    })
}
