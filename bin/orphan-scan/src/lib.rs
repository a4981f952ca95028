mod introspection;
mod logger;

pub use crate::introspection::{FetchIntrospectionError, IntrospectionFetcher};
pub use crate::logger::configure_logging;

use schema_orphans_audit::{orphan_type_names, reachable_type_names, render_report, SchemaState};
use tracing::{debug, info};

/// Introspects the endpoint and renders the orphan-type report.
pub async fn scan_endpoint(introspection_url: &str) -> Result<String, FetchIntrospectionError> {
    let fetcher = IntrospectionFetcher::try_new()?;
    info!(url = introspection_url, "Fetching introspection result");
    let introspection = fetcher.fetch(introspection_url).await?;

    let state = SchemaState::new(introspection);
    debug!(
        types = state.definitions.len(),
        "Schema state built from introspection result"
    );

    let visited = reachable_type_names(&state);
    let orphans = orphan_type_names(&state, &visited);
    debug!(
        visited = visited.len(),
        orphans = orphans.len(),
        "Reachability walk finished"
    );

    Ok(render_report(&orphans))
}
