//! Recomputes the overtime warnings from the backend's work-time records and
//! replaces the cached set.

use super::backend_client;
use crate::{
    db::kv_store::KvStore,
    libs::{messages::Message, view::View, warning_cache::WarningCache},
    msg_info, msg_success,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let backend = backend_client()?;
    let cache = WarningCache::new(KvStore::new()?);

    let warnings = cache.refresh(&backend).await;
    msg_success!(Message::WarningsRefreshed(warnings.len()));

    if warnings.is_empty() {
        msg_info!(Message::NoOvertimeWarnings);
    } else {
        View::warnings(&warnings);
    }

    Ok(())
}
