use crate::{
    db::kv_store::KvStore,
    libs::{messages::Message, view::View, warning_cache::WarningCache},
    msg_info, msg_print,
};
use anyhow::Result;

/// Shows the last computed overtime warnings without contacting the backend.
pub fn cmd() -> Result<()> {
    let warnings = WarningCache::new(KvStore::new()?).load();

    if warnings.is_empty() {
        msg_info!(Message::NoOvertimeWarnings);
        return Ok(());
    }

    msg_print!(Message::OvertimeWarningsHeader(warnings.len()), true);
    View::warnings(&warnings);
    Ok(())
}
