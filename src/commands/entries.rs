use super::backend_client;
use crate::{
    libs::{approval::ApprovalWorkflow, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EntriesArgs {
    /// Show entries in every status, not only pending ones
    #[arg(short, long)]
    all: bool,
}

pub async fn cmd(args: EntriesArgs) -> Result<()> {
    let workflow = ApprovalWorkflow::new(backend_client()?);
    workflow.reload().await?;

    let (entries, header, empty) = if args.all {
        let entries = workflow.entries();
        let count = entries.len();
        (entries, Message::EntriesHeader(count), Message::NoEntries)
    } else {
        let entries = workflow.list_pending();
        let count = entries.len();
        (entries, Message::PendingEntriesHeader(count), Message::NoPendingEntries)
    };

    if entries.is_empty() {
        msg_info!(empty);
        return Ok(());
    }

    msg_print!(header, true);
    View::entries(&entries);
    Ok(())
}
