//! Shared implementation of the `approve` and `reject` commands.
//!
//! Each id is decided in turn; a failure for one id is reported and the
//! remaining ids are still processed. The command fails at the end when any
//! decision failed.

use super::backend_client;
use crate::{
    libs::{
        approval::ApprovalWorkflow,
        entry::{Decision, EntryId},
        messages::Message,
    },
    msg_bail_anyhow, msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DecideArgs {
    /// Ids of the entries to decide on
    #[arg(required = true)]
    ids: Vec<String>,
    /// Comment sent to the backend along with the decision
    #[arg(short, long)]
    comment: Option<String>,
}

pub async fn cmd(args: DecideArgs, decision: Decision) -> Result<()> {
    if args.ids.is_empty() {
        msg_bail_anyhow!(Message::NoEntryIdsProvided);
    }

    let workflow = ApprovalWorkflow::new(backend_client()?);
    workflow.reload().await?;

    let mut failed = 0;
    for id in args.ids.into_iter().map(EntryId::from) {
        match workflow.decide(&id, decision, args.comment.as_deref()).await {
            Ok(_) => match decision {
                Decision::Approve => msg_success!(Message::EntryApproved(id.to_string())),
                Decision::Reject => msg_success!(Message::EntryRejected(id.to_string())),
            },
            Err(e) => {
                failed += 1;
                msg_error!(Message::TransitionFailed {
                    id: id.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    if failed > 0 {
        msg_bail_anyhow!(Message::TransitionsFailed(failed));
    }
    Ok(())
}
