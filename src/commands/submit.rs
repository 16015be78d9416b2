use super::backend_client;
use crate::{
    libs::{
        approval::ApprovalWorkflow,
        entry::{parse_calendar_date, parse_clock_time, TimeEntryDraft},
        error::Error,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Elevator the work was done on
    #[arg(long)]
    elevator: String,
    /// Site of the elevator
    #[arg(long)]
    location: String,
    /// Activity type, e.g. maintenance, repair or other
    #[arg(long)]
    activity: String,
    /// Description of the activity, required for type "other"
    #[arg(long)]
    other: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    /// Work date as YYYY-MM-DD or DD.MM.YYYY, defaults to today
    #[arg(long)]
    date: Option<String>,
    /// Start time as HH:MM
    #[arg(long)]
    start: String,
    /// End time as HH:MM
    #[arg(long)]
    end: String,
    /// The work was done during an on-call week
    #[arg(long)]
    emergency: bool,
    /// Staff member who did the work
    #[arg(long)]
    staff: String,
}

pub async fn cmd(args: SubmitArgs) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(text) => parse_date(text)?,
        None => Local::now().date_naive(),
    };

    let draft = TimeEntryDraft {
        elevator_id: args.elevator,
        location: args.location,
        activity_type: args.activity,
        other_activity: args.other,
        notes: args.notes,
        date,
        start_time: parse_time(&args.start)?,
        end_time: parse_time(&args.end)?,
        emergency_week: args.emergency,
        mitarbeiter: args.staff,
    };
    ApprovalWorkflow::new(backend_client()?).submit(&draft).await?;

    msg_success!(Message::EntrySubmitted(draft.date.format("%d.%m.%Y").to_string()));
    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate, Error> {
    parse_calendar_date(text).ok_or_else(|| Error::InvalidEntry(format!("'{}' is not a date (YYYY-MM-DD or DD.MM.YYYY)", text)))
}

fn parse_time(text: &str) -> Result<NaiveTime, Error> {
    parse_clock_time(text).ok_or_else(|| Error::InvalidEntry(format!("'{}' is not a time of day (HH:MM)", text)))
}
