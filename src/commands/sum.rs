use super::backend_client;
use crate::{
    api::Backend,
    libs::{
        entry::parse_calendar_date,
        error::Error,
        messages::Message,
        summary::{DailyAggregator, SummaryFormatter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Only show the total for this day (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(long)]
    date: Option<String>,
}

pub async fn cmd(sum_args: SumArgs) -> Result<()> {
    let date = match sum_args.date.as_deref() {
        Some(text) => Some(parse_calendar_date(text).ok_or_else(|| Error::InvalidEntry(format!("'{}' is not a date (YYYY-MM-DD or DD.MM.YYYY)", text)))?),
        None => None,
    };

    let work_times = backend_client()?.fetch_work_times().await?;
    let mut summaries = work_times.daily_totals().format_summary();
    if let Some(date) = date {
        summaries.retain(|summary| summary.date == date);
    }

    if summaries.is_empty() {
        msg_info!(Message::NoWorkTimes);
        return Ok(());
    }

    match date {
        Some(date) => msg_print!(Message::DailyTotalsForDate(date.format("%d.%m.%Y").to_string(), summaries[0].total.clone()), true),
        None => msg_print!(Message::DailyTotalsHeader, true),
    }
    View::daily_totals(&summaries);
    Ok(())
}
