use chrono::{NaiveDate, NaiveDateTime};
use colored::Colorize;

use crate::calendar::CreatedItem;
use crate::core::{CalendarEntryParseResult, EntryKind};
use crate::features::nlp::{DateKind, ParseOutcome, Span, TimeTier};

const INSTANT: &str = "%Y-%m-%d %H:%M";

fn kind_label(kind: EntryKind) -> colored::ColoredString {
    match kind {
        EntryKind::Task => "[task]".cyan(),
        EntryKind::Meeting => "[meeting]".green(),
    }
}

fn fragment(text: &str, span: Span) -> &str {
    text.get(span.start..span.end).unwrap_or_default()
}

const fn date_kind_label(kind: DateKind) -> &'static str {
    match kind {
        DateKind::Numeric { .. } => "numeric",
        DateKind::Relative { .. } => "relative day",
        DateKind::Weekday { .. } => "weekday",
    }
}

const fn tier_label(tier: TimeTier) -> &'static str {
    match tier {
        TimeTier::Exact => "exact",
        TimeTier::PrepositionedHour => "hour after preposition",
        TimeTier::BareHour => "bare hour",
    }
}

fn time_range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> String {
    match end {
        Some(end) if end.date() == start.date() => {
            format!("{}-{}", start.format(INSTANT), end.format("%H:%M"))
        },
        Some(end) => format!("{} - {}", start.format(INSTANT), end.format(INSTANT)),
        None => format!("due {}", start.format(INSTANT)),
    }
}

/// Format a parse outcome, including the fragments that were recognized.
pub fn format_outcome_pretty(text: &str, outcome: &ParseOutcome) -> String {
    let entry = &outcome.result;
    let mut output = format!("{} {}\n", kind_label(entry.kind()), entry.title().bold());

    match entry {
        CalendarEntryParseResult::Task(task) => {
            output.push_str(&format!("  {}: {}\n", "Due".dimmed(), task.due.format(INSTANT)));
        },
        CalendarEntryParseResult::Meeting(meeting) => {
            output.push_str(&format!("  {}: {}\n", "Start".dimmed(), meeting.start.format(INSTANT)));
            output.push_str(&format!("  {}: {}\n", "End".dimmed(), meeting.end.format(INSTANT)));
        },
    }

    if let Some(date) = &outcome.date {
        output.push_str(&format!(
            "  {}: {} ({})\n",
            "Date".dimmed(),
            fragment(text, date.span).yellow(),
            date_kind_label(date.kind)
        ));
    }

    if let Some(time) = &outcome.time {
        output.push_str(&format!(
            "  {}: {} ({})\n",
            "Time".dimmed(),
            fragment(text, time.span).yellow(),
            tier_label(time.tier)
        ));
    }

    output
}

/// Format a stored item as a one-line confirmation.
pub fn format_created_pretty(item: &CreatedItem) -> String {
    format!(
        "{} {} {}  {}\n",
        "Created".green(),
        kind_label(item.kind),
        item.title.bold(),
        time_range(item.start, item.end).yellow()
    )
}

/// Format the items of one day.
pub fn format_agenda_pretty(date: NaiveDate, items: &[CreatedItem]) -> String {
    let heading = date.format("%Y-%m-%d (%a)").to_string();
    if items.is_empty() {
        return format!("{} (0 items)\n  No items\n", heading.bold());
    }

    let mut output = format!("{} ({} items)\n", heading.bold(), items.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for item in items {
        let when = match (item.kind, item.end) {
            (EntryKind::Meeting, Some(end)) => {
                format!("{}-{}", item.start.format("%H:%M"), end.format("%H:%M"))
            },
            _ => "all day".to_string(),
        };
        output.push_str(&format!(
            "{:>11}  {} {}  {}\n",
            when.yellow(),
            kind_label(item.kind),
            item.title,
            format!("#{}", item.id).dimmed()
        ));
    }

    output
}
