use agenda_types::{AgendaFields, AgendaRecord};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub const NO_RESULTS: &str = "No sessions found!";

const RULE_WIDTH: usize = 50;

const LABELS: [&str; 8] = [
    "Date",
    "Time Start",
    "Time End",
    "Session Type",
    "Session Title",
    "Location",
    "Description",
    "Speakers",
];

/// Labels are styled only for an interactive stdout without `NO_COLOR`.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn field_values(fields: &AgendaFields) -> [&str; 8] {
    [
        fields.date.as_str(),
        fields.time_start.as_str(),
        fields.time_end.as_str(),
        fields.session_type.as_str(),
        fields.session_title.as_str(),
        fields.location.as_str(),
        fields.description.as_str(),
        fields.speakers.as_str(),
    ]
}

/// Render lookup results as numbered blocks separated by dashed rules.
pub fn render_plain(records: &[AgendaRecord], color: bool) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    for (index, record) in records.iter().enumerate() {
        out.push_str(&rule);
        out.push('\n');

        let heading = format!("Event # {}", index + 1);
        if color {
            out.push_str(&heading.bold().to_string());
        } else {
            out.push_str(&heading);
        }
        out.push('\n');

        for (label, value) in LABELS.iter().zip(field_values(&record.fields)) {
            if color {
                out.push_str(&format!("{}: {}\n", label.cyan(), value));
            } else {
                out.push_str(&format!("{}: {}\n", label, value));
            }
        }
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_json(records: &[AgendaRecord]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}
