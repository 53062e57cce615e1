// ── Report formatting ──
//
// Layout:
//
//   AireLibre PY #AireLibre
//   19/Oct/2026 09:30
//
//   <name>: <index> - <label>      (one per sensor, feed order)
//
//   Más info en http://airelib.re
//
// No trailing newline after the footer.

use std::fmt;

use chrono::NaiveDateTime;
use linka_api::SensorRecord;

use crate::aqi::classify;

const BANNER: &str = "AireLibre PY #AireLibre";
const FOOTER: &str = "Más info en http://airelib.re";

/// 12-hour clock without an AM/PM marker.
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y %I:%M";

/// Platform status length limit, in characters.
pub const STATUS_CHAR_LIMIT: usize = 280;

/// A rendered status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn exceeds_limit(&self) -> bool {
        self.char_count() > STATUS_CHAR_LIMIT
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name shown for a sensor: its description, or `Sensor <source>`.
pub fn display_name(record: &SensorRecord) -> String {
    match record.description() {
        "" => format!("Sensor {}", record.source),
        description => description.to_owned(),
    }
}

/// `<name>: <index> - <label>\n`
pub fn render_line(record: &SensorRecord) -> String {
    let index = record.quality_index();
    format!("{}: {index} - {}\n", display_name(record), classify(index))
}

/// Render the full status text for one fetch.
pub fn format_report(records: &[SensorRecord], now: NaiveDateTime) -> Report {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&now.format(TIMESTAMP_FORMAT).to_string());
    out.push_str("\n\n");
    for record in records {
        out.push_str(&render_line(record));
    }
    out.push('\n');
    out.push_str(FOOTER);
    Report(out)
}
