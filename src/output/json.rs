use serde::Serialize;

use super::{Formatter, Report, iso8601_timestamp};

pub struct JsonFormatter;

#[derive(Serialize)]
struct Stamped<'a> {
    ts: String,
    #[serde(flatten)]
    report: &'a Report,
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &Report) -> String {
        let stamped = Stamped {
            ts: iso8601_timestamp(),
            report,
        };
        // Plain structs of numbers and vectors always serialize
        serde_json::to_string(&stamped).unwrap_or_default()
    }
}
