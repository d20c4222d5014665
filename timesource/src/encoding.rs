use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// The only token that selects the epoch encoding. Matched verbatim,
/// case-sensitively; every other body takes the ISO branch, so the
/// service never has an error path of its own.
pub const TIMESTAMP_TOKEN: &str = "timestamp";

// Naive UTC with exactly six subsecond digits, no offset suffix.
const ISO_MICROS: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");

/// Render `now` in the encoding selected by the request token.
pub fn render(now: OffsetDateTime, token: &str) -> String {
    if token == TIMESTAMP_TOKEN {
        now.unix_timestamp().to_string()
    } else {
        now.format(ISO_MICROS)
            .expect("failed to format timestamp as iso8601")
    }
}
