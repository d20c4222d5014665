use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::api::FormatError;
use crate::upstream::TimeSource;

/// The user-facing format selector. Parsed case-insensitively after
/// trimming, unlike the timesource token match which is verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Iso,
    Epoch,
}

/// The encoding the timesource service understands on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Iso,
    Timestamp,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        match raw.trim().to_lowercase().as_str() {
            "iso" => Ok(OutputFormat::Iso),
            "epoch" => Ok(OutputFormat::Epoch),
            _ => Err(FormatError::InvalidFormat),
        }
    }

    pub fn source_encoding(&self) -> SourceEncoding {
        match self {
            OutputFormat::Iso => SourceEncoding::Iso,
            OutputFormat::Epoch => SourceEncoding::Timestamp,
        }
    }
}

impl SourceEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceEncoding::Iso => "iso",
            SourceEncoding::Timestamp => "timestamp",
        }
    }
}

// Naive UTC as produced by the timesource ISO branch. Subseconds are
// optional on input even though the upstream always emits six digits.
const ISO_NAIVE: &[FormatItem<'static>] = format_description!(
    version = 2,
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

const DATE_ONLY: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Run one format request end to end: validate the token, fetch the raw
/// timestamp in the mapped encoding, parse it and render the date.
///
/// Invalid tokens never reach the upstream. A single failed attempt
/// terminates the request; there is no retry.
pub async fn format_request(
    raw: &str,
    timesource: &dyn TimeSource,
) -> Result<String, FormatError> {
    let format = OutputFormat::parse(raw)?;
    let body = timesource.fetch(format.source_encoding()).await?;

    render_date(format, body.trim())
}

/// Parse a raw timesource payload under the requested format and render
/// it as a `YYYY-MM-DD` date.
pub(crate) fn render_date(format: OutputFormat, raw: &str) -> Result<String, FormatError> {
    let date = match format {
        OutputFormat::Iso => PrimitiveDateTime::parse(raw, ISO_NAIVE)
            .map_err(|err| FormatError::UpstreamMalformed(err.to_string()))?
            .date(),

        OutputFormat::Epoch => {
            let seconds = raw
                .parse::<i64>()
                .map_err(|err| FormatError::UpstreamMalformed(err.to_string()))?;

            OffsetDateTime::from_unix_timestamp(seconds)
                .map_err(|err| FormatError::UpstreamMalformed(err.to_string()))?
                .date()
        }
    };

    date.format(DATE_ONLY)
        .map_err(|err| FormatError::UpstreamMalformed(err.to_string()))
}
