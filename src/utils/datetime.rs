//! Date and time utility functions
//!
//! Synced records exchange timestamps as pattern-rendered text, so most
//! helpers here convert between such strings and absolute UTC instants.
//! Formatting and parsing are pure given their inputs; the `*_or_now`,
//! `now_*`, `is_today` and `is_yesterday` helpers read the wall clock.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, Days, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Timestamp format of synced records, rendered in UTC
/// (e.g. "Wed, 20 Aug 2025 10:15:00 UTC")
pub const DB_TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Chat message time, 12-hour clock without zero padding (e.g. "9:05 AM")
pub const MESSAGE_TIME_FORMAT: &str = "%-I:%M %p";

/// Chat day separator (e.g. "Wed, 20 Aug 2025")
pub const MESSAGE_DAY_FORMAT: &str = "%a, %d %b %Y";

/// Zero-padded 12-hour clock time (e.g. "09:05 AM")
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Calendar date (e.g. "2025-08-20")
pub const YMD_FORMAT: &str = "%Y-%m-%d";

/// Month-first display date (e.g. "Aug 20, 2025")
pub const MONTH_DAY_YEAR_FORMAT: &str = "%b %d, %Y";

/// Call log entry timestamp, no zone marker (e.g. "Wed, 20 Aug 2025 10:15:00")
pub const CALL_LOG_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Last-sync timestamp as stored (e.g. "2025-08-20 10:15:00")
pub const LAST_SYNC_DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Last-sync timestamp as displayed (e.g. "10:15 AM 20 Aug 2025")
pub const LAST_SYNC_DISPLAY_FORMAT: &str = "%I:%M %p %d %b %Y";

/// Date of birth as stored, millisecond precision with numeric offset
/// (e.g. "1997-10-20T00:00:00.000+0530")
pub const DOB_DB_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// The zone a pattern is rendered in or parsed against.
///
/// Everything in this module works on absolute UTC instants; `Zone` only
/// decides how text relates to those instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// Coordinated universal time, the storage zone
    Utc,
    /// The device zone, the display zone
    #[default]
    Local,
}

impl Zone {
    /// Resolves a zone-less date and time to an absolute instant.
    fn resolve(self, datetime: NaiveDateTime) -> DateTime<Utc> {
        match self {
            Zone::Utc => Utc.from_utc_datetime(&datetime),
            Zone::Local => Local
                .from_local_datetime(&datetime)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&datetime))
                .with_timezone(&Utc),
        }
    }
}

/// Errors from [`try_parse`].
#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error("Failed to parse '{text}' with pattern '{pattern}'")]
    Parse {
        text: String,
        pattern: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("Pattern '{pattern}' does not pin '{text}' to a date or time")]
    Incomplete { text: String, pattern: String },
}

/// Render an instant as text
///
/// # Arguments
/// * `instant` - The instant to render
/// * `pattern` - A strftime pattern
/// * `zone` - The zone whose wall clock the text should show
///
/// # Returns
/// * `String` - The rendered text
pub fn format_in(instant: DateTime<Utc>, pattern: &str, zone: Zone) -> String {
    match zone {
        Zone::Utc => instant.format(pattern).to_string(),
        Zone::Local => instant.with_timezone(&Local).format(pattern).to_string(),
    }
}

/// Render an instant as UTC text
pub fn format_utc(instant: DateTime<Utc>, pattern: &str) -> String {
    format_in(instant, pattern, Zone::Utc)
}

/// Render an instant as local-zone text
pub fn format_local(instant: DateTime<Utc>, pattern: &str) -> String {
    format_in(instant, pattern, Zone::Local)
}

/// Parse text into an absolute instant
///
/// Patterns that carry their own offset (`%z`) resolve without consulting
/// `zone`. Date-only patterns land on midnight; time-only patterns land on
/// the Unix epoch date.
///
/// # Arguments
/// * `text` - The text to parse
/// * `pattern` - A strftime pattern
/// * `zone` - The zone the text's wall clock is read in
///
/// # Returns
/// * `Result<DateTime<Utc>, DateTimeError>` - The parsed instant, or why the
///   text did not yield one
pub fn try_parse(text: &str, pattern: &str, zone: Zone) -> Result<DateTime<Utc>, DateTimeError> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(pattern)).map_err(|source| DateTimeError::Parse {
        text: text.to_string(),
        pattern: pattern.to_string(),
        source,
    })?;

    if let Ok(instant) = parsed.to_datetime() {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = if let Ok(datetime) = parsed.to_naive_datetime_with_offset(0) {
        datetime
    } else if let Ok(date) = parsed.to_naive_date() {
        date.and_time(NaiveTime::MIN)
    } else if let Ok(time) = parsed.to_naive_time() {
        NaiveDate::default().and_time(time)
    } else {
        return Err(DateTimeError::Incomplete {
            text: text.to_string(),
            pattern: pattern.to_string(),
        });
    };

    Ok(zone.resolve(naive))
}

/// Parse text into an instant, substituting the current instant on failure
///
/// The substitution is silent toward the caller; the failure is only logged.
/// Stored timestamps are rendered through this, so a corrupt value displays
/// as "now". Use [`try_parse`] where the failure must be observable.
///
/// # Arguments
/// * `text` - The text to parse
/// * `pattern` - A strftime pattern
/// * `zone` - The zone the text's wall clock is read in
///
/// # Returns
/// * `DateTime<Utc>` - The parsed instant, or the current instant
pub fn parse_or_now(text: &str, pattern: &str, zone: Zone) -> DateTime<Utc> {
    match try_parse(text, pattern, zone) {
        Ok(instant) => instant,
        Err(error) => {
            log::error!("❌ Date parse failed: {error}");
            Utc::now()
        }
    }
}

/// Parse UTC-rendered text, substituting the current instant on failure
pub fn parse_utc_or_now(text: &str, pattern: &str) -> DateTime<Utc> {
    parse_or_now(text, pattern, Zone::Utc)
}

/// The current instant
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// The current instant carrying the device zone
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// The instant `days` calendar days from now
///
/// Day steps follow the wall clock of `zone`: shifting across a
/// daylight-saving transition in the local zone keeps the clock time and
/// changes the absolute distance, while UTC day steps are exactly 24 hours.
///
/// # Arguments
/// * `zone` - The zone whose calendar the days are counted in
/// * `days` - Days to move, negative for the past
///
/// # Returns
/// * `DateTime<Utc>` - The shifted instant
pub fn now_plus_days(zone: Zone, days: i64) -> DateTime<Utc> {
    match zone {
        Zone::Utc => shift_days(Utc::now(), days),
        Zone::Local => shift_days(Local::now(), days).with_timezone(&Utc),
    }
}

/// Moves an instant by whole calendar days in its own zone.
fn shift_days<Tz: TimeZone>(instant: DateTime<Tz>, days: i64) -> DateTime<Tz> {
    let shifted = if days >= 0 {
        instant.clone().checked_add_days(Days::new(days as u64))
    } else {
        instant.clone().checked_sub_days(Days::new(days.unsigned_abs()))
    };

    // The calendar step has no result when the target wall-clock time does
    // not exist in the zone; an exact 24-hour step stands in for it.
    shifted.unwrap_or_else(|| instant + Duration::days(days))
}

/// The current instant in the synced-record timestamp format
pub fn current_db_timestamp() -> String {
    format_utc(Utc::now(), DB_TIMESTAMP_FORMAT)
}

/// The instant `days` days from now in the synced-record timestamp format
pub fn db_timestamp_plus_days(days: i64) -> String {
    format_utc(now_plus_days(Zone::Utc, days), DB_TIMESTAMP_FORMAT)
}

/// The current instant rendered in UTC with the given pattern
pub fn current_utc_string(pattern: &str) -> String {
    format_utc(Utc::now(), pattern)
}

/// Whether two instants fall on the same local calendar day
pub fn is_same_local_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.with_timezone(&Local).date_naive() == b.with_timezone(&Local).date_naive()
}

/// Whether an instant falls on today's local calendar day
pub fn is_today(instant: DateTime<Utc>) -> bool {
    is_same_local_day(instant, Utc::now())
}

/// Whether an instant falls on yesterday's local calendar day
///
/// Checked by sliding the instant forward 24 hours and testing it against
/// today. Around daylight-saving transitions this differs from a plain
/// calendar-day comparison, and stored data depends on the 24-hour reading.
pub fn is_yesterday(instant: DateTime<Utc>) -> bool {
    is_today(instant + Duration::hours(24))
}

/// Re-render a UTC timestamp in the local zone
///
/// # Arguments
/// * `text` - UTC-rendered timestamp text
/// * `utc_pattern` - Pattern the text is in
/// * `local_pattern` - Pattern for the local rendering
///
/// # Returns
/// * `String` - The local-zone rendering; unparseable text renders "now"
pub fn utc_to_local_string(text: &str, utc_pattern: &str, local_pattern: &str) -> String {
    format_local(parse_utc_or_now(text, utc_pattern), local_pattern)
}

/// Parse a UTC timestamp into an instant carrying the device zone
pub fn utc_to_local(text: &str, utc_pattern: &str) -> DateTime<Local> {
    parse_utc_or_now(text, utc_pattern).with_timezone(&Local)
}

/// Whole minutes between two instants, truncated toward zero
pub fn minutes_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    (later - earlier).num_minutes()
}

/// Whole minutes from a UTC-rendered timestamp to now
///
/// Negative when the timestamp lies in the future. Unparseable text reads
/// as "now", making the result zero.
pub fn minutes_since_utc(text: &str, pattern: &str) -> i64 {
    minutes_between(Utc::now(), parse_utc_or_now(text, pattern))
}
