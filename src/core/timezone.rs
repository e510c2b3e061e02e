use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

/// All schools run on Asia/Bangkok time (UTC+7, no daylight saving)
const SCHOOL_UTC_OFFSET_SECS: i32 = 7 * 3600;

fn school_offset() -> FixedOffset {
    FixedOffset::east_opt(SCHOOL_UTC_OFFSET_SECS).expect("Valid offset")
}

/// Convert a UTC instant to school-local time
pub fn to_school_time(utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
    utc_time.with_timezone(&school_offset())
}

/// Calendar date of a class taught at `utc_time`
pub fn school_date(utc_time: DateTime<Utc>) -> NaiveDate {
    to_school_time(utc_time).date_naive()
}

/// Wall-clock check-in time at `utc_time`, truncated to whole seconds
pub fn school_clock_time(utc_time: DateTime<Utc>) -> NaiveTime {
    let local = to_school_time(utc_time).time();
    local.with_nanosecond(0).unwrap_or(local)
}
