//! Partition comments into ordered, fixed-width time buckets.
//!
//! Two modes with the same shape of result:
//!
//! - [`bucket_by_date`] walks calendar intervals from a start datetime
//! - [`bucket_by_time_of_day`] folds every comment onto its minute of day,
//!   ignoring the date entirely
//!
//! Buckets are contiguous, non-overlapping, and cover the full requested
//! range. Empty buckets are emitted rather than skipped: plotting code
//! relies on positional alignment across authors with differing activity,
//! so a bucket-to-count mapping must never drop a key.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{ChatLensError, Result};
use crate::record::Comment;

/// Minutes in a day; the exclusive upper bound for time-of-day buckets.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A calendar-interval bucket: comments with
/// `start <= timestamp < start + width`.
#[derive(Debug, Clone)]
pub struct DateBucket<'a> {
    /// Start of the bucket's window (inclusive).
    pub start: DateTime<Utc>,

    /// Comments falling in the window, in input order.
    pub comments: Vec<&'a Comment>,
}

/// A time-of-day bucket: comments with
/// `start_minute <= minute_of_day < start_minute + delta`.
#[derive(Debug, Clone)]
pub struct MinuteBucket<'a> {
    /// Start of the bucket's window in minutes of the day (inclusive).
    pub start_minute: u32,

    /// Comments falling in the window, in input order.
    pub comments: Vec<&'a Comment>,
}

/// Partitions comments into calendar-interval buckets.
///
/// Buckets start at `start`, `start + width`, `start + 2*width`, … for as
/// long as the bucket start is before `end`; the last bucket may extend
/// past `end`. A `start >= end` range is a valid empty result, not an
/// error.
///
/// # Errors
///
/// Returns [`ChatLensError::InvalidRange`] if `width` is zero or negative.
///
/// # Example
///
/// ```
/// use chatlens::Chat;
/// use chatlens::analysis::bucket_by_date;
/// use chrono::TimeDelta;
///
/// let chat = Chat::parse_str(
///     "27/09/2018, 23:51:00 - Sil: one\n\
///      28/09/2018, 08:00:00 - Sil: two",
/// );
/// let comments = chat.comments();
/// let buckets = bucket_by_date(
///     &comments,
///     chat.start_datetime()?,
///     chat.end_datetime()?,
///     TimeDelta::days(1),
/// )?;
/// assert_eq!(buckets.len(), 1);
/// assert_eq!(buckets[0].comments.len(), 2);
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn bucket_by_date<'a>(
    comments: &[&'a Comment],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    width: TimeDelta,
) -> Result<Vec<DateBucket<'a>>> {
    if width <= TimeDelta::zero() {
        return Err(ChatLensError::invalid_range(format!(
            "bucket width must be positive, got {width}"
        )));
    }

    let mut buckets = Vec::new();
    let mut current = start;
    while current < end {
        let bucket_end = current + width;
        let members = comments
            .iter()
            .copied()
            .filter(|c| current <= c.timestamp && c.timestamp < bucket_end)
            .collect();
        buckets.push(DateBucket {
            start: current,
            comments: members,
        });
        current = bucket_end;
    }

    Ok(buckets)
}

/// Partitions comments into time-of-day buckets, ignoring the date.
///
/// Buckets start at minute 0, `delta_minutes`, `2 * delta_minutes`, … for
/// as long as the bucket start is before 1440. A `delta_minutes` that
/// divides 1440 evenly gives clean output, but any positive value works
/// (the last bucket simply extends past midnight's boundary).
///
/// # Errors
///
/// Returns [`ChatLensError::InvalidRange`] if `delta_minutes` is zero.
///
/// # Example
///
/// ```
/// use chatlens::Chat;
/// use chatlens::analysis::bucket_by_time_of_day;
///
/// let chat = Chat::parse_str("27/09/2018, 23:51:00 - Sil: late one");
/// let comments = chat.comments();
/// let buckets = bucket_by_time_of_day(&comments, 60)?;
/// assert_eq!(buckets.len(), 24);
/// assert_eq!(buckets[23].comments.len(), 1);
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn bucket_by_time_of_day<'a>(
    comments: &[&'a Comment],
    delta_minutes: u32,
) -> Result<Vec<MinuteBucket<'a>>> {
    if delta_minutes == 0 {
        return Err(ChatLensError::invalid_range(
            "delta_minutes must be positive",
        ));
    }

    let mut buckets = Vec::new();
    let mut current = 0;
    while current < MINUTES_PER_DAY {
        let bucket_end = current + delta_minutes;
        let members = comments
            .iter()
            .copied()
            .filter(|c| {
                let minute = c.minute_of_day();
                current <= minute && minute < bucket_end
            })
            .collect();
        buckets.push(MinuteBucket {
            start_minute: current,
            comments: members,
        });
        current = bucket_end;
    }

    Ok(buckets)
}

/// Maps date buckets to their member counts, one entry per bucket.
///
/// Empty buckets contribute a zero, so series from different authors over
/// the same range stay positionally aligned.
pub fn count_series(buckets: &[DateBucket<'_>]) -> Vec<usize> {
    buckets.iter().map(|b| b.comments.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_comment(day: u32, hour: u32, minute: u32) -> Comment {
        Comment {
            raw_line: String::new(),
            timestamp: Utc
                .with_ymd_and_hms(2018, 9, day, hour, minute, 0)
                .unwrap(),
            author_name: "Sil".to_string(),
            text: "x".to_string(),
        }
    }

    #[test]
    fn test_date_buckets_contiguous_and_complete() {
        let comments = vec![
            make_comment(1, 12, 0),
            make_comment(3, 12, 0),
            make_comment(5, 12, 0),
        ];
        let refs: Vec<&Comment> = comments.iter().collect();
        let start = Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2018, 9, 6, 0, 0, 0).unwrap();
        let buckets = bucket_by_date(&refs, start, end, TimeDelta::days(1)).unwrap();

        assert_eq!(buckets.len(), 5);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].start + TimeDelta::days(1), pair[1].start);
        }
        // Member union equals input restricted to [start, last_bucket_end)
        let total: usize = buckets.iter().map(|b| b.comments.len()).sum();
        assert_eq!(total, 3);
        assert_eq!(count_series(&buckets), vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_last_bucket_may_extend_past_end() {
        let comments = vec![make_comment(2, 23, 0)];
        let refs: Vec<&Comment> = comments.iter().collect();
        let start = Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2018, 9, 2, 12, 0, 0).unwrap();
        let buckets = bucket_by_date(&refs, start, end, TimeDelta::days(1)).unwrap();

        // Second bucket starts before `end`, so it is produced and holds a
        // comment posted after `end`.
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].comments.len(), 1);
    }

    #[test]
    fn test_empty_range_is_empty_result() {
        let refs: Vec<&Comment> = Vec::new();
        let start = Utc.with_ymd_and_hms(2018, 9, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap();
        let buckets = bucket_by_date(&refs, start, end, TimeDelta::days(1)).unwrap();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_zero_width_is_invalid() {
        let refs: Vec<&Comment> = Vec::new();
        let start = Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2018, 9, 2, 0, 0, 0).unwrap();
        let result = bucket_by_date(&refs, start, end, TimeDelta::zero());
        assert!(matches!(result, Err(ChatLensError::InvalidRange { .. })));
    }

    #[test]
    fn test_bucket_boundary_membership() {
        // A comment exactly on a boundary belongs to the later bucket.
        let comments = vec![make_comment(2, 0, 0)];
        let refs: Vec<&Comment> = comments.iter().collect();
        let start = Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2018, 9, 3, 0, 0, 0).unwrap();
        let buckets = bucket_by_date(&refs, start, end, TimeDelta::days(1)).unwrap();
        assert_eq!(buckets[0].comments.len(), 0);
        assert_eq!(buckets[1].comments.len(), 1);
    }

    #[test]
    fn test_time_of_day_single_bucket() {
        let comments = vec![
            make_comment(1, 0, 0),
            make_comment(2, 12, 30),
            make_comment(3, 23, 59),
        ];
        let refs: Vec<&Comment> = comments.iter().collect();
        let buckets = bucket_by_time_of_day(&refs, MINUTES_PER_DAY).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].start_minute, 0);
        assert_eq!(buckets[0].comments.len(), 3);
    }

    #[test]
    fn test_time_of_day_ignores_date() {
        // Same minute of day on different dates lands in the same bucket.
        let comments = vec![make_comment(1, 9, 15), make_comment(20, 9, 45)];
        let refs: Vec<&Comment> = comments.iter().collect();
        let buckets = bucket_by_time_of_day(&refs, 60).unwrap();
        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[9].comments.len(), 2);
    }

    #[test]
    fn test_time_of_day_empty_buckets_emitted() {
        let refs: Vec<&Comment> = Vec::new();
        let buckets = bucket_by_time_of_day(&refs, 120).unwrap();
        assert_eq!(buckets.len(), 12);
        assert!(buckets.iter().all(|b| b.comments.is_empty()));
        let starts: Vec<u32> = buckets.iter().map(|b| b.start_minute).collect();
        assert_eq!(starts[0], 0);
        assert_eq!(starts[11], 1320);
    }

    #[test]
    fn test_time_of_day_zero_delta_is_invalid() {
        let refs: Vec<&Comment> = Vec::new();
        let result = bucket_by_time_of_day(&refs, 0);
        assert!(matches!(result, Err(ChatLensError::InvalidRange { .. })));
    }

    #[test]
    fn test_uneven_delta_still_covers_day() {
        // 1440 is not divisible by 500; the last bucket extends past 1440.
        let comments = vec![make_comment(1, 23, 59)];
        let refs: Vec<&Comment> = comments.iter().collect();
        let buckets = bucket_by_time_of_day(&refs, 500).unwrap();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[2].comments.len(), 1);
    }
}
