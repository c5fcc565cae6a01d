//! Formatting shared by the views: rupee amounts, timestamps and the
//! success/failure notices shown as toasts.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use num_format::{Locale, ToFormattedString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Formats an amount with Indian digit grouping and a rupee sign. Paise are
/// shown only when present.
pub fn format_rupees(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let whole = abs.trunc() as i64;
    let paise = ((abs - abs.trunc()) * 100.0).round() as i64;
    let (whole, paise) = if paise == 100 { (whole + 1, 0) } else { (whole, paise) };
    let grouped = whole.to_formatted_string(&Locale::en_IN);
    if paise == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{paise:02}")
    }
}

/// Date and time in the viewer's offset, e.g. `02/11/2024, 15:00:00`.
pub fn format_timestamp(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Date only, used by the status browser.
pub fn format_date(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%d/%m/%Y").to_string()
}

/// Converts a JavaScript `getTimezoneOffset()` value (minutes *behind* UTC)
/// into a chrono offset. Out-of-range values fall back to UTC.
pub fn offset_from_js_minutes(minutes_behind_utc: i32) -> FixedOffset {
    FixedOffset::west_opt(minutes_behind_utc * 60).unwrap_or_else(utc_offset)
}

pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rupees_without_paise() {
        assert_eq!(format_rupees(5000.0), "₹5,000");
        assert_eq!(format_rupees(0.0), "₹0");
    }

    #[test]
    fn rupees_with_paise() {
        assert_eq!(format_rupees(12.5), "₹12.50");
    }

    #[test]
    fn timestamp_uses_viewer_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 2, 9, 30, 0).unwrap();
        // India is 330 minutes ahead, which JavaScript reports as -330.
        let ist = offset_from_js_minutes(-330);
        assert_eq!(format_timestamp(&ts, ist), "02/11/2024, 15:00:00");
        assert_eq!(format_date(&ts, utc_offset()), "02/11/2024");
    }

    #[test]
    fn notice_constructors() {
        assert!(Notice::error("nope").is_error());
        assert!(!Notice::success("ok").is_error());
    }
}
