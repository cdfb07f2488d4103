//! Duration and view-count formatting
//!
//! Display durations use `M:SS` below one hour and `H:MM:SS` above it. The
//! catalog delivers ISO 8601 durations (`PT4M13S`) which are converted into
//! the display form before a [`Track`](crate::Track) is built.

/// Parse a display duration into seconds
///
/// Accepts `M:SS` (`M*60 + SS`) and `H:MM:SS` (`H*3600 + MM*60 + SS`).
/// Returns `None` for anything else.
///
/// # Example
///
/// ```rust
/// use cent_core::format::parse_duration;
///
/// assert_eq!(parse_duration("3:45"), Some(225));
/// assert_eq!(parse_duration("1:02:03"), Some(3723));
/// assert_eq!(parse_duration("live"), None);
/// ```
pub fn parse_duration(text: &str) -> Option<u64> {
    let parts = text
        .trim()
        .split(':')
        .map(parse_component)
        .collect::<Option<Vec<u64>>>()?;

    match parts.as_slice() {
        [m, s] => m.checked_mul(60)?.checked_add(*s),
        [h, m, s] => h
            .checked_mul(3600)?
            .checked_add(m.checked_mul(60)?)?
            .checked_add(*s),
        _ => None,
    }
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Format whole seconds as `M:SS` or `H:MM:SS`
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Parse an ISO 8601 duration (`PT1H2M3S`, `P1DT2H`) into seconds
///
/// Only day, hour, minute and second designators are understood. Fractional
/// seconds are truncated. Totals that overflow `u64` yield `None`.
pub fn parse_iso8601_duration(text: &str) -> Option<u64> {
    let rest = text.trim().strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut total = 0u64;
    let mut seen = false;

    for (value, unit) in designators(date_part)? {
        let scale = match unit {
            'D' => 86_400,
            'W' => 7 * 86_400,
            _ => return None,
        };
        total = total.checked_add(value.checked_mul(scale)?)?;
        seen = true;
    }

    if let Some(time) = time_part {
        for (value, unit) in designators(time)? {
            let scale = match unit {
                'H' => 3600,
                'M' => 60,
                'S' => 1,
                _ => return None,
            };
            total = total.checked_add(value.checked_mul(scale)?)?;
            seen = true;
        }
    }

    seen.then_some(total)
}

/// Split `4M13S` into `[(4, 'M'), (13, 'S')]`
fn designators(text: &str) -> Option<Vec<(u64, char)>> {
    let mut out = Vec::new();
    let mut number = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
        } else {
            if number.is_empty() {
                return None;
            }
            let whole = number.split('.').next().unwrap_or_default();
            out.push((whole.parse().ok()?, c));
            number.clear();
        }
    }

    number.is_empty().then_some(out)
}

/// Convert an ISO 8601 duration into the display form
///
/// Unparsable input yields `"0:00"`.
///
/// # Example
///
/// ```rust
/// use cent_core::format::format_iso8601_duration;
///
/// assert_eq!(format_iso8601_duration("PT4M13S"), "4:13");
/// assert_eq!(format_iso8601_duration("PT1H2M3S"), "1:02:03");
/// assert_eq!(format_iso8601_duration("garbage"), "0:00");
/// ```
pub fn format_iso8601_duration(text: &str) -> String {
    parse_iso8601_duration(text).map_or_else(|| "0:00".to_string(), format_duration)
}

/// Abbreviate a view count with B/M/K suffixes and one decimal place
///
/// # Example
///
/// ```rust
/// use cent_core::format::format_view_count;
///
/// assert_eq!(format_view_count(2_500_000), "2.5M");
/// assert_eq!(format_view_count(950), "950");
/// assert_eq!(format_view_count(1_200_000_000), "1.2B");
/// ```
pub fn format_view_count(views: u64) -> String {
    let value = views as f64;
    if views >= 1_000_000_000 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if views >= 1_000_000 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        views.to_string()
    }
}

/// Abbreviate a view count delivered as a decimal string
///
/// Non-numeric input is returned unchanged.
pub fn format_view_count_str(views: &str) -> String {
    views
        .trim()
        .parse::<u64>()
        .map_or_else(|_| views.to_string(), format_view_count)
}

/// Format a playback position as `M:SS`
///
/// Minutes are not rolled into hours. Negative and non-finite input is shown
/// as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
