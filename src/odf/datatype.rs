//! Time-of-day values and their ISO 8601 duration form.
//!
//! OpenDocument stores a `time` cell as a duration (`office:time-value`),
//! while callers hand us clock text such as `19:03:00`. The conversion keeps
//! the caller's digits: `19:03:00` becomes `PT19H03M00S`, not `PT19H3M0S`.

use std::fmt;

/// A `time` cell payload, parsed once when the cell is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue {
    /// Exactly three all-digit components.
    Clock {
        raw: String,
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
    /// Anything else. Encoded best-effort from whatever segments exist.
    Malformed { raw: String, segments: Vec<String> },
}

impl TimeValue {
    /// Parse clock text of the form `h:mm:ss`.
    ///
    /// Never fails: input that is not three digit groups becomes
    /// [`TimeValue::Malformed`]. A digit group too large for a `u32` is
    /// malformed as well, so it raises the usual warning, but its duration
    /// text is identical to the well-formed rendering because both copy the
    /// caller's digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use fods::odf::datatype::TimeValue;
    ///
    /// let t = TimeValue::parse("19:03:00");
    /// assert!(t.is_well_formed());
    /// assert_eq!(t.duration(), "PT19H03M00S");
    ///
    /// let t = TimeValue::parse("19:03");
    /// assert!(!t.is_well_formed());
    /// assert_eq!(t.duration(), "PT19H03MS");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split(':').collect();

        if let [h, m, s] = segments[..] {
            if let (Some(hours), Some(minutes), Some(seconds)) =
                (parse_digits(h), parse_digits(m), parse_digits(s))
            {
                return TimeValue::Clock {
                    raw: raw.to_string(),
                    hours,
                    minutes,
                    seconds,
                };
            }
        }

        TimeValue::Malformed {
            raw: raw.to_string(),
            segments: segments.into_iter().map(str::to_string).collect(),
        }
    }

    /// Build a well-formed value from numeric components.
    ///
    /// The display text is `h:mm:ss`.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        TimeValue::Clock {
            raw: format!("{}:{:02}:{:02}", hours, minutes, seconds),
            hours,
            minutes,
            seconds,
        }
    }

    /// The text the caller supplied, shown verbatim in the cell.
    pub fn raw(&self) -> &str {
        match self {
            TimeValue::Clock { raw, .. } | TimeValue::Malformed { raw, .. } => raw,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        matches!(self, TimeValue::Clock { .. })
    }

    /// Numeric `(hours, minutes, seconds)` for well-formed values.
    pub fn hms(&self) -> Option<(u32, u32, u32)> {
        match self {
            TimeValue::Clock {
                hours,
                minutes,
                seconds,
                ..
            } => Some((*hours, *minutes, *seconds)),
            TimeValue::Malformed { .. } => None,
        }
    }

    pub fn hours(&self) -> Option<u32> {
        self.hms().map(|(h, _, _)| h)
    }

    pub fn minutes(&self) -> Option<u32> {
        self.hms().map(|(_, m, _)| m)
    }

    pub fn seconds(&self) -> Option<u32> {
        self.hms().map(|(_, _, s)| s)
    }

    /// ISO 8601 duration, `PT{h}H{m}M{s}S`.
    ///
    /// Components are copied as the caller wrote them. Missing segments of a
    /// malformed value render as empty text and extra segments are dropped.
    pub fn duration(&self) -> String {
        match self {
            TimeValue::Clock { raw, .. } => {
                let mut parts = raw.split(':');
                let h = parts.next().unwrap_or_default();
                let m = parts.next().unwrap_or_default();
                let s = parts.next().unwrap_or_default();
                format!("PT{}H{}M{}S", h, m, s)
            },
            TimeValue::Malformed { segments, .. } => {
                let segment = |i: usize| segments.get(i).map(String::as_str).unwrap_or("");
                format!("PT{}H{}M{}S", segment(0), segment(1), segment(2))
            },
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_keeps_leading_zeros() {
        let t = TimeValue::parse("19:03:00");
        assert_eq!(t.hms(), Some((19, 3, 0)));
        assert_eq!(t.duration(), "PT19H03M00S");
        assert_eq!(t.raw(), "19:03:00");
    }

    #[test]
    fn test_hours_beyond_a_day() {
        let t = TimeValue::parse("36:00:05");
        assert!(t.is_well_formed());
        assert_eq!(t.duration(), "PT36H00M05S");
    }

    #[test]
    fn test_missing_segments_render_empty() {
        assert_eq!(TimeValue::parse("19").duration(), "PT19HMS");
        assert_eq!(TimeValue::parse("").duration(), "PTHMS");
    }

    #[test]
    fn test_extra_segments_are_dropped() {
        let t = TimeValue::parse("1:02:03:04");
        assert!(!t.is_well_formed());
        assert_eq!(t.duration(), "PT1H02M03S");
    }

    #[test]
    fn test_non_numeric_components_are_malformed() {
        let t = TimeValue::parse("aa:bb:cc");
        assert!(!t.is_well_formed());
        assert_eq!(t.hms(), None);
        assert_eq!(t.duration(), "PTaaHbbMccS");

        assert!(!TimeValue::parse("19:03:").is_well_formed());
        assert!(!TimeValue::parse("+1:00:00").is_well_formed());
    }

    #[test]
    fn test_from_hms() {
        let t = TimeValue::from_hms(7, 5, 9);
        assert_eq!(t.raw(), "7:05:09");
        assert_eq!(t.duration(), "PT7H05M09S");
        assert_eq!(t.to_string(), "7:05:09");
    }

    #[test]
    fn test_component_accessors() {
        let t = TimeValue::parse("19:03:07");
        assert_eq!(t.hours(), Some(19));
        assert_eq!(t.minutes(), Some(3));
        assert_eq!(t.seconds(), Some(7));

        let t = TimeValue::parse("19:03");
        assert_eq!(t.hours(), None);
        assert_eq!(t.minutes(), None);
        assert_eq!(t.seconds(), None);
    }

    #[test]
    fn test_overflowing_hours_keep_their_digits() {
        let t = TimeValue::parse("99999999999:00:00");
        assert!(!t.is_well_formed());
        assert_eq!(t.hours(), None);
        assert_eq!(t.duration(), "PT99999999999H00M00S");
    }
}
