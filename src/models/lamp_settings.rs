use std::fmt;
use std::fmt::Formatter;
use std::ops::RangeInclusive;

/// Kind of value asked from the operator, each with its own accepted range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Hour,
    Minute,
    Temperature,
}

impl FieldKind {
    /// Returns the inclusive range of values the lamp firmware can make use of
    pub fn range(&self) -> RangeInclusive<u16> {
        match self {
            FieldKind::Hour => 0..=23,
            FieldKind::Minute => 0..=59,
            FieldKind::Temperature => 100..=10000,
        }
    }

    /// Parses and range checks the text given by the operator
    ///
    /// Only the text itself is considered, any surrounding whitespace makes the parse fail.
    ///
    /// # Arguments
    ///
    /// * 'text' - the operator input with the line terminator already removed
    pub fn parse(&self, text: &str) -> Result<u16, String> {
        let value = text.parse::<u16>()
            .map_err(|_| format!("'{}' is not a whole number", text))?;

        let range = self.range();
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(format!("{} is outside the {} range {} - {}", value, self, range.start(), range.end()))
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FieldKind::Hour        => write!(f, "hour"),
            FieldKind::Minute      => write!(f, "minute"),
            FieldKind::Temperature => write!(f, "temperature"),
        }
    }
}

/// An hour and minute pair, used both for points in time and for durations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:>02}:{:>02}", self.hour, self.minute)
    }
}

/// Settings collected from the operator for one run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LampSettings {
    /// Evening time when the lamp starts going towards night temperature
    pub sundown: ClockTime,
    /// Morning time when the lamp goes back to day temperature
    pub sunrise: ClockTime,
    /// How long the change between day and night temperature takes
    pub transition: ClockTime,
    pub temp_day: u16,
    pub temp_night: u16,
}

impl fmt::Display for LampSettings {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Sundown {}, Sunrise {}, Transition {}, Day {:>5}, Night {:>5}",
               self.sundown, self.sunrise, self.transition, self.temp_day, self.temp_night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_range_bounds() {
        assert_eq!(FieldKind::Hour.parse("0"), Ok(0));
        assert_eq!(FieldKind::Hour.parse("23"), Ok(23));
        assert_eq!(FieldKind::Minute.parse("59"), Ok(59));
        assert_eq!(FieldKind::Temperature.parse("100"), Ok(100));
        assert_eq!(FieldKind::Temperature.parse("10000"), Ok(10000));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(FieldKind::Hour.parse("24").is_err());
        assert!(FieldKind::Minute.parse("60").is_err());
        assert!(FieldKind::Temperature.parse("99").is_err());
        assert!(FieldKind::Temperature.parse("10001").is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_and_padded_text() {
        assert!(FieldKind::Hour.parse("").is_err());
        assert!(FieldKind::Hour.parse("six").is_err());
        assert!(FieldKind::Hour.parse(" 6").is_err());
        assert!(FieldKind::Minute.parse("-1").is_err());
        assert!(FieldKind::Temperature.parse("10 000").is_err());
    }

    #[test]
    fn settings_display() {
        let settings = LampSettings {
            sundown: ClockTime { hour: 20, minute: 0 },
            sunrise: ClockTime { hour: 6, minute: 30 },
            transition: ClockTime { hour: 0, minute: 15 },
            temp_day: 9000,
            temp_night: 300,
        };

        assert_eq!(settings.to_string(),
                   "Sundown 20:00, Sunrise 06:30, Transition 00:15, Day  9000, Night   300");
    }
}
