use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::convert::TryFrom;
use std::time::Duration;

lazy_static! {
    static ref TIME_STRING_REGEX: Regex = Regex::new(
        r"^(?:\d+(?:\.\d+)?\s*[a-z]+\s*)+$"
    )
    .expect("Regex compilation error");

    static ref DURATION_REGEX: Regex = Regex::new(
        r"(?P<value>\d+(?:\.\d+)?)\s*(?P<unit>[a-z]+)"
    )
    .expect("Regex compilation error");
}

/// A single `<value><unit>` component of a time string, e.g. `90s` or `1.5 minutes`.
#[derive(Debug, PartialEq)]
pub struct DurationUnit {
    value: f64,
    unit: TimeUnit,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    fn seconds(self) -> f64 {
        match self {
            TimeUnit::Nanosecond => 1e-9,
            TimeUnit::Microsecond => 1e-6,
            TimeUnit::Millisecond => 1e-3,
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 60.0 * 60.0,
            TimeUnit::Day => 60.0 * 60.0 * 24.0,
        }
    }
}

/// Parses a timeout-style time string into a [`Duration`].
///
/// Accepts a bare number of seconds (`"10"`, `"1.5"`) or a sequence of
/// value/unit pairs (`"1m 30s"`, `"1 minute 30 seconds"`, `"500ms"`).
pub fn parse_time(input: &str) -> Result<Duration, Error> {
    let normalized = input.trim().to_lowercase();
    if let Ok(seconds) = normalized.parse::<f64>() {
        return to_duration(seconds, input);
    }
    if !TIME_STRING_REGEX.is_match(&normalized) {
        return Err(Error::Syntax(format!("Invalid time string '{}'", input)));
    }
    let mut seconds = 0.0;
    for caps in DURATION_REGEX.captures_iter(&normalized) {
        let unit: DurationUnit = caps[0].parse()?;
        seconds += unit.seconds();
    }
    to_duration(seconds, input)
}

fn to_duration(seconds: f64, input: &str) -> Result<Duration, Error> {
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| Error::Syntax(format!("Invalid time string '{}'", input)))
}

impl DurationUnit {
    fn seconds(&self) -> f64 {
        self.value * self.unit.seconds()
    }
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match DURATION_REGEX.captures(s) {
            Some(caps) if caps[0].len() == s.len() => {
                let value = caps["value"]
                    .parse()
                    .map_err(|_| Error::Syntax(format!("Invalid number in '{}'", s)))?;
                let unit = caps["unit"].parse::<TimeUnit>()?;
                Ok(Self { value, unit })
            }
            _ => Err(Error::Syntax(
                "Current string is not correct duration unit value".to_owned(),
            )),
        }
    }
}

impl TryFrom<DurationUnit> for Duration {
    type Error = Error;

    fn try_from(unit: DurationUnit) -> Result<Self, Error> {
        to_duration(unit.seconds(), &format!("{} {:?}", unit.value, unit.unit))
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" | "nanosecond" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanosecond),
            "us" | "microsecond" | "micros" | "microseconds" => Ok(TimeUnit::Microsecond),
            "ms" | "millisecond" | "millis" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "sec" | "second" | "secs" | "seconds" => Ok(TimeUnit::Second),
            "m" | "min" | "minute" | "mins" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            _ => Err(Error::UnitNotSupported(format!("Unit '{}' not supported", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_time_unit_from_string() {
        assert_eq!("ms".parse::<TimeUnit>(), Ok(TimeUnit::Millisecond));
        assert_eq!("seconds".parse::<TimeUnit>(), Ok(TimeUnit::Second));
        assert_eq!("min".parse::<TimeUnit>(), Ok(TimeUnit::Minute));
        assert_eq!("h".parse::<TimeUnit>(), Ok(TimeUnit::Hour));
        assert!(matches!(
            "fortnight".parse::<TimeUnit>(),
            Err(Error::UnitNotSupported(_))
        ));
    }

    #[test]
    fn test_conversion_duration_unit_to_duration() {
        let unit = "200ms".parse::<DurationUnit>().unwrap();
        let result = Duration::try_from(unit).unwrap();

        assert_eq!(result, Duration::from_millis(200));
    }

    #[test]
    fn test_parse_compound_time_strings() {
        assert_eq!(parse_time("90").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_time("1m 30s").unwrap(), Duration::from_secs(90));
        assert_eq!(
            parse_time("1 minute 30 seconds").unwrap(),
            Duration::from_secs(90)
        );
        assert_eq!(parse_time(" 2 Hours ").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_time("1.5s").unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_time("soon"), Err(Error::Syntax(_))));
        assert!(matches!(parse_time("-5"), Err(Error::Syntax(_))));
        assert!(matches!(parse_time("1e30"), Err(Error::Syntax(_))));
        assert!(matches!(
            parse_time("999999999999999999999 days"),
            Err(Error::Syntax(_))
        ));
        assert!(matches!(
            parse_time("3 fortnights"),
            Err(Error::UnitNotSupported(_))
        ));
    }
}
