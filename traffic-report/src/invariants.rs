use std::{str::FromStr, sync::LazyLock};

use chrono::{NaiveDateTime, ParseError, Timelike};
use derive_more::{Debug, Display};
use regex::Regex;

// Access log timestamps: 2024-01-01 09:15:00
const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static IMAGE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|gif|png)$").expect("valid image regex"));

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// True when the path ends in `.jpg`, `.gif` or `.png`, ignoring case.
    pub fn is_image(&self) -> bool {
        IMAGE_EXTENSION.is_match(&self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TS_FORMAT).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    fn endpoint(s: &str) -> Endpoint {
        Endpoint::from(s)
    }

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert_that!(endpoint("a.jpg").is_image()).is_true();
        assert_that!(endpoint("A.JPG").is_image()).is_true();
        assert_that!(endpoint("/img/logo.Png").is_image()).is_true();
        assert_that!(endpoint("/anim.gif").is_image()).is_true();
    }

    #[test]
    fn image_extension_is_anchored_at_the_end() {
        assert_that!(endpoint("a.jpgx").is_image()).is_false();
        assert_that!(endpoint("/a.png/index.html").is_image()).is_false();
        assert_that!(endpoint("/jpg").is_image()).is_false();
        assert_that!(endpoint("").is_image()).is_false();
    }

    #[test]
    fn timestamp_parses_and_keeps_its_text_form() {
        let ts: Timestamp = "2024-01-01 09:45:30".parse().unwrap();
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.to_string(), "2024-01-01 09:45:30");
    }

    #[test]
    fn timestamp_uses_a_24_hour_clock() {
        let ts: Timestamp = "2024-03-10 23:00:00".parse().unwrap();
        assert_eq!(ts.hour(), 23);
    }

    #[test]
    fn timestamp_rejects_other_formats() {
        assert_that!("01/Jun/1995:00:00:59 -0600".parse::<Timestamp>()).is_err();
        assert_that!("2024-01-01T09:15:00".parse::<Timestamp>()).is_err();
        assert_that!("2024-01-01 25:00:00".parse::<Timestamp>()).is_err();
        assert_that!("2024-01-01 09:15:00 extra".parse::<Timestamp>()).is_err();
    }
}
