use derive_more::Display;
use regex::Regex;
use std::{collections::BTreeMap, fmt, sync::LazyLock};

use crate::models::LogRecord;

static INTERNET_EXPLORER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("MSIE|Trident").expect("valid IE regex"));

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Firefox,
    Chrome,
    #[display("Internet Explorer")]
    InternetExplorer,
    Safari,
}

/// Browser signatures in match priority. Chrome user agents also carry
/// `Safari`, so Chrome must be tried first.
pub const SIGNATURES: [(Browser, fn(&str) -> bool); 4] = [
    (Browser::Firefox, |ua| ua.contains("Firefox")),
    (Browser::Chrome, |ua| ua.contains("Chrome")),
    (Browser::InternetExplorer, |ua| INTERNET_EXPLORER.is_match(ua)),
    (Browser::Safari, is_safari),
];

// Some `Safari` token with no `Chrome` anywhere after it.
fn is_safari(ua: &str) -> bool {
    ua.rfind("Safari")
        .is_some_and(|at| !ua[at..].contains("Chrome"))
}

impl Browser {
    pub fn classify(user_agent: &str) -> Option<Self> {
        SIGNATURES
            .iter()
            .find(|(_, matches)| matches(user_agent))
            .map(|(browser, _)| *browser)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageShare {
    pub images: usize,
    pub total: usize,
}

impl ImageShare {
    pub fn from_records(records: &[LogRecord]) -> Self {
        Self {
            images: records.iter().filter(|r| r.path.is_image()).count(),
            total: records.len(),
        }
    }

    /// Share of image requests in percent, `0.0` for an empty log.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.images as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for ImageShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Image requests account for {:.1}% of all requests",
            self.percentage()
        )
    }
}

/// Requests per browser, kept in order of first appearance in the log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserTally {
    counts: Vec<(Browser, usize)>,
}

impl BrowserTally {
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut tally = Self::default();
        for browser in records
            .iter()
            .filter_map(|r| Browser::classify(&r.user_agent))
        {
            tally.record(browser);
        }
        tally
    }

    fn record(&mut self, browser: Browser) {
        match self.counts.iter_mut().find(|(b, _)| *b == browser) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((browser, 1)),
        }
    }

    pub fn count(&self, browser: Browser) -> usize {
        self.counts
            .iter()
            .find(|(b, _)| *b == browser)
            .map_or(0, |(_, count)| *count)
    }

    /// Highest count wins; on a tie the browser seen first in the log wins.
    pub fn most_popular(&self) -> Option<(Browser, usize)> {
        self.counts
            .iter()
            .copied()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }
}

impl fmt::Display for BrowserTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.most_popular() {
            Some((browser, count)) => write!(
                f,
                "The most popular browser is {browser} with {count} requests"
            ),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HourlyHistogram {
    by_hour: BTreeMap<u32, usize>,
}

impl HourlyHistogram {
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut by_hour = BTreeMap::new();
        for record in records {
            *by_hour.entry(record.timestamp.hour()).or_default() += 1;
        }
        Self { by_hour }
    }

    /// Populated hours in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.by_hour.iter().map(|(hour, count)| (*hour, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.by_hour.is_empty()
    }
}

impl fmt::Display for HourlyHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.iter();
        if let Some((hour, hits)) = lines.next() {
            write!(f, "Hour {hour:02} has {hits} hits")?;
        }
        for (hour, hits) in lines {
            write!(f, "\nHour {hour:02} has {hits} hits")?;
        }
        Ok(())
    }
}
