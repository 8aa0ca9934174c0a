use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::{Rng, seq::IndexedRandom};
use std::borrow::Cow;

const PATHS: [(&str, u8); 9] = [
    ("/", 10),
    ("/index.html", 20),
    ("/login", 10),
    ("/api/orders", 15),
    ("/images/logo.png", 15),
    ("/images/banner.JPG", 10),
    ("/img/spinner.gif", 5),
    ("/favicon.ico", 5),
    ("/gallery/photo.jpg", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 60),
    (301, 5),
    (304, 10),
    (401, 5),
    (404, 15),
    (500, 5),
];
const USER_AGENTS: [(&str, u8); 7] = [
    (
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        45,
    ),
    (
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
        20,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
        15,
    ),
    (
        "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko",
        4,
    ),
    ("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)", 2),
    ("Googlebot/2.1 (+http://www.google.com/bot.html)", 10),
    ("curl/8.5.0", 4),
];

const SECONDS_PER_DAY: u32 = 86_400;

pub fn generate_csv_row<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> String {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let user_agent = USER_AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..50_000);
    let timestamp = random_moment(rng, date).format("%Y-%m-%d %H:%M:%S");

    format!(
        "{path},{timestamp},{},{status},{size}",
        quote(user_agent)
    )
}

/// A row the analyzer has to skip: wrong field count or a non-numeric number.
pub fn generate_malformed_row<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> String {
    let row = generate_csv_row(rng, date);
    match rng.random_range(0..3) {
        0 => match row.rsplit_once(',') {
            Some((head, _)) => head.to_string(),
            None => row,
        },
        1 => format!("{row},extra"),
        _ => match row.rsplit_once(',') {
            Some((head, _)) => format!("{head},-"),
            None => row,
        },
    }
}

fn random_moment<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> NaiveDateTime {
    let seconds = rng.random_range(0..SECONDS_PER_DAY);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
    date.and_time(time)
}

fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}
