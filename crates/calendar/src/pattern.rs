//! Pattern compilation, rendering and parsing.
//!
//! Patterns use the letter vocabulary of `SimpleDateFormat`:
//!
//! | Letter | Field | Width behaviour |
//! |--------|-------|-----------------|
//! | `y` | year | `yy` two digits, otherwise zero-padded to width after any `-` sign |
//! | `M` | month | `M`/`MM` number, `MMM` short name, `MMMM` full name |
//! | `d` | day of month | zero-padded |
//! | `H` | hour 0-23 | zero-padded |
//! | `h` | hour 1-12 | zero-padded |
//! | `k` | hour 1-24 | zero-padded |
//! | `K` | hour 0-11 | zero-padded |
//! | `m` | minute | zero-padded |
//! | `s` | second | zero-padded |
//! | `S` | millisecond | zero-padded |
//! | `a` | AM/PM marker | locale text |
//! | `E` | day of week | `E`..`EEE` short, `EEEE` full |
//!
//! Text inside single quotes is literal and `''` is a single quote. Any
//! other ASCII letter is rejected.

use crate::date::DateValue;
use crate::error::CalendarError;
use crate::locale::Locale;

/// Longest digit run read for a numeric field that is not followed by
/// another numeric field.
const MAX_DIGITS: usize = 10;

/// Year assumed for fields missing from the pattern.
const DEFAULT_YEAR: i32 = 1970;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Year(usize),
    Month(usize),
    Day(usize),
    /// `H`
    Hour23(usize),
    /// `h`
    Hour12(usize),
    /// `k`
    Hour24(usize),
    /// `K`
    Hour11(usize),
    Minute(usize),
    Second(usize),
    Millis(usize),
    AmPm,
    Weekday(usize),
}

impl Token {
    fn is_numeric(&self) -> bool {
        match self {
            Token::Month(width) => *width <= 2,
            Token::Literal(_) | Token::AmPm | Token::Weekday(_) => false,
            _ => true,
        }
    }
}

/// A compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

/// Fields collected while parsing.
#[derive(Debug, Default)]
struct Parsed {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour23: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    millis: Option<u32>,
}

impl Pattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] for unsupported letters or
    /// an unterminated quote.
    pub(crate) fn compile(source: &str) -> Result<Self, CalendarError> {
        let chars: Vec<char> = source.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    push_literal(&mut tokens, "'");
                    i += 2;
                    continue;
                }
                let mut text = String::new();
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err(invalid_pattern(source, "unterminated quote")),
                        Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                            text.push('\'');
                            i += 2;
                        }
                        Some('\'') => {
                            i += 1;
                            break;
                        }
                        Some(&ch) => {
                            text.push(ch);
                            i += 1;
                        }
                    }
                }
                push_literal(&mut tokens, &text);
            } else if c.is_ascii_alphabetic() {
                let width = chars[i..].iter().take_while(|&&ch| ch == c).count();
                let token = match c {
                    'y' => Token::Year(width),
                    'M' => Token::Month(width),
                    'd' => Token::Day(width),
                    'H' => Token::Hour23(width),
                    'h' => Token::Hour12(width),
                    'k' => Token::Hour24(width),
                    'K' => Token::Hour11(width),
                    'm' => Token::Minute(width),
                    's' => Token::Second(width),
                    'S' => Token::Millis(width),
                    'a' => Token::AmPm,
                    'E' => Token::Weekday(width),
                    other => {
                        return Err(invalid_pattern(
                            source,
                            format!("unsupported pattern letter '{other}'"),
                        ));
                    }
                };
                tokens.push(token);
                i += width;
            } else {
                push_literal(&mut tokens, &c.to_string());
                i += 1;
            }
        }
        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// Returns the pattern text this was compiled from.
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// Renders `date` with the names of `locale`.
    pub(crate) fn render(&self, date: DateValue, locale: Locale) -> String {
        let names = locale.names();
        let mut out = String::with_capacity(self.source.len() + 8);
        for token in &self.tokens {
            match *token {
                Token::Literal(ref text) => out.push_str(text),
                Token::Year(2) => push_padded(&mut out, i64::from(date.year().rem_euclid(100)), 2),
                Token::Year(width) => {
                    if date.year() < 0 {
                        out.push('-');
                    }
                    push_padded(&mut out, i64::from(date.year().unsigned_abs()), width);
                }
                Token::Month(width) if width >= 4 => {
                    out.push_str(names.months[date.month() as usize - 1]);
                }
                Token::Month(3) => out.push_str(names.months_short[date.month() as usize - 1]),
                Token::Month(width) => push_padded(&mut out, i64::from(date.month()), width),
                Token::Day(width) => push_padded(&mut out, i64::from(date.day()), width),
                Token::Hour23(width) => push_padded(&mut out, i64::from(date.hour()), width),
                Token::Hour12(width) => {
                    let hour = match date.hour() % 12 {
                        0 => 12,
                        h => h,
                    };
                    push_padded(&mut out, i64::from(hour), width);
                }
                Token::Hour24(width) => {
                    let hour = match date.hour() {
                        0 => 24,
                        h => h,
                    };
                    push_padded(&mut out, i64::from(hour), width);
                }
                Token::Hour11(width) => push_padded(&mut out, i64::from(date.hour() % 12), width),
                Token::Minute(width) => push_padded(&mut out, i64::from(date.minute()), width),
                Token::Second(width) => push_padded(&mut out, i64::from(date.second()), width),
                Token::Millis(width) => push_padded(&mut out, i64::from(date.millis()), width),
                Token::AmPm => out.push_str(names.am_pm[usize::from(date.hour() >= 12)]),
                Token::Weekday(width) => {
                    let idx = date.day_of_week() as usize - 1;
                    if width >= 4 {
                        out.push_str(names.weekdays[idx]);
                    } else {
                        out.push_str(names.weekdays_short[idx]);
                    }
                }
            }
        }
        out
    }

    /// Parses `text` with the names of `locale`.
    ///
    /// The whole input must be consumed. Fields absent from the pattern
    /// default to 1970-01-01 00:00:00.000.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateParse`] if the text does not match or
    /// the matched fields do not form a valid date.
    pub(crate) fn parse(&self, text: &str, locale: Locale) -> Result<DateValue, CalendarError> {
        let names = locale.names();
        let mut parsed = Parsed::default();
        let mut rest = text;

        for (i, token) in self.tokens.iter().enumerate() {
            let adjacent = self.tokens.get(i + 1).is_some_and(Token::is_numeric);
            let max_digits = |width: usize| if adjacent { width } else { MAX_DIGITS };
            match *token {
                Token::Literal(ref literal) => {
                    rest = rest
                        .strip_prefix(literal.as_str())
                        .ok_or_else(|| self.parse_error(text, format!("expected {literal:?}")))?;
                }
                Token::Year(width) => {
                    let (sign, unsigned) = split_sign(rest);
                    let (year, r) = self.take_number(text, unsigned, 1, max_digits(width))?;
                    let year: i32 = self.narrow(text, year)?;
                    let digits = unsigned.len() - r.len();
                    // Only an unsigned run of exactly two digits is abbreviated.
                    parsed.year = Some(match sign {
                        None if width == 2 && digits == 2 => {
                            expand_two_digit_year(year, DateValue::now().year())
                        }
                        Some('-') => -year,
                        _ => year,
                    });
                    rest = r;
                }
                Token::Month(width) if width >= 3 => {
                    let candidates = names
                        .months
                        .iter()
                        .chain(&names.months_standalone)
                        .chain(&names.months_short)
                        .enumerate()
                        .map(|(i, name)| (i % 12, *name));
                    let (idx, r) = match_name(rest, candidates)
                        .ok_or_else(|| self.parse_error(text, "expected month name"))?;
                    parsed.month = Some(idx as u32 + 1);
                    rest = r;
                }
                Token::Month(width) => {
                    let (month, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    parsed.month = Some(self.narrow(text, month)?);
                    rest = r;
                }
                Token::Day(width) => {
                    let (day, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    parsed.day = Some(self.narrow(text, day)?);
                    rest = r;
                }
                Token::Hour23(width) => {
                    let (hour, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    parsed.hour23 = Some(self.narrow(text, hour)?);
                    rest = r;
                }
                Token::Hour24(width) => {
                    let (hour, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    let hour: u32 = self.narrow(text, hour)?;
                    if !(1..=24).contains(&hour) {
                        return Err(self.parse_error(text, format!("hour {hour} outside 1..=24")));
                    }
                    parsed.hour23 = Some(hour % 24);
                    rest = r;
                }
                Token::Hour12(width) => {
                    let (hour, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    let hour: u32 = self.narrow(text, hour)?;
                    if !(1..=12).contains(&hour) {
                        return Err(self.parse_error(text, format!("hour {hour} outside 1..=12")));
                    }
                    parsed.hour12 = Some(hour % 12);
                    rest = r;
                }
                Token::Hour11(width) => {
                    let (hour, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    let hour: u32 = self.narrow(text, hour)?;
                    if hour > 11 {
                        return Err(self.parse_error(text, format!("hour {hour} outside 0..=11")));
                    }
                    parsed.hour12 = Some(hour);
                    rest = r;
                }
                Token::Minute(width) => {
                    let (minute, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    parsed.minute = Some(self.narrow(text, minute)?);
                    rest = r;
                }
                Token::Second(width) => {
                    let (second, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    parsed.second = Some(self.narrow(text, second)?);
                    rest = r;
                }
                Token::Millis(width) => {
                    let (millis, r) = self.take_number(text, rest, 1, max_digits(width))?;
                    parsed.millis = Some(self.narrow(text, millis)?);
                    rest = r;
                }
                Token::AmPm => {
                    let candidates = names.am_pm.iter().copied().enumerate();
                    let (idx, r) = match_name(rest, candidates)
                        .ok_or_else(|| self.parse_error(text, "expected AM/PM marker"))?;
                    parsed.pm = Some(idx == 1);
                    rest = r;
                }
                Token::Weekday(_) => {
                    // Matched for shape only; the date fields decide the day.
                    let candidates = names
                        .weekdays
                        .iter()
                        .chain(&names.weekdays_short)
                        .enumerate()
                        .map(|(i, name)| (i % 7, *name));
                    let (_, r) = match_name(rest, candidates)
                        .ok_or_else(|| self.parse_error(text, "expected weekday name"))?;
                    rest = r;
                }
            }
        }

        if !rest.is_empty() {
            return Err(self.parse_error(text, format!("unparsed trailing text {rest:?}")));
        }

        let hour = match (parsed.hour23, parsed.hour12) {
            (Some(hour), _) => hour,
            (None, Some(hour)) => hour + if parsed.pm == Some(true) { 12 } else { 0 },
            (None, None) => 0,
        };
        DateValue::with_hms_milli(
            parsed.year.unwrap_or(DEFAULT_YEAR),
            parsed.month.unwrap_or(1),
            parsed.day.unwrap_or(1),
            hour,
            parsed.minute.unwrap_or(0),
            parsed.second.unwrap_or(0),
            parsed.millis.unwrap_or(0),
        )
        .map_err(|err| self.parse_error(text, err.to_string()))
    }

    /// Reads between `min` and `max` ASCII digits from the front of `rest`.
    fn take_number<'a>(
        &self,
        text: &str,
        rest: &'a str,
        min: usize,
        max: usize,
    ) -> Result<(i64, &'a str), CalendarError> {
        let len = rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return Err(self.parse_error(text, format!("expected at least {min} digit(s)")));
        }
        let (digits, remainder) = rest.split_at(len);
        let value = digits
            .parse::<i64>()
            .map_err(|err| self.parse_error(text, err.to_string()))?;
        Ok((value, remainder))
    }

    fn narrow<T: TryFrom<i64>>(&self, text: &str, value: i64) -> Result<T, CalendarError> {
        T::try_from(value).map_err(|_| self.parse_error(text, format!("{value} out of range")))
    }

    fn parse_error(&self, text: &str, reason: impl Into<String>) -> CalendarError {
        CalendarError::DateParse {
            text: text.to_string(),
            pattern: self.source.clone(),
            reason: reason.into(),
        }
    }
}

/// Splits a leading `-` or `+` off `text`.
fn split_sign(text: &str) -> (Option<char>, &str) {
    match text.chars().next() {
        Some(sign @ ('-' | '+')) => (Some(sign), &text[1..]),
        _ => (None, text),
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else if !text.is_empty() {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

fn invalid_pattern(source: &str, reason: impl Into<String>) -> CalendarError {
    CalendarError::InvalidPattern {
        pattern: source.to_string(),
        reason: reason.into(),
    }
}

/// Places a two-digit year in the century that starts 80 years before
/// `reference_year`.
fn expand_two_digit_year(yy: i32, reference_year: i32) -> i32 {
    let start = reference_year - 80;
    let candidate = start - start.rem_euclid(100) + yy;
    if candidate < start {
        candidate + 100
    } else {
        candidate
    }
}

/// Finds the longest candidate that prefixes `text`, ignoring case.
fn match_name<'a>(
    text: &'a str,
    candidates: impl IntoIterator<Item = (usize, &'static str)>,
) -> Option<(usize, &'a str)> {
    candidates
        .into_iter()
        .filter_map(|(idx, name)| strip_prefix_ignore_case(text, name).map(|rest| (idx, rest)))
        .min_by_key(|(_, rest)| rest.len())
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let consumed = chars.next().map_or(text.len(), |(idx, _)| idx);
    Some(&text[consumed..])
}
