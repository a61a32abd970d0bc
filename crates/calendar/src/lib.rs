//! # almanac-calendar
//!
//! Date arithmetic, comparison, formatting and parsing conventions on top
//! of `chrono`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(y, m, d, h, mi, s)"] -->|"DateValue::with_hms()"| B["DateValue"]
//!     B -->|".get(Field)"| C["i32"]
//!     B -->|"later() / earlier()"| B
//!     B -->|"beginning_of() / end_of()"| B
//!     B -->|"date_sequence()"| D["DateSequence (lazy)"]
//!     B -->|"DateRange"| E["is_within() / are_overlapping()"]
//!     F["DateFormat (name | pattern)"] -->|"FormatRegistry + Locale"| G["Pattern"]
//!     B -->|"DateFormatter::format()"| H["String"]
//!     H -->|"DateFormatter::parse()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{DateValue, DateFormatter, FormatName, Locale, Unit, later};
//!
//! let date = DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap();
//! let next = later(date, 10, Unit::Day).unwrap(); // 2009-03-09 12:34:56
//!
//! let formatter = DateFormatter::new(Locale::Us);
//! let text = formatter
//!     .format(date, Some(&FormatName::ShortDateTime.into()))
//!     .unwrap(); // "2/27/09 12:34 PM"
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Immutable date value and field access |
//! | `unit` | Unit and field vocabularies |
//! | `arith` | Relative dates, comparisons, elapsed time, period bounds |
//! | `sequence` | Lazy date sequences |
//! | `range` | Closed-open ranges and overlap predicates |
//! | `locale` | Locale setting and name tables |
//! | `pattern` | Pattern compilation, rendering and parsing |
//! | `registry` | Named formats |
//! | `format` | Format descriptors and the formatter |
//! | `config` | Formatter configuration |
//! | `error` | Error types |

mod arith;
mod config;
mod date;
mod error;
mod format;
mod locale;
mod pattern;
mod range;
mod registry;
mod sequence;
mod unit;

pub use arith::{beginning_of, earlier, end_of, is_earlier, is_later, later, time_between};
pub use config::FormatConfig;
pub use date::DateValue;
pub use error::CalendarError;
pub use format::{DateFormat, DateFormatter, format_date, parse_date};
pub use locale::Locale;
pub use range::{DateRange, are_overlapping, is_within, valid_range};
pub use registry::{FormatName, FormatRegistry, Layout, Style};
pub use sequence::{DateSequence, date_sequence};
pub use unit::{Field, Unit};
