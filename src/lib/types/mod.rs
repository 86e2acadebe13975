//! Shared data types for metadata resolution.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use sha2::{Digest, Sha256};
use time::{PrimitiveDateTime, format_description};

/// Identifier of a content item in the host platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cache key derived from an item's identifier and type. For a fixed
/// (id, type) pair the fingerprint is always the same string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn for_item(item: ItemId, item_type: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(item.get().to_le_bytes());
        hasher.update(item_type.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Publish/modify timestamp of a content item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    pub fn parse(s: &str) -> Option<Self> {
        let fmt =
            format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]").ok()?;
        PrimitiveDateTime::parse(s.trim(), &fmt).ok().map(Self)
    }

    /// Long human-readable form used in metadata values,
    /// e.g. `Monday, January 1st, 2024, 3:04 pm`.
    pub fn long_format(&self) -> String {
        let date = self.0.date();
        let day = date.day();
        let hour = self.0.hour();
        let period = if hour < 12 { "am" } else { "pm" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };

        format!(
            "{}, {} {}{}, {}, {}:{:02} {}",
            date.weekday(),
            date.month(),
            day,
            ordinal_suffix(day),
            date.year(),
            hour12,
            self.0.minute(),
            period
        )
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_format())
    }
}

fn ordinal_suffix(day: u8) -> &'static str {
    match day {
        11..=13 => "th",
        d => match d % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
