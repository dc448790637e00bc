use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One dot-delimited piece of a version label.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Numeric(u64),
    /// Anything that does not parse as a non-negative integer (pre-release qualifiers, `+`, ...)
    Token(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Token(raw.to_string()),
        }
    }

    const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// `None` when two different qualifiers meet: they are unordered and the labels tie.
    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => Some(a.cmp(b)),
            // a released number always outranks a qualifier at the same position
            (Self::Numeric(_), Self::Token(_)) => Some(Ordering::Greater),
            (Self::Token(_), Self::Numeric(_)) => Some(Ordering::Less),
            (Self::Token(a), Self::Token(b)) => (a == b).then_some(Ordering::Equal),
        }
    }
}

/// Opaque dot-delimited version such as `11.8.0` or `beta.1`.
///
/// The original text is kept so rewritten declarations carry the version exactly
/// as the catalog spells it. Ordering is segment-wise and stops as soon as either
/// side runs out of segments, so `10.2` and `10.2.0` compare equal. Two different
/// qualifiers at the same position (`alpha` against `beta`) also end it in a tie.
/// Because these rules are not transitive the type deliberately does not implement
/// `Ord`; use [`VersionLabel::compare`].
#[derive(Debug, Clone)]
pub struct VersionLabel {
    raw: String,
    segments: Vec<Segment>,
}

impl VersionLabel {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(Segment::parse).collect(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the first segment is a plain number.
    #[must_use]
    pub fn has_numeric_lead(&self) -> bool {
        self.segments.first().is_some_and(Segment::is_numeric)
    }

    /// `<major>.0.0`, the lowest version of this label's major line.
    ///
    /// `None` when the leading segment is not numeric: such labels have no major line.
    #[must_use]
    pub fn major_line_floor(&self) -> Option<Self> {
        match self.segments.first() {
            Some(Segment::Numeric(major)) => Some(Self::parse(&format!("{major}.0.0"))),
            _ => None,
        }
    }

    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(other.segments.iter()) {
            match a.compare(b) {
                Some(Ordering::Equal) => continue,
                Some(ord) => return ord,
                None => return Ordering::Equal,
            }
        }
        Ordering::Equal
    }

    #[must_use]
    pub fn is_at_least(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    #[must_use]
    pub fn is_below(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl PartialEq for VersionLabel {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for VersionLabel {}

impl Display for VersionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for VersionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for VersionLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
