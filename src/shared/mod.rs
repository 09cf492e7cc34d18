//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the upstream sends, so they can be used directly in wire types
//! without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for currency tickers (e.g. `"BTC"`).
///
/// Identity is case-insensitive: the ticker is upper-cased on construction,
/// so `Symbol::from("btc") == Symbol::from("BTC")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol::new(s))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::new(s))
    }
}

// ─── ExchangeId ──────────────────────────────────────────────────────────────

/// Newtype for exchange names (e.g. `"Kraken"`).
///
/// Identity is case-insensitive while the verbatim spelling is preserved:
/// `ExchangeId::from("kraken") == ExchangeId::from("Kraken")`, yet each
/// serializes and displays exactly as it was written. Upstream spells
/// exchange names inconsistently across endpoints, so map lookups must not
/// depend on spelling.
#[derive(Debug, Clone)]
pub struct ExchangeId(String);

impl ExchangeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ExchangeId {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl Eq for ExchangeId {}

impl Hash for ExchangeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_lowercase().hash(state);
    }
}

impl PartialOrd for ExchangeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExchangeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.to_lowercase().cmp(&other.0.to_lowercase())
    }
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExchangeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExchangeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ExchangeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ExchangeId(s.to_string()))
    }
}

impl Serialize for ExchangeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExchangeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ExchangeId(s))
    }
}

// ─── HistoryFunction ─────────────────────────────────────────────────────────

/// Upstream history endpoint selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryFunction {
    Minute,
    Hour,
    Day,
}

impl HistoryFunction {
    /// The endpoint path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "histominute",
            Self::Hour => "histohour",
            Self::Day => "histoday",
        }
    }
}

impl std::fmt::Display for HistoryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── HistoryPeriod ───────────────────────────────────────────────────────────

/// Chart period presets.
///
/// Each period maps to one upstream history function and a sample limit, so
/// a single parametrized fetch path serves every period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "hour")]
    Hour,
    #[default]
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3month")]
    ThreeMonth,
    #[serde(rename = "6month")]
    SixMonth,
    #[serde(rename = "year")]
    Year,
}

impl HistoryPeriod {
    /// The upstream endpoint serving this period.
    pub fn function(&self) -> HistoryFunction {
        match self {
            Self::Hour => HistoryFunction::Minute,
            Self::Day => HistoryFunction::Hour,
            Self::Week | Self::Month | Self::ThreeMonth | Self::SixMonth | Self::Year => {
                HistoryFunction::Day
            }
        }
    }

    /// Number of samples requested from the upstream feed.
    pub fn limit(&self) -> u32 {
        match self {
            Self::Hour => 60,
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 30,
            Self::ThreeMonth => 90,
            Self::SixMonth => 180,
            Self::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonth => "3month",
            Self::SixMonth => "6month",
            Self::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "3month" => Some(Self::ThreeMonth),
            "6month" => Some(Self::SixMonth),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

impl std::fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
