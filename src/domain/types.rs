//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers coming from the backend are opaque: the same resource may be
//! keyed by `1` in one response and `"1"` in another, so every identifier
//! newtype accepts both JSON forms and always serializes as a string.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Numeric value fell outside of its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Identifier as it may appear on the wire.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

/// Macro to generate opaque identifier newtypes.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "RawId")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a non-blank string.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<RawId> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: RawId) -> Result<Self, Self::Error> {
                match value {
                    RawId::Text(text) => Self::new(text),
                    RawId::Number(number) => Self::new(number.to_string()),
                }
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(InfluencerId, "Unique identifier for an influencer.");
id_newtype!(CampaignId, "Unique identifier for a campaign.");
id_newtype!(TemplateId, "Unique identifier for an outreach template.");
id_newtype!(NotificationId, "Unique identifier for a notification.");
id_newtype!(TestimonialId, "Unique identifier for a testimonial.");
id_newtype!(CollaborationId, "Unique identifier for a collaboration.");

impl TemplateId {
    /// Identifier for a template that only exists on this side of the wire.
    pub fn local() -> Self {
        Self(format!("local-{}", Uuid::new_v4()))
    }

    /// Whether the template was created locally and never confirmed.
    pub fn is_local(&self) -> bool {
        self.0.starts_with("local-")
    }
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outreach template display name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateName(String);

impl TemplateName {
    /// Constructs a trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for TemplateName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for TemplateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outreach message body; markup is sanitized before the value is accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateContent(String);

impl TemplateContent {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let inner = NonEmptyString::new(sanitized)?;
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TemplateContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Macro to generate bounded integer scores.
macro_rules! bounded_newtype {
    ($name:ident, $min:expr, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "i64", into = "u8")]
        pub struct $name(u8);

        impl $name {
            /// Creates the value ensuring it lies within the allowed range.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if ($min..=$max).contains(&value) {
                    Ok(Self(value as u8))
                } else {
                    Err(TypeConstraintError::OutOfRange {
                        field: stringify!($name),
                        min: $min,
                        max: $max,
                    })
                }
            }

            /// Pins `value` into the allowed range.
            pub fn clamped(value: i64) -> Self {
                Self(value.clamp($min, $max) as u8)
            }

            /// Returns the raw value.
            pub const fn get(self) -> u8 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded_newtype!(BrandFitScore, 0, 100, "How well an influencer fits the brand, 0 to 100.");
bounded_newtype!(ProgressPercent, 0, 100, "Completion percentage, 0 to 100.");
bounded_newtype!(Rating, 1, 5, "Star rating from 1 to 5.");

/// Macro to generate string-backed enumerations with a catch-all variant.
///
/// Unknown values coming from the backend are preserved as `Other` so a new
/// category never breaks deserialization of a whole list.
macro_rules! tag_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($tag => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from(raw.to_lowercase().as_str()))
            }
        }
    };
}

tag_enum!(Platform, "Social network an influencer publishes on.", {
    Instagram => "instagram",
    Youtube => "youtube",
});

tag_enum!(Category, "Content category of an influencer.", {
    Beauty => "beauty",
    Technology => "technology",
    Fashion => "fashion",
    Fitness => "fitness",
    Food => "food",
    Travel => "travel",
    Lifestyle => "lifestyle",
});

tag_enum!(Audience, "Primary audience segment of an influencer.", {
    Women25To40 => "women_25_40",
    Men18To35 => "men_18_35",
    Teens => "teens",
    Parents => "parents",
    Professionals => "professionals",
});

tag_enum!(ProductType, "Product type an influencer usually promotes.", {
    Skincare => "skincare",
    Gadgets => "gadgets",
    Apparel => "apparel",
    Supplements => "supplements",
});

tag_enum!(CampaignStatus, "Server-driven campaign lifecycle state.", {
    Active => "active",
    Completed => "completed",
});

tag_enum!(NotificationKind, "Notification category.", {
    Acceptance => "acceptance",
    Collaboration => "collaboration",
});

/// Time window accepted by the analytics endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    /// Query-string token understood by the backend.
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Quarter),
            "1y" => Ok(TimeRange::Year),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_accept_numbers_and_strings() {
        let from_number: InfluencerId = serde_json::from_str("7").unwrap();
        let from_string: InfluencerId = serde_json::from_str("\"7\"").unwrap();

        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"7\"");
    }

    #[test]
    fn blank_identifier_is_rejected() {
        assert_eq!(TemplateId::new("   "), Err(TypeConstraintError::EmptyString));
        assert!(serde_json::from_str::<TemplateId>("\"\"").is_err());
    }

    #[test]
    fn numeric_literals_make_identifiers() {
        assert_eq!(CampaignId::from(2u32).as_str(), "2");
        assert_eq!(ProgressPercent::clamped(140).get(), 100);
        assert_eq!(Rating::clamped(-3).get(), 1);
    }

    #[test]
    fn bounded_scores_enforce_range() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(5).unwrap().get(), 5);
        assert!(BrandFitScore::new(101).is_err());
        assert!(serde_json::from_str::<ProgressPercent>("150").is_err());
    }

    #[test]
    fn tag_enums_keep_unknown_values() {
        let category: Category = serde_json::from_str("\"gaming\"").unwrap();
        assert_eq!(category, Category::Other("gaming".to_string()));
        assert_eq!(category.as_str(), "gaming");

        let platform: Platform = serde_json::from_str("\"YouTube\"").unwrap();
        assert_eq!(platform, Platform::Youtube);
    }

    #[test]
    fn template_content_is_sanitized() {
        let content = TemplateContent::new("Hi {name}<script>alert(1)</script>").unwrap();
        assert_eq!(content.as_str(), "Hi {name}");
        assert!(TemplateContent::new("<script></script>").is_err());
    }

    #[test]
    fn email_is_normalized() {
        let email = Email::new("  Brand@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "brand@example.com");
        assert_eq!(Email::new("nope"), Err(TypeConstraintError::InvalidEmail));
    }

    #[test]
    fn time_range_round_trips_through_query_token() {
        assert_eq!("90d".parse::<TimeRange>().unwrap(), TimeRange::Quarter);
        assert!("2w".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::default().as_str(), "30d");
    }
}
