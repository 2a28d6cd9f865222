use std::fmt;

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use serde::{Deserialize, Serialize};

/// Semantic type of a column.
///
/// Schemas carry free-form tags such as `"Email Address"`; parsing is
/// case-insensitive and unrecognized tags land in [`SemanticType::Custom`]
/// so a schema never fails to load over a tag the synthesizer does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    Id,
    JobTitle,
    EmailAddress,
    FullName,
    FirstName,
    LastName,
    Phone,
    Address,
    City,
    Country,
    Date,
    Age,
    Number,
    Boolean,
    Status,
    Active,
    Verified,
    Price,
    Cost,
    Amount,
    Salary,
    Rating,
    Score,
    Percentage,
    Nullable,
    Optional,
    AutoIncrementId,
    UuidV4,
    Timestamp,
    CustomSequence,
    CustomFormat,
    ForeignKey,
    ParentReference,
    LocalizedName,
    LocalizedAddress,
    LocalizedPhone,
    /// Unregistered tag, preserved verbatim for round-tripping.
    Custom(String),
}

impl SemanticType {
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "id" => Self::Id,
            "job title" => Self::JobTitle,
            "email address" => Self::EmailAddress,
            "firstname lastname" => Self::FullName,
            "first name" => Self::FirstName,
            "last name" => Self::LastName,
            "phone" => Self::Phone,
            "address" => Self::Address,
            "city" => Self::City,
            "country" => Self::Country,
            "date" => Self::Date,
            "age" => Self::Age,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "status" => Self::Status,
            "active" => Self::Active,
            "verified" => Self::Verified,
            "price" => Self::Price,
            "cost" => Self::Cost,
            "amount" => Self::Amount,
            "salary" => Self::Salary,
            "rating" => Self::Rating,
            "score" => Self::Score,
            "percentage" => Self::Percentage,
            "nullable" => Self::Nullable,
            "optional" => Self::Optional,
            "auto-increment id" => Self::AutoIncrementId,
            "uuid v4" => Self::UuidV4,
            "timestamp" => Self::Timestamp,
            "custom sequence" => Self::CustomSequence,
            "custom format" => Self::CustomFormat,
            "foreign key" => Self::ForeignKey,
            "parent reference" => Self::ParentReference,
            "localized name" => Self::LocalizedName,
            "localized address" => Self::LocalizedAddress,
            "localized phone" => Self::LocalizedPhone,
            _ => Self::Custom(tag.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Id => "id",
            Self::JobTitle => "job title",
            Self::EmailAddress => "email address",
            Self::FullName => "firstname lastname",
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::Country => "country",
            Self::Date => "date",
            Self::Age => "age",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Status => "status",
            Self::Active => "active",
            Self::Verified => "verified",
            Self::Price => "price",
            Self::Cost => "cost",
            Self::Amount => "amount",
            Self::Salary => "salary",
            Self::Rating => "rating",
            Self::Score => "score",
            Self::Percentage => "percentage",
            Self::Nullable => "nullable",
            Self::Optional => "optional",
            Self::AutoIncrementId => "auto-increment id",
            Self::UuidV4 => "uuid v4",
            Self::Timestamp => "timestamp",
            Self::CustomSequence => "custom sequence",
            Self::CustomFormat => "custom format",
            Self::ForeignKey => "foreign key",
            Self::ParentReference => "parent reference",
            Self::LocalizedName => "localized name",
            Self::LocalizedAddress => "localized address",
            Self::LocalizedPhone => "localized phone",
            Self::Custom(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for SemanticType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}

impl JsonSchema for SemanticType {
    fn schema_name() -> String {
        "SemanticType".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}
