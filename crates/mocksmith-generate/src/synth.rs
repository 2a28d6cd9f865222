use fake::Fake;
use rand::{Rng, RngCore};
use regex::Regex;

use mocksmith_core::{Column, SemanticType, ValidationConstraints, Value};

use crate::errors::GenerationError;
use crate::format::random_alphanumeric;
use crate::locales::LocaleKey;
use crate::model::{GenerationIssue, GenerationReport};
use crate::session::Session;

/// Per-column generation plan with the pattern regex compiled up front.
///
/// Compiling at plan time turns a malformed pattern into a schema error
/// before any records exist, instead of a silent per-value skip.
#[derive(Debug)]
pub struct ColumnPlan {
    pub name: String,
    pub semantic_type: SemanticType,
    pub constraints: Option<ValidationConstraints>,
    pattern: Option<Regex>,
}

impl ColumnPlan {
    pub fn compile(column: &Column) -> Result<Self, GenerationError> {
        let pattern = match column
            .constraints
            .as_ref()
            .and_then(|constraints| constraints.pattern.as_deref())
        {
            Some(source) => Some(Regex::new(source).map_err(|err| {
                GenerationError::InvalidPattern {
                    column: column.name.clone(),
                    message: err.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            name: column.name.clone(),
            semantic_type: column.semantic_type.clone(),
            constraints: column.constraints.clone(),
            pattern,
        })
    }
}

/// A generated value plus whether it satisfies its column's constraints.
/// `satisfied: false` marks a best-effort value after the retry budget ran
/// out; the value is still emitted.
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub value: Value,
    pub satisfied: bool,
}

/// Generates one value for the column, retrying and repairing until the
/// constraints hold or `max_attempts` is spent.
///
/// Length and range violations are repaired in place (grow, truncate, clamp);
/// pattern misses burn an attempt and regenerate from scratch. Generation
/// never fails over an unsatisfiable constraint: the last candidate is
/// returned with `satisfied: false` and a constraint miss lands in the
/// report.
pub fn synthesize(
    plan: &ColumnPlan,
    session: &mut Session,
    locale: LocaleKey,
    rng: &mut dyn RngCore,
    max_attempts: u32,
    report: &mut GenerationReport,
) -> Synthesized {
    let mut last = Value::Null;

    for _ in 0..max_attempts.max(1) {
        let mut value = base_value(plan, session, locale, rng, report);

        let Some(constraints) = &plan.constraints else {
            return Synthesized {
                value,
                satisfied: true,
            };
        };

        repair(&mut value, constraints, plan, locale, rng);
        if validate_value(&value, constraints, plan.pattern.as_ref()) {
            return Synthesized {
                value,
                satisfied: true,
            };
        }
        last = value;
    }

    report.record_constraint_miss(&plan.name);
    Synthesized {
        value: last,
        satisfied: false,
    }
}

/// Checks a value against the column constraints. String lengths count
/// characters, not bytes; numeric bounds apply to ints and floats alike.
pub fn validate_value(
    value: &Value,
    constraints: &ValidationConstraints,
    pattern: Option<&Regex>,
) -> bool {
    if value.is_null() {
        return !constraints.required;
    }

    if let Some(text) = value.as_str() {
        let len = text.chars().count();
        if let Some(min) = constraints.min_length
            && len < min
        {
            return false;
        }
        if let Some(max) = constraints.max_length
            && len > max
        {
            return false;
        }
        if let Some(re) = pattern
            && !re.is_match(text)
        {
            return false;
        }
    }

    if let Some(number) = value.as_f64() {
        if let Some(min) = constraints.min
            && number < min
        {
            return false;
        }
        if let Some(max) = constraints.max
            && number > max
        {
            return false;
        }
    }

    true
}

/// Repairs applied before re-validation: grow short strings with type-aware
/// material, truncate long ones on a char boundary, clamp numbers into range.
fn repair(
    value: &mut Value,
    constraints: &ValidationConstraints,
    plan: &ColumnPlan,
    locale: LocaleKey,
    rng: &mut dyn RngCore,
) {
    match value {
        Value::Text(text) => {
            if let Some(min) = constraints.min_length
                && text.chars().count() < min
            {
                lengthen(text, min, &plan.semantic_type, locale, rng);
            }
            if let Some(max) = constraints.max_length
                && text.chars().count() > max
            {
                *text = text.chars().take(max).collect();
            }
        }
        Value::Int(number) => {
            if let Some(min) = constraints.min {
                *number = (*number).max(min.ceil() as i64);
            }
            if let Some(max) = constraints.max {
                *number = (*number).min(max.floor() as i64);
            }
        }
        Value::Float(number) => {
            if let Some(min) = constraints.min {
                *number = number.max(min);
            }
            if let Some(max) = constraints.max {
                *number = number.min(max);
            }
        }
        Value::Null | Value::Bool(_) => {}
    }
}

fn base_value(
    plan: &ColumnPlan,
    session: &mut Session,
    locale: LocaleKey,
    rng: &mut dyn RngCore,
    report: &mut GenerationReport,
) -> Value {
    use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::job::en::Title;
    use fake::faker::lorem::en::Word;
    use fake::faker::name::en::{FirstName, LastName, Name};

    match &plan.semantic_type {
        SemanticType::Id | SemanticType::UuidV4 | SemanticType::ParentReference => {
            Value::Text(random_uuid(rng))
        }
        SemanticType::AutoIncrementId | SemanticType::CustomSequence => {
            Value::Text(session.next_sequence_value(&plan.name))
        }
        SemanticType::CustomFormat => match session.formats.generate(&plan.name, rng) {
            Ok(text) => Value::Text(text),
            Err(err) => {
                let fallback = random_alphanumeric(10, rng);
                report.record_fallback("format_fallback", &plan.name, err.to_string());
                Value::Text(fallback)
            }
        },
        SemanticType::ForeignKey => match session.relations.foreign_key(&plan.name, rng) {
            Ok(Some(value)) => value,
            Ok(None) => Value::Null,
            Err(err) => {
                let fallback = random_uuid(rng);
                report.record_fallback("relationship_fallback", &plan.name, err.to_string());
                Value::Text(fallback)
            }
        },
        SemanticType::FullName => Value::Text(Name().fake_with_rng(rng)),
        SemanticType::FirstName => Value::Text(FirstName().fake_with_rng(rng)),
        SemanticType::LastName => Value::Text(LastName().fake_with_rng(rng)),
        SemanticType::EmailAddress => Value::Text(SafeEmail().fake_with_rng(rng)),
        SemanticType::JobTitle => Value::Text(Title().fake_with_rng(rng)),
        SemanticType::Phone => Value::Text(random_phone(rng)),
        SemanticType::Address => {
            let number: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            Value::Text(format!("{number} {street}"))
        }
        SemanticType::City => Value::Text(CityName().fake_with_rng(rng)),
        SemanticType::Country => Value::Text(CountryName().fake_with_rng(rng)),
        SemanticType::LocalizedName => Value::Text(match locale {
            LocaleKey::EnUs => Name().fake_with_rng(rng),
            LocaleKey::PtBr => fake::faker::name::pt_br::Name().fake_with_rng(rng),
        }),
        SemanticType::LocalizedAddress => match locale {
            LocaleKey::EnUs => {
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                Value::Text(format!("{number} {street}"))
            }
            LocaleKey::PtBr => {
                let number: String =
                    fake::faker::address::pt_br::BuildingNumber().fake_with_rng(rng);
                let street: String = fake::faker::address::pt_br::StreetName().fake_with_rng(rng);
                Value::Text(format!("{street}, {number}"))
            }
        },
        SemanticType::LocalizedPhone => Value::Text(match locale {
            LocaleKey::EnUs => random_phone(rng),
            LocaleKey::PtBr => fake::faker::phone_number::pt_br::PhoneNumber().fake_with_rng(rng),
        }),
        SemanticType::Date => {
            let days_back = rng.random_range(0..=365_i64);
            let date = chrono::Utc::now() - chrono::Duration::days(days_back);
            Value::Text(date.format("%Y-%m-%d").to_string())
        }
        SemanticType::Timestamp => Value::Text(
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        ),
        SemanticType::Age | SemanticType::Number => Value::Int(int_in_range(plan, 1, 100, rng)),
        SemanticType::Boolean
        | SemanticType::Status
        | SemanticType::Active
        | SemanticType::Verified => Value::Bool(rng.random_bool(0.5)),
        SemanticType::Price | SemanticType::Cost | SemanticType::Amount | SemanticType::Salary => {
            Value::Float(float_in_range(plan, 0.0, 10_000.0, 2, rng))
        }
        SemanticType::Rating | SemanticType::Score => {
            Value::Float(float_in_range(plan, 0.0, 5.0, 1, rng))
        }
        SemanticType::Percentage => Value::Float(float_in_range(plan, 0.0, 100.0, 1, rng)),
        SemanticType::Nullable | SemanticType::Optional => {
            if rng.random_bool(0.7) {
                Value::Text(Word().fake_with_rng(rng))
            } else {
                Value::Null
            }
        }
        SemanticType::Custom(tag) => {
            report.record_warning(GenerationIssue {
                level: "warning".to_string(),
                code: "unknown_type".to_string(),
                message: format!("no generator for type tag '{tag}'"),
                column: Some(plan.name.clone()),
            });
            Value::Null
        }
    }
}

/// Grows a below-minimum string with material matching the column's family:
/// fuller names for name types, street/city phrases for address types, lorem
/// words for everything else.
fn lengthen(
    text: &mut String,
    min: usize,
    semantic_type: &SemanticType,
    locale: LocaleKey,
    rng: &mut dyn RngCore,
) {
    use fake::faker::address::en::{CityName, StreetName};
    use fake::faker::lorem::en::Word;
    use fake::faker::name::en::Name;

    while text.chars().count() < min {
        let extra: String = match semantic_type {
            SemanticType::FullName
            | SemanticType::FirstName
            | SemanticType::LastName
            | SemanticType::LocalizedName => match locale {
                LocaleKey::EnUs => Name().fake_with_rng(rng),
                LocaleKey::PtBr => fake::faker::name::pt_br::Name().fake_with_rng(rng),
            },
            SemanticType::Address
            | SemanticType::City
            | SemanticType::Country
            | SemanticType::LocalizedAddress => {
                let street: String = StreetName().fake_with_rng(rng);
                let city: String = CityName().fake_with_rng(rng);
                format!("{street}, {city}")
            }
            _ => Word().fake_with_rng(rng),
        };
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&extra);
    }
}

/// Numeric generators draw from `[constraints.min ?? default, constraints.max
/// ?? default]` so declared bounds shape the distribution instead of clipping
/// it.
fn int_in_range(plan: &ColumnPlan, default_min: i64, default_max: i64, rng: &mut dyn RngCore) -> i64 {
    let constraints = plan.constraints.as_ref();
    let min = constraints
        .and_then(|c| c.min)
        .map(|value| value.ceil() as i64)
        .unwrap_or(default_min);
    let max = constraints
        .and_then(|c| c.max)
        .map(|value| value.floor() as i64)
        .unwrap_or(default_max);
    rng.random_range(min..=max.max(min))
}

fn float_in_range(
    plan: &ColumnPlan,
    default_min: f64,
    default_max: f64,
    decimals: u32,
    rng: &mut dyn RngCore,
) -> f64 {
    let constraints = plan.constraints.as_ref();
    let min = constraints.and_then(|c| c.min).unwrap_or(default_min);
    let max = constraints.and_then(|c| c.max).unwrap_or(default_max);
    round_to(rng.random_range(min..=max.max(min)), decimals)
}

pub(crate) fn random_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}

fn random_phone(rng: &mut dyn RngCore) -> String {
    format!(
        "({}) {}-{:04}",
        rng.random_range(200..=999),
        rng.random_range(100..=999),
        rng.random_range(0..=9999)
    )
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
