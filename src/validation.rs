//! Input validation for disk scheduling simulations.
//!
//! Checks raw caller input before it reaches the engine. Detects:
//! - Missing fields
//! - Malformed numbers (non-integer tokens)
//! - Out-of-range values (disk size, head, requests)
//! - Oversized request lists
//! - Unknown algorithm names
//!
//! All problems are collected rather than stopping at the first one.
//! The engine itself has no error path: it only ever sees a
//! [`SimulationInput`] built here.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Algorithm, AlgorithmSelector, Cylinder, SimulationInput};

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent or null.
    MissingField,
    /// A value is not an integer (or `requests` is not a list).
    Malformed,
    /// A value lies outside its valid range.
    OutOfRange,
    /// More requests than the configured limit.
    TooManyRequests,
    /// The algorithm name is not recognized.
    UnknownAlgorithm,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Simulation request as received on the wire, before any checks.
///
/// Fields are kept as raw JSON so that malformed values produce a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSimulationRequest {
    #[serde(default)]
    pub requests: Option<Value>,
    #[serde(default)]
    pub head: Option<Value>,
    #[serde(default)]
    pub disk_size: Option<Value>,
    #[serde(default)]
    pub algorithm: Option<Value>,
}

/// A request that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub input: SimulationInput,
    pub selector: AlgorithmSelector,
}

/// Checks that `disk_size > 0` and that head and requests lie in `[0, disk_size - 1]`.
pub fn check_ranges(requests: &[Cylinder], head: Cylinder, disk_size: u32) -> ValidationResult {
    let mut errors = Vec::new();

    if disk_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            "disk_size must be a positive integer, got 0",
        ));
        return Err(errors);
    }

    let last = disk_size - 1;
    if head > last {
        errors.push(out_of_range_head(i64::from(head), last));
    }
    for (i, &r) in requests.iter().enumerate() {
        if r > last {
            errors.push(out_of_range_request(i, i64::from(r), last));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a raw request.
///
/// # Checks
/// 1. `requests`, `head` and `disk_size` are present
/// 2. `requests` is a list of at most `max_requests` integers
/// 3. `head` and `disk_size` are integers (numbers or numeric strings)
/// 4. `0 < disk_size <= u32::MAX`
/// 5. `0 <= head < disk_size` and every request in `[0, disk_size - 1]`
/// 6. `algorithm` names one of the six algorithms or `ALL`
///
/// # Returns
/// The validated input and selector, or every detected issue.
pub fn validate_request(
    raw: &RawSimulationRequest,
    max_requests: usize,
) -> ValidationResult<ValidatedRequest> {
    let mut errors = Vec::new();

    let missing: Vec<&str> = [
        ("requests", &raw.requests),
        ("head", &raw.head),
        ("disk_size", &raw.disk_size),
    ]
    .into_iter()
    .filter(|(_, v)| matches!(v, None | Some(Value::Null)))
    .map(|(name, _)| name)
    .collect();

    if !missing.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            format!("Missing required fields: {}", missing.join(", ")),
        ));
    }

    let selector = match parse_selector(raw.algorithm.as_ref()) {
        Ok(s) => Some(s),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    if !missing.is_empty() {
        return Err(errors);
    }

    let disk_size = collect(&mut errors, parse_disk_size(raw.disk_size.as_ref()));
    let head = collect(&mut errors, parse_integer("head", raw.head.as_ref()));
    let requests = collect(
        &mut errors,
        parse_requests(raw.requests.as_ref(), max_requests),
    );

    // Range checks need a usable disk size.
    if let Some(disk_size) = disk_size {
        let last = disk_size - 1;
        if let Some(h) = head {
            if h < 0 || h > i64::from(last) {
                errors.push(out_of_range_head(h, last));
            }
        }
        if let Some(reqs) = &requests {
            for (i, &r) in reqs.iter().enumerate() {
                if r < 0 || r > i64::from(last) {
                    errors.push(out_of_range_request(i, r, last));
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match (disk_size, head, requests, selector) {
        (Some(disk_size), Some(head), Some(requests), Some(selector)) => {
            // Bounds were checked above, so every value fits a cylinder.
            let requests = requests.into_iter().map(|r| r as Cylinder).collect();
            Ok(ValidatedRequest {
                input: SimulationInput::new_unchecked(requests, head as Cylinder, disk_size),
                selector,
            })
        }
        _ => Err(errors),
    }
}

fn collect<T>(errors: &mut Vec<ValidationError>, r: Result<T, ValidationError>) -> Option<T> {
    match r {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn out_of_range_head(head: i64, last: Cylinder) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::OutOfRange,
        format!("head must be between 0 and {last}, got {head}"),
    )
}

fn out_of_range_request(index: usize, value: i64, last: Cylinder) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::OutOfRange,
        format!("All requests must be between 0 and {last}, got {value} at position {index}"),
    )
}

fn parse_selector(value: Option<&Value>) -> Result<AlgorithmSelector, ValidationError> {
    let name = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    name.parse().map_err(|e: crate::models::UnknownAlgorithm| {
        ValidationError::new(ValidationErrorKind::UnknownAlgorithm, e.to_string())
    })
}

fn parse_disk_size(value: Option<&Value>) -> Result<u32, ValidationError> {
    let n = parse_integer("disk_size", value)?;
    if n <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("disk_size must be a positive integer, got {n}"),
        ));
    }
    u32::try_from(n).map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("disk_size must be at most {}, got {n}", u32::MAX),
        )
    })
}

fn parse_requests(value: Option<&Value>, max_requests: usize) -> Result<Vec<i64>, ValidationError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(ValidationError::new(
                ValidationErrorKind::Malformed,
                "requests must be a list of integers",
            ))
        }
    };

    if items.len() > max_requests {
        return Err(ValidationError::new(
            ValidationErrorKind::TooManyRequests,
            format!(
                "At most {max_requests} requests are allowed, got {}",
                items.len()
            ),
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(i, v)| parse_integer(&format!("requests[{i}]"), Some(v)))
        .collect()
}

/// Accepts JSON integers, integral floats and numeric strings.
fn parse_integer(field: &str, value: Option<&Value>) -> Result<i64, ValidationError> {
    let malformed = |shown: String| {
        ValidationError::new(
            ValidationErrorKind::Malformed,
            format!("{field} must be a valid integer, got {shown}"),
        )
    };

    match value {
        Some(Value::Number(n)) => {
            let too_large = || {
                ValidationError::new(
                    ValidationErrorKind::OutOfRange,
                    format!("{field} is too large: {n}"),
                )
            };
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(too_large())
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                    Some(f) if f.fract() == 0.0 => Err(too_large()),
                    _ => Err(malformed(n.to_string())),
                }
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(format!("'{s}'"))),
        Some(other) => Err(malformed(other.to_string())),
        None => Err(malformed("nothing".into())),
    }
}
