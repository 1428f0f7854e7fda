// Version string parsing

use crate::models::version::VersionComponents;

/// Number of components in a version
const COMPONENT_COUNT: usize = 3;

/// Version string parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A dot-separated field is not an integer
    #[error("Invalid version component '{component}' in '{input}'")]
    InvalidComponent { component: String, input: String },

    /// A dot-separated field is a negative integer
    #[error("Version component '{component}' in '{input}' must not be negative")]
    NegativeComponent { component: String, input: String },
}

impl ParseError {
    /// The offending field
    pub fn component(&self) -> &str {
        match self {
            Self::InvalidComponent { component, .. } | Self::NegativeComponent { component, .. } => {
                component
            }
        }
    }

    /// The full text that was being parsed
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidComponent { input, .. } | Self::NegativeComponent { input, .. } => input,
        }
    }
}

/// Parse `major[.minor[.patch[...]]]` into version components.
///
/// Surrounding whitespace is ignored. Missing components default to zero and
/// fields after the third are validated but otherwise discarded, so `"5"`
/// becomes `5.0.0` and `"1.2.3.4"` becomes `1.2.3`.
pub fn parse(text: &str) -> Result<VersionComponents, ParseError> {
    let trimmed = text.trim();

    let values = trimmed
        .split('.')
        .map(|field| parse_component(field, trimmed))
        .collect::<Result<Vec<u64>, ParseError>>()?;

    let mut components = [0u64; COMPONENT_COUNT];
    for (slot, value) in components.iter_mut().zip(values) {
        *slot = value;
    }

    let [major, minor, patch] = components;
    Ok(VersionComponents::new(major, minor, patch))
}

/// Parse a single field as a non-negative integer
fn parse_component(field: &str, input: &str) -> Result<u64, ParseError> {
    let digits = field.trim();

    if let Ok(value) = digits.parse::<u64>() {
        return Ok(value);
    }

    // "-0" is still zero; any other '-' prefix over plain digits is negative
    match digits.strip_prefix('-') {
        Some(magnitude) if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) => {
            if magnitude.bytes().all(|b| b == b'0') {
                Ok(0)
            } else {
                Err(ParseError::NegativeComponent {
                    component: field.to_string(),
                    input: input.to_string(),
                })
            }
        }
        _ => Err(ParseError::InvalidComponent {
            component: field.to_string(),
            input: input.to_string(),
        }),
    }
}
