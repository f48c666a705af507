use std::fmt;

/// Why a conversion could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The API answered but had no rate for the target currency
    RateUnavailable,
    /// The API could not be reached (connection, DNS, timeout)
    Request,
    /// Anything else, such as an undecodable body
    Unexpected,
}

/// Outcome of a rate lookup.
///
/// The text form (`Display`) is what the model and the user see; the tagged
/// form is kept until that boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    Converted {
        amount: f64,
        from: String,
        to: String,
        converted: f64,
    },
    Failed {
        kind: ConversionErrorKind,
        message: String,
    },
}

impl ConversionResult {
    pub(crate) fn failed(kind: ConversionErrorKind, message: impl Into<String>) -> Self {
        ConversionResult::Failed {
            kind,
            message: message.into(),
        }
    }

    pub fn error_kind(&self) -> Option<ConversionErrorKind> {
        match self {
            ConversionResult::Failed { kind, .. } => Some(*kind),
            ConversionResult::Converted { .. } => None,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionResult::Converted {
                amount,
                from,
                to,
                converted,
            } => write!(f, "{amount} {from} is {converted} {to} at the current rate."),
            ConversionResult::Failed { kind, message } => match kind {
                ConversionErrorKind::RateUnavailable => {
                    write!(f, "❌ Could not retrieve conversion rate.")
                }
                ConversionErrorKind::Request => write!(f, "❌ Request error: {message}"),
                ConversionErrorKind::Unexpected => write!(f, "❌ Unexpected error: {message}"),
            },
        }
    }
}

/// Rounds to two decimals, halves away from zero.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
