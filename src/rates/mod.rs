//! Live exchange-rate lookups against the Frankfurter API.

mod client;
mod result;

pub use client::{RateClient, DEFAULT_RATES_BASE_URL, DEFAULT_RATES_TIMEOUT_SECONDS};
pub use result::{ConversionErrorKind, ConversionResult};
