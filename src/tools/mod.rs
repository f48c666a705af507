//! Tools advertised to the model.

mod currency;

pub use currency::{currency_tool, ConversionRequest, CONVERT_CURRENCY};

use crate::chat::Tool;

/// Every tool the assistant advertises, in the order it sends them.
pub fn default_tools() -> Vec<Tool> {
    vec![currency_tool()]
}
