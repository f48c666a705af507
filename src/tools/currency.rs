use serde::Deserialize;

use crate::builder::{FunctionBuilder, ParamBuilder};
use crate::chat::Tool;

pub const CONVERT_CURRENCY: &str = "convert_currency";

/// Arguments the model supplies to `convert_currency`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

/// Schema of the `convert_currency` function tool.
pub fn currency_tool() -> Tool {
    FunctionBuilder::new(CONVERT_CURRENCY)
        .description("Convert currencies using real-time exchange rates.")
        .param(
            ParamBuilder::new("amount")
                .type_of("number")
                .description("Amount of money"),
        )
        .param(
            ParamBuilder::new("from_currency")
                .type_of("string")
                .description("Currency code to convert from"),
        )
        .param(
            ParamBuilder::new("to_currency")
                .type_of("string")
                .description("Currency code to convert to"),
        )
        .required(vec![
            "amount".to_string(),
            "from_currency".to_string(),
            "to_currency".to_string(),
        ])
        .build()
}
