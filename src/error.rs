use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KitchenError {
    #[error("{control}: '{input}' is not a number")]
    InvalidNumber { control: &'static str, input: String },

    #[error("{control}: {value} is outside {min}..={max}")]
    OutOfRange {
        control: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid hex color '{0}'")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, KitchenError>;
