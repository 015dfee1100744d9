use thiserror::Error;

/// First field constraint violated by a car or engine request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("year cannot be empty")]
    EmptyYear,
    #[error("year must be a number")]
    NonNumericYear,
    #[error("year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },
    #[error("brand cannot be empty")]
    EmptyBrand,
    #[error("fuel type cannot be empty")]
    EmptyFuelType,
    #[error("fuel type must be one of Petrol, Diesel, Electric, Hybrid")]
    InvalidFuelType,
    #[error("engine id cannot be empty")]
    EmptyEngineId,
    #[error("engine id must be a valid UUID")]
    InvalidEngineId,
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("displacement must be greater than 0")]
    NonPositiveDisplacement,
    #[error("number of cylinders must be greater than 0")]
    NonPositiveCylinders,
    #[error("car range cannot be negative")]
    NegativeCarRange,
}
