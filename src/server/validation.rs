//! Request field validation for cars and engines.
//!
//! Checks run in a fixed order and stop at the first violated constraint, so a request
//! with several problems always reports the same one. Successful validation yields the
//! parsed parameter types consumed by the data layer.

use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::{
    model::{car::CarRequestDto, engine::EngineRequestDto},
    server::{
        error::validation::ValidationError,
        model::{
            car::{CarParams, FuelType},
            engine::EngineParams,
        },
    },
};

/// Year of the first production automobile; earlier model years are rejected.
pub const MIN_CAR_YEAR: i32 = 1886;

/// Validates a car request against the current calendar year.
pub fn validate_car(request: &CarRequestDto) -> Result<CarParams, ValidationError> {
    validate_car_at(request, Utc::now().year())
}

/// Validates a car request with an explicit upper bound for the model year.
///
/// # Arguments
/// - `request` - Car fields as received from the client
/// - `current_year` - Latest accepted model year
///
/// # Returns
/// - `Ok(CarParams)` - All fields valid, year and engine id parsed
/// - `Err(ValidationError)` - First constraint the request violates
pub fn validate_car_at(
    request: &CarRequestDto,
    current_year: i32,
) -> Result<CarParams, ValidationError> {
    if request.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let year = validate_year(&request.year, current_year)?;

    if request.brand.is_empty() {
        return Err(ValidationError::EmptyBrand);
    }

    let fuel_type = validate_fuel_type(&request.fuel_type)?;
    let engine_id = validate_engine_id(&request.engine_id)?;

    if request.price < 0.0 {
        return Err(ValidationError::NegativePrice);
    }

    Ok(CarParams {
        name: request.name.clone(),
        year,
        brand: request.brand.clone(),
        fuel_type,
        engine_id,
        price: request.price,
    })
}

/// Validates an engine request.
pub fn validate_engine(request: &EngineRequestDto) -> Result<EngineParams, ValidationError> {
    if request.displacement <= 0 {
        return Err(ValidationError::NonPositiveDisplacement);
    }
    if request.no_of_cylinders <= 0 {
        return Err(ValidationError::NonPositiveCylinders);
    }
    if request.car_range < 0 {
        return Err(ValidationError::NegativeCarRange);
    }

    Ok(EngineParams {
        displacement: request.displacement,
        no_of_cylinders: request.no_of_cylinders,
        car_range: request.car_range,
    })
}

fn validate_year(year: &str, current_year: i32) -> Result<i32, ValidationError> {
    if year.is_empty() {
        return Err(ValidationError::EmptyYear);
    }

    let year = year
        .parse::<i32>()
        .map_err(|_| ValidationError::NonNumericYear)?;

    if !(MIN_CAR_YEAR..=current_year).contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            min: MIN_CAR_YEAR,
            max: current_year,
        });
    }

    Ok(year)
}

fn validate_fuel_type(fuel_type: &str) -> Result<FuelType, ValidationError> {
    if fuel_type.is_empty() {
        return Err(ValidationError::EmptyFuelType);
    }

    FuelType::parse(fuel_type).ok_or(ValidationError::InvalidFuelType)
}

fn validate_engine_id(engine_id: &str) -> Result<Uuid, ValidationError> {
    if engine_id.is_empty() {
        return Err(ValidationError::EmptyEngineId);
    }

    Uuid::parse_str(engine_id).map_err(|_| ValidationError::InvalidEngineId)
}
