use crate::{
    core::error::{JourneyError, ensure_within},
    quantity::{cost::Cost, distance::Miles, price::PricePerLitre},
};

/// Fuel cost of a drive at a fixed fuel economy.
#[derive(Copy, Clone, Debug)]
pub struct FuelCostModel {
    pub miles_per_gallon: f64,
}

impl FuelCostModel {
    pub const LITRES_PER_GALLON: f64 = 4.546;

    pub const MIN_PRICE: PricePerLitre = PricePerLitre(1.0);
    pub const MAX_PRICE: PricePerLitre = PricePerLitre(2.5);

    /// The van.
    pub const DEFAULT: Self = Self { miles_per_gallon: 35.0 };

    pub fn validate_price(price: PricePerLitre) -> Result<PricePerLitre, JourneyError> {
        ensure_within("fuel price per litre", price.0, Self::MIN_PRICE.0, Self::MAX_PRICE.0)
            .map(PricePerLitre)
    }

    pub fn estimate(self, distance: Miles, price: PricePerLitre) -> Result<Cost, JourneyError> {
        let price = Self::validate_price(price)?;
        Ok(Cost((Self::LITRES_PER_GALLON / self.miles_per_gallon) * price.0 * distance.0)
            .round_to_pennies())
    }
}

impl Default for FuelCostModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}
