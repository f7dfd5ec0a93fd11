use super::access_gate::AccessGate;
use super::estimate::{
    estimate, parse_price, CostEstimate, Destination, PriceInputError, ShippingMethod, VehiclePrice,
};

/// Session-wide state shared through the component tree.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub gate: AccessGate,
    /// Kept here rather than in the calculator page so the inputs survive
    /// navigating away and back.
    pub calculator: CalculatorInputs,
    pub mobile_menu_open: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorInputs {
    pub price_input: String,
    pub destination: Destination,
    pub shipping: ShippingMethod,
}

impl CalculatorInputs {
    pub fn price(&self) -> Result<VehiclePrice, PriceInputError> {
        parse_price(&self.price_input)
    }

    /// Breakdown for the current inputs, or the reason there is none.
    pub fn breakdown(&self) -> Result<CostEstimate, PriceInputError> {
        self.price()
            .map(|price| estimate(price, self.destination, self.shipping))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn breakdown_uses_selected_destination_and_shipping() {
        let inputs = CalculatorInputs {
            price_input: "25000".to_string(),
            destination: Destination::Usa,
            shipping: ShippingMethod::RoRo,
        };

        assert_eq!(inputs.breakdown().map(|e| e.total), Ok(dec!(30287)));
    }

    #[test]
    fn oversized_price_is_reported_instead_of_estimated() {
        let inputs = CalculatorInputs {
            price_input: "5e9".to_string(),
            ..CalculatorInputs::default()
        };

        assert_eq!(inputs.breakdown(), Err(PriceInputError::TooLarge));
    }

    #[test]
    fn breakdown_is_withheld_for_empty_price() {
        let inputs = CalculatorInputs::default();

        assert_eq!(inputs.breakdown(), Err(PriceInputError::Empty));
    }

    #[test]
    fn defaults_match_the_first_options() {
        let inputs = CalculatorInputs::default();

        assert_eq!(inputs.destination, Destination::Usa);
        assert_eq!(inputs.shipping, ShippingMethod::RoRo);
    }
}
