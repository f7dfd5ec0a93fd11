//! Import cost estimation.
//!
//! Everything here is pure: the same price, destination and shipping method
//! always produce the same breakdown. Amounts stay exact `Decimal`s until
//! they are formatted for display.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

pub const AUCTION_FEE_RATE: Decimal = dec!(0.03);
pub const SERVICE_FEE_RATE: Decimal = dec!(0.08);
pub const DOMESTIC_TRANSPORT: Decimal = dec!(300);
pub const EXPORT_DOCS: Decimal = dec!(200);
pub const INSURANCE_RATE: Decimal = dec!(0.01);
pub const COMPLIANCE_MODIFICATION: Decimal = dec!(500);
pub const REGISTRATION: Decimal = dec!(200);

/// Largest price magnitude a [`VehiclePrice`] can hold. Keeps every
/// intermediate product and sum far away from `Decimal::MAX`.
pub const MAX_VEHICLE_PRICE: Decimal = dec!(1000000000);

/// A price whose magnitude is at most [`MAX_VEHICLE_PRICE`], so [`estimate`]
/// cannot overflow. Negative amounts are representable; [`parse_price`]
/// rejects them separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehiclePrice(Decimal);

impl VehiclePrice {
    pub fn new(amount: Decimal) -> Result<Self, PriceInputError> {
        if amount.abs() > MAX_VEHICLE_PRICE {
            return Err(PriceInputError::TooLarge);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

/// Destination countries with their import duty and tax rates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    #[default]
    Usa,
    Canada,
    UnitedKingdom,
    Australia,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Usa,
        Destination::Canada,
        Destination::UnitedKingdom,
        Destination::Australia,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Destination::Usa => "usa",
            Destination::Canada => "canada",
            Destination::UnitedKingdom => "uk",
            Destination::Australia => "australia",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dest| dest.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Destination::Usa => "United States",
            Destination::Canada => "Canada",
            Destination::UnitedKingdom => "United Kingdom",
            Destination::Australia => "Australia",
        }
    }

    /// Import duty, in percent of the vehicle price.
    pub fn duty_pct(&self) -> Decimal {
        match self {
            Destination::Usa => dec!(2.5),
            Destination::Canada => dec!(6.1),
            Destination::UnitedKingdom => dec!(10),
            Destination::Australia => dec!(0),
        }
    }

    /// Sales/import tax, in percent of price plus duty.
    pub fn tax_pct(&self) -> Decimal {
        match self {
            Destination::Usa => dec!(0),
            Destination::Canada => dec!(13),
            Destination::UnitedKingdom => dec!(20),
            Destination::Australia => dec!(10),
        }
    }

    /// Whether vehicles arriving here skip the compliance modification fee.
    pub fn compliance_exempt(&self) -> bool {
        matches!(self, Destination::Usa)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    #[default]
    RoRo,
    Container,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 2] = [ShippingMethod::RoRo, ShippingMethod::Container];

    pub fn key(&self) -> &'static str {
        match self {
            ShippingMethod::RoRo => "roro",
            ShippingMethod::Container => "container",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShippingMethod::RoRo => "RoRo Shipping",
            ShippingMethod::Container => "Container Shipping",
        }
    }

    pub fn base_cost(&self) -> Decimal {
        match self {
            ShippingMethod::RoRo => dec!(1200),
            ShippingMethod::Container => dec!(2500),
        }
    }
}

/// Itemised import cost. `total` is the exact sum of every other field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostEstimate {
    pub destination: Destination,
    pub shipping: ShippingMethod,
    pub vehicle_price: Decimal,
    pub auction_fee: Decimal,
    pub service_fee: Decimal,
    pub domestic_transport: Decimal,
    pub export_docs: Decimal,
    pub shipping_cost: Decimal,
    pub insurance: Decimal,
    pub duty: Decimal,
    pub tax: Decimal,
    pub compliance: Decimal,
    pub registration: Decimal,
    pub total: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineItemKind {
    VehiclePrice,
    AuctionFee,
    ServiceFee,
    DomesticTransport,
    ExportDocs,
    Shipping,
    Insurance,
    Duty,
    Tax,
    Compliance,
    Registration,
}

impl LineItemKind {
    fn label(&self, destination: Destination) -> String {
        match self {
            LineItemKind::VehiclePrice => "Vehicle Price".to_string(),
            LineItemKind::AuctionFee => "Auction Fee (3%)".to_string(),
            LineItemKind::ServiceFee => "Service Fee (8%)".to_string(),
            LineItemKind::DomesticTransport => "Japan Transport".to_string(),
            LineItemKind::ExportDocs => "Export Documentation".to_string(),
            LineItemKind::Shipping => "Shipping".to_string(),
            LineItemKind::Insurance => "Insurance".to_string(),
            LineItemKind::Duty => format!("Duty ({}%)", destination.duty_pct().normalize()),
            LineItemKind::Tax => format!("Tax ({}%)", destination.tax_pct().normalize()),
            LineItemKind::Compliance => "Compliance Modifications".to_string(),
            LineItemKind::Registration => "Registration".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl CostEstimate {
    /// Breakdown rows in display order. The compliance row is only present
    /// when a fee applies, so the rows always sum to `total`.
    pub fn line_items(&self) -> Vec<LineItem> {
        let rows = [
            (LineItemKind::VehiclePrice, self.vehicle_price),
            (LineItemKind::AuctionFee, self.auction_fee),
            (LineItemKind::ServiceFee, self.service_fee),
            (LineItemKind::DomesticTransport, self.domestic_transport),
            (LineItemKind::ExportDocs, self.export_docs),
            (LineItemKind::Shipping, self.shipping_cost),
            (LineItemKind::Insurance, self.insurance),
            (LineItemKind::Duty, self.duty),
            (LineItemKind::Tax, self.tax),
            (LineItemKind::Compliance, self.compliance),
            (LineItemKind::Registration, self.registration),
        ];

        rows.into_iter()
            .filter(|(kind, amount)| *kind != LineItemKind::Compliance || !amount.is_zero())
            .map(|(kind, amount)| LineItem {
                label: kind.label(self.destination),
                amount,
            })
            .collect()
    }
}

/// Computes the full import cost for a vehicle.
///
/// Tax is levied on the price plus duty, not on the price alone. Negative
/// prices are not clamped; [`parse_price`] is where input gets rejected. The
/// bound carried by [`VehiclePrice`] keeps the arithmetic from overflowing.
pub fn estimate(price: VehiclePrice, destination: Destination, shipping: ShippingMethod) -> CostEstimate {
    let price = price.amount();
    let auction_fee = price * AUCTION_FEE_RATE;
    let service_fee = price * SERVICE_FEE_RATE;
    let domestic_transport = DOMESTIC_TRANSPORT;
    let export_docs = EXPORT_DOCS;
    let shipping_cost = shipping.base_cost();
    let insurance = shipping_cost * INSURANCE_RATE;
    let duty = price * destination.duty_pct() / dec!(100);
    let tax = (price + duty) * destination.tax_pct() / dec!(100);
    let compliance = if destination.compliance_exempt() {
        Decimal::ZERO
    } else {
        COMPLIANCE_MODIFICATION
    };
    let registration = REGISTRATION;

    let total = price
        + auction_fee
        + service_fee
        + domestic_transport
        + export_docs
        + shipping_cost
        + insurance
        + duty
        + tax
        + compliance
        + registration;

    CostEstimate {
        destination,
        shipping,
        vehicle_price: price,
        auction_fee,
        service_fee,
        domestic_transport,
        export_docs,
        shipping_cost,
        insurance,
        duty,
        tax,
        compliance,
        registration,
        total,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PriceInputError {
    #[error("Enter vehicle price to calculate costs")]
    Empty,
    #[error("\"{0}\" is not a valid amount")]
    NotANumber(String),
    #[error("Vehicle price cannot be negative")]
    Negative,
    #[error("Vehicle price is above the supported maximum")]
    TooLarge,
}

/// Parses the free-text price field.
pub fn parse_price(raw: &str) -> Result<VehiclePrice, PriceInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PriceInputError::Empty);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PriceInputError::NotANumber(trimmed.to_string()))?;

    if value < Decimal::ZERO {
        return Err(PriceInputError::Negative);
    }
    VehiclePrice::new(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn priced(amount: Decimal) -> VehiclePrice {
        VehiclePrice::new(amount).unwrap()
    }

    fn sum_of_fields(e: &CostEstimate) -> Decimal {
        e.vehicle_price
            + e.auction_fee
            + e.service_fee
            + e.domestic_transport
            + e.export_docs
            + e.shipping_cost
            + e.insurance
            + e.duty
            + e.tax
            + e.compliance
            + e.registration
    }

    // =========================================================================
    // estimate
    // =========================================================================

    #[test]
    fn usa_roro_example_breakdown() {
        let e = estimate(priced(dec!(25000)), Destination::Usa, ShippingMethod::RoRo);

        assert_eq!(e.auction_fee, dec!(750));
        assert_eq!(e.service_fee, dec!(2000));
        assert_eq!(e.domestic_transport, dec!(300));
        assert_eq!(e.export_docs, dec!(200));
        assert_eq!(e.shipping_cost, dec!(1200));
        assert_eq!(e.insurance, dec!(12));
        assert_eq!(e.duty, dec!(625));
        assert_eq!(e.tax, dec!(0));
        assert_eq!(e.compliance, dec!(0));
        assert_eq!(e.registration, dec!(200));
        assert_eq!(e.total, dec!(30287));
    }

    #[test]
    fn tax_is_levied_on_price_plus_duty() {
        let e = estimate(priced(dec!(1000)), Destination::UnitedKingdom, ShippingMethod::RoRo);

        assert_eq!(e.duty, dec!(100));
        assert_eq!(e.tax, dec!(220));
    }

    #[test]
    fn total_matches_field_sum_for_every_combination() {
        for price in [dec!(0), dec!(1), dec!(999.99), dec!(25000), dec!(123456.78)] {
            for destination in Destination::ALL {
                for shipping in ShippingMethod::ALL {
                    let e = estimate(priced(price), destination, shipping);
                    assert_eq!(e.total, sum_of_fields(&e), "{destination:?}/{shipping:?}/{price}");
                }
            }
        }
    }

    #[test]
    fn zero_price_leaves_only_fixed_charges() {
        for destination in Destination::ALL {
            for shipping in ShippingMethod::ALL {
                let e = estimate(priced(Decimal::ZERO), destination, shipping);
                let compliance = if destination.compliance_exempt() {
                    dec!(0)
                } else {
                    dec!(500)
                };
                let expected = dec!(300)
                    + dec!(200)
                    + shipping.base_cost()
                    + shipping.base_cost() * dec!(0.01)
                    + dec!(200)
                    + compliance;

                assert_eq!(e.auction_fee, dec!(0));
                assert_eq!(e.duty, dec!(0));
                assert_eq!(e.tax, dec!(0));
                assert_eq!(e.total, expected);
            }
        }
    }

    #[test]
    fn compliance_fee_applies_everywhere_but_usa() {
        let price = dec!(10000);

        assert_eq!(
            estimate(priced(price), Destination::Usa, ShippingMethod::Container).compliance,
            dec!(0)
        );
        for destination in [
            Destination::Canada,
            Destination::UnitedKingdom,
            Destination::Australia,
        ] {
            assert_eq!(
                estimate(priced(price), destination, ShippingMethod::Container).compliance,
                dec!(500)
            );
        }
    }

    #[test]
    fn container_shipping_costs_more_than_roro() {
        let roro = estimate(priced(dec!(5000)), Destination::Canada, ShippingMethod::RoRo);
        let container = estimate(priced(dec!(5000)), Destination::Canada, ShippingMethod::Container);

        assert_eq!(container.shipping_cost, dec!(2500));
        assert_eq!(container.insurance, dec!(25));
        assert_eq!(container.total - roro.total, dec!(1313));
    }

    #[test]
    fn estimate_is_idempotent() {
        let first = estimate(priced(dec!(18750.25)), Destination::Canada, ShippingMethod::Container);
        let second = estimate(priced(dec!(18750.25)), Destination::Canada, ShippingMethod::Container);

        assert_eq!(first, second);
    }

    #[test]
    fn negative_price_is_not_clamped() {
        let e = estimate(priced(dec!(-1000)), Destination::Usa, ShippingMethod::RoRo);

        assert_eq!(e.vehicle_price, dec!(-1000));
        assert_eq!(e.auction_fee, dec!(-30));
        assert_eq!(e.total, sum_of_fields(&e));
    }

    // =========================================================================
    // line items
    // =========================================================================

    #[test]
    fn line_items_skip_compliance_for_usa() {
        let e = estimate(priced(dec!(25000)), Destination::Usa, ShippingMethod::RoRo);
        let items = e.line_items();

        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|item| item.label != "Compliance Modifications"));
        assert_eq!(items.iter().map(|item| item.amount).sum::<Decimal>(), e.total);
    }

    #[test]
    fn line_items_include_compliance_and_rates_elsewhere() {
        let e = estimate(priced(dec!(25000)), Destination::Canada, ShippingMethod::RoRo);
        let items = e.line_items();
        let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();

        assert_eq!(items.len(), 11);
        assert!(labels.contains(&"Duty (6.1%)"));
        assert!(labels.contains(&"Tax (13%)"));
        assert!(labels.contains(&"Compliance Modifications"));
        assert_eq!(items.first().map(|item| item.label.as_str()), Some("Vehicle Price"));
        assert_eq!(items.last().map(|item| item.label.as_str()), Some("Registration"));
    }

    // =========================================================================
    // lookup tables
    // =========================================================================

    #[test]
    fn keys_round_trip_through_lookup() {
        for destination in Destination::ALL {
            assert_eq!(Destination::from_key(destination.key()), Some(destination));
        }
        for method in ShippingMethod::ALL {
            assert_eq!(ShippingMethod::from_key(method.key()), Some(method));
        }
        assert_eq!(Destination::from_key("japan"), None);
        assert_eq!(ShippingMethod::from_key("air"), None);
    }

    // =========================================================================
    // parse_price
    // =========================================================================

    fn amount(raw: &str) -> Result<Decimal, PriceInputError> {
        parse_price(raw).map(|price| price.amount())
    }

    #[test]
    fn parse_price_accepts_plain_and_padded_amounts() {
        assert_eq!(amount("25000"), Ok(dec!(25000)));
        assert_eq!(amount("  1999.95 "), Ok(dec!(1999.95)));
        assert_eq!(amount("0"), Ok(dec!(0)));
    }

    #[test]
    fn parse_price_accepts_scientific_notation() {
        assert_eq!(amount("2.5e4"), Ok(dec!(25000)));
    }

    #[test]
    fn parse_price_reports_empty_input() {
        assert_eq!(parse_price(""), Err(PriceInputError::Empty));
        assert_eq!(parse_price("   "), Err(PriceInputError::Empty));
    }

    #[test]
    fn parse_price_rejects_text() {
        assert_eq!(
            parse_price("abc"),
            Err(PriceInputError::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn parse_price_rejects_negative_and_oversized_amounts() {
        assert_eq!(amount("-1"), Err(PriceInputError::Negative));
        assert_eq!(amount("1000000001"), Err(PriceInputError::TooLarge));
        assert_eq!(amount("1000000000"), Ok(MAX_VEHICLE_PRICE));
    }

    #[test]
    fn text_is_reported_before_range_checks() {
        assert_eq!(
            amount("12abc"),
            Err(PriceInputError::NotANumber("12abc".to_string()))
        );
    }

    // =========================================================================
    // VehiclePrice
    // =========================================================================

    #[test]
    fn vehicle_price_rejects_amounts_beyond_the_bound() {
        assert_eq!(VehiclePrice::new(Decimal::MAX), Err(PriceInputError::TooLarge));
        assert_eq!(VehiclePrice::new(Decimal::MIN), Err(PriceInputError::TooLarge));
        assert_eq!(
            VehiclePrice::new(MAX_VEHICLE_PRICE + dec!(0.01)),
            Err(PriceInputError::TooLarge)
        );
    }

    #[test]
    fn largest_prices_estimate_without_overflow() {
        for amount in [MAX_VEHICLE_PRICE, -MAX_VEHICLE_PRICE] {
            for destination in Destination::ALL {
                for shipping in ShippingMethod::ALL {
                    let e = estimate(priced(amount), destination, shipping);
                    assert_eq!(e.total, sum_of_fields(&e), "{destination:?}/{shipping:?}/{amount}");
                }
            }
        }

        let uk = estimate(priced(MAX_VEHICLE_PRICE), Destination::UnitedKingdom, ShippingMethod::Container);
        assert_eq!(uk.duty, dec!(100000000));
        assert_eq!(uk.tax, dec!(220000000));
    }
}
