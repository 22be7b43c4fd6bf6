//! Deterministic price derivation.
//!
//! A price is a pure function of (statistic, magnitude); there is no market
//! simulation and no hidden state. Zero magnitude prices at zero, which the
//! rest of the engine reads as "no active wager".

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::Statistic;

/// Fixed base price per statistic.
pub fn base_price(statistic: Statistic) -> Decimal {
    match statistic {
        Statistic::Goals => dec!(3.50),
        Statistic::Assists => dec!(4.20),
        Statistic::Shots => dec!(1.80),
        Statistic::YellowCards => dec!(3.00),
        Statistic::RedCards => dec!(12.00),
    }
}

/// Price for a statistic at the given magnitude.
///
/// Scales the base price by `magnitude * 0.5 + 1`, rounded half-away-from-zero
/// to cents, so the quoted figure grows with the size of the claim.
pub fn price(statistic: Statistic, magnitude: u32) -> Decimal {
    if magnitude == 0 {
        return Decimal::ZERO;
    }
    let factor = Decimal::from(magnitude) * dec!(0.5) + Decimal::ONE;
    round_to_cents(base_price(statistic) * factor)
}

/// Round to 2 fractional digits, midpoints away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a price with exactly two fraction digits ("0.00", "44.10").
pub fn format_price(value: Decimal) -> String {
    let mut cents = round_to_cents(value);
    cents.rescale(2);
    cents.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(base_price(Statistic::Goals), dec!(3.50));
        assert_eq!(base_price(Statistic::Assists), dec!(4.20));
        assert_eq!(base_price(Statistic::Shots), dec!(1.80));
        assert_eq!(base_price(Statistic::YellowCards), dec!(3.00));
        assert_eq!(base_price(Statistic::RedCards), dec!(12.00));
    }

    #[test]
    fn test_zero_magnitude_prices_at_zero() {
        for statistic in Statistic::ALL {
            assert_eq!(price(statistic, 0), Decimal::ZERO);
        }
    }

    #[test]
    fn test_price_scales_with_magnitude() {
        // base * (v * 0.5 + 1)
        assert_eq!(price(Statistic::Goals, 1), dec!(5.25));
        assert_eq!(price(Statistic::Goals, 2), dec!(7.00));
        assert_eq!(price(Statistic::Assists, 1), dec!(6.30));
        assert_eq!(price(Statistic::Shots, 3), dec!(4.50));
        assert_eq!(price(Statistic::RedCards, 1), dec!(18.00));
    }

    #[test]
    fn test_price_is_deterministic() {
        assert_eq!(price(Statistic::YellowCards, 4), price(Statistic::YellowCards, 4));
    }

    #[test]
    fn test_format_price_pads_to_two_digits() {
        assert_eq!(format_price(Decimal::ZERO), "0.00");
        assert_eq!(format_price(dec!(7)), "7.00");
        assert_eq!(format_price(dec!(44.1)), "44.10");
        assert_eq!(format_price(dec!(441.005)), "441.01");
    }

    #[cfg(feature = "proptest")]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_statistic() -> impl Strategy<Value = Statistic> {
            (0usize..Statistic::ALL.len()).prop_map(|i| Statistic::ALL[i])
        }

        proptest! {
            /// Property: the quoted price matches the closed form for every
            /// positive magnitude.
            #[test]
            fn prop_price_matches_closed_form(
                statistic in any_statistic(),
                magnitude in 1u32..200
            ) {
                let factor = Decimal::from(magnitude) * dec!(0.5) + Decimal::ONE;
                let expected = round_to_cents(base_price(statistic) * factor);
                prop_assert_eq!(price(statistic, magnitude), expected);
            }

            /// Property: prices strictly grow with the magnitude of the claim.
            #[test]
            fn prop_price_monotonic(
                statistic in any_statistic(),
                magnitude in 1u32..200
            ) {
                prop_assert!(price(statistic, magnitude + 1) > price(statistic, magnitude));
            }
        }
    }
}
