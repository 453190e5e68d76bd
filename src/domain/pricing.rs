//! Tax-inclusive price derivation.
//!
//! The tax rate is a process-wide constant expressed in basis points
//! (1000 = 10%). Keeping the rate integral means the whole computation
//! stays in integer arithmetic, so there is no binary floating-point
//! rounding anywhere in the money path.

/// Default consumption tax rate: 10%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;

const BPS_DENOMINATOR: i128 = 10_000;

/// Derives the tax-inclusive price from a stored base price.
///
/// Returns `None` when the base price is absent. A base price of exactly
/// zero also yields `None`; zero is treated as "no price set" rather than
/// a free book.
///
/// The result is `trunc(price * (10000 + rate_bps) / 10000)`, computed in
/// i128 so the widening multiply cannot overflow for any i64 price. A gross
/// amount that does not fit back into i64 yields `None` instead of wrapping.
pub fn price_with_tax(price: Option<i64>, tax_rate_bps: u32) -> Option<i64> {
    let price = match price {
        Some(p) if p != 0 => p,
        _ => return None,
    };

    let gross = (price as i128) * (BPS_DENOMINATOR + tax_rate_bps as i128) / BPS_DENOMINATOR;
    i64::try_from(gross).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_default_rate() {
        assert_eq!(price_with_tax(Some(1000), DEFAULT_TAX_RATE_BPS), Some(1100));
        assert_eq!(price_with_tax(Some(500), DEFAULT_TAX_RATE_BPS), Some(550));
    }

    #[test]
    fn truncates_fractional_result() {
        // 101 * 1.10 = 111.1 -> 111
        assert_eq!(price_with_tax(Some(101), 1000), Some(111));
        // 999 * 1.08 = 1078.92 -> 1078
        assert_eq!(price_with_tax(Some(999), 800), Some(1078));
    }

    #[test]
    fn exact_at_rates_that_break_binary_floats() {
        // 0.1 has no exact binary representation; integer math sidesteps it.
        assert_eq!(price_with_tax(Some(3), 1000), Some(3));
        assert_eq!(price_with_tax(Some(10), 1000), Some(11));
        assert_eq!(price_with_tax(Some(1_000_000_000), 1000), Some(1_100_000_000));
    }

    #[test]
    fn absent_price_yields_none() {
        assert_eq!(price_with_tax(None, DEFAULT_TAX_RATE_BPS), None);
    }

    #[test]
    fn zero_price_yields_none() {
        // Zero counts as "no price set", not a free book.
        assert_eq!(price_with_tax(Some(0), DEFAULT_TAX_RATE_BPS), None);
    }

    #[test]
    fn zero_rate_is_identity() {
        assert_eq!(price_with_tax(Some(1234), 0), Some(1234));
    }

    #[test]
    fn unrepresentable_gross_yields_none_instead_of_wrapping() {
        // i64::MAX * 1.10 exceeds i64; the result must never go negative.
        assert_eq!(price_with_tax(Some(i64::MAX), 1000), None);
        assert_eq!(price_with_tax(Some(i64::MAX), 0), Some(i64::MAX));

        // Largest price whose 10% gross still fits.
        let max_safe = (i64::MAX as i128 * 10_000 / 11_000) as i64;
        assert!(price_with_tax(Some(max_safe), 1000).is_some_and(|g| g > 0));
        assert_eq!(price_with_tax(Some(max_safe + 1), 1000), None);
    }
}
