//! Billing constants for the premium membership upgrade.
//!
//! There is exactly one purchasable item: the upgrade from the `standard`
//! plan to `premium`. A successful charge records the amount and flips the
//! paying user's plan.

/// Price of the premium upgrade, in cents.
pub const PREMIUM_UPGRADE_AMOUNT_CENTS: i32 = 15_00;

/// Statement description attached to every premium upgrade charge.
pub const PREMIUM_UPGRADE_DESCRIPTION: &str = "Premium membership upgrade";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_amount_is_positive() {
        assert!(PREMIUM_UPGRADE_AMOUNT_CENTS > 0);
    }
}
