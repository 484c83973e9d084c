//! Amounts in shop and presentment currencies.

use serde::{Deserialize, Serialize};

/// A single amount. The amount stays a string so decimal precision survives
/// the round trip.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Money {
    /// Decimal amount, e.g. `"19.99"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Money {
    /// Creates an amount in the given currency.
    #[must_use]
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            currency_code: Some(currency_code.into()),
        }
    }
}

/// The `*_set` fields on orders: the same amount in the shop's currency and
/// in the currency the customer saw at checkout.
///
/// # Example
///
/// ```rust
/// use shopify_orders::rest::resources::common::{Money, MoneySet};
///
/// let total = MoneySet {
///     shop_money: Some(Money::new("19.99", "USD")),
///     presentment_money: Some(Money::new("25.99", "CAD")),
/// };
/// assert_eq!(total.shop_amount(), Some("19.99"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MoneySet {
    /// Amount in the shop's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_money: Option<Money>,

    /// Amount in the presentment currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_money: Option<Money>,
}

impl MoneySet {
    /// Shop-currency amount, if present.
    #[must_use]
    pub fn shop_amount(&self) -> Option<&str> {
        self.shop_money.as_ref().and_then(|m| m.amount.as_deref())
    }
}
