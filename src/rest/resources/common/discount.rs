//! Discount codes, applications and their per-line allocations.

use serde::{Deserialize, Serialize};

use super::MoneySet;

/// How a discount's value is spread over the lines it targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscountAllocationMethod {
    /// Split across all entitled lines.
    Across,
    /// Applied to every entitled line.
    Each,
    /// Applied to a single line.
    One,
}

/// Which lines a discount is allocated onto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTargetSelection {
    All,
    Entitled,
    Explicit,
}

/// The kind of line a discount applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTargetType {
    LineItem,
    ShippingLine,
}

/// How a discount came to be applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscountApplicationType {
    /// Applied automatically, e.g. a Buy X Get Y offer.
    Automatic,
    /// Entered as a code at checkout.
    DiscountCode,
    /// Applied by the merchant, e.g. on a draft order.
    Manual,
    /// Applied by a Shopify Script.
    Script,
}

/// Whether a discount value is an amount or a percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscountValueType {
    /// Amount in the order's currency.
    FixedAmount,
    Percentage,
}

/// A code entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    /// Amount deducted, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

/// A discount applied to the order, referenced by index from
/// [`DiscountAllocation::discount_application_index`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountApplication {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountApplicationType>,

    /// Decimal amount or percentage, per `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DiscountValueType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<DiscountAllocationMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<DiscountTargetSelection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<DiscountTargetType>,

    /// Set for `discount_code` applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The share of a discount application that landed on one line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountAllocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Index into the order's `discount_applications`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_application_index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<MoneySet>,
}

/// A discount applied to a single line of a draft or manually created order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppliedDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DiscountValueType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}
