//! Line items, shipping lines and tax lines.
//!
//! Two fields here arrive in more than one JSON shape and are normalized on
//! decode (see [`super::tolerant`]):
//!
//! - [`LineItem::properties`] is always a `Vec`, empty when the field is
//!   absent, `null` or a blank object.
//! - [`ShippingLine::requested_fulfillment_service_id`] is always a
//!   `String`, empty when the field is absent or `null`.

use serde::{Deserialize, Serialize};

use super::tolerant::{deserialize_properties, deserialize_scalar_id};
use super::{AppliedDiscount, DiscountAllocation, ItemLocation, MoneySet, NoteAttribute};

/// A tax charged on an order, line item or shipping line.
///
/// # Example
///
/// ```rust
/// use shopify_orders::rest::resources::common::TaxLine;
///
/// let tax = TaxLine {
///     title: Some("State Tax".to_string()),
///     price: Some("5.99".to_string()),
///     rate: Some(0.08),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    /// Tax name, e.g. "VAT".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Amount charged, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Rate as a fraction, `0.08` for 8%.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<MoneySet>,
}

/// One product variant on an order.
///
/// # Example
///
/// ```rust
/// use shopify_orders::rest::resources::common::{LineItem, NoteAttribute};
///
/// let item: LineItem = serde_json::from_str(
///     r#"{"id": 1, "quantity": 2, "properties": {"name": "engraving", "value": "J.S."}}"#,
/// ).unwrap();
/// assert_eq!(item.properties, vec![NoteAttribute::new("engraving", "J.S.")]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tax_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// Product and variant title combined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_exists: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// `fulfilled`, `partial`, `not_eligible` or absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_inventory_management: Option<String>,

    /// Weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// Custom properties such as engravings or gift messages.
    #[serde(
        default,
        deserialize_with = "deserialize_properties",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<NoteAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_lines: Vec<TaxLine>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discount_allocations: Vec<DiscountAllocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,

    /// Deprecated since 2022-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_location: Option<ItemLocation>,

    /// Deprecated since 2022-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_location: Option<ItemLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

/// A shipping method chosen for the order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Where the rate came from, e.g. `shopify` or a carrier service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Fulfillment service requested for this shipping method. Shopify
    /// sends it as a string, a number or `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_scalar_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub requested_fulfillment_service_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_lines: Vec<TaxLine>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discount_allocations: Vec<DiscountAllocation>,
}
