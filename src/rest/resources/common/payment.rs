//! Transactions, refunds and the client details captured at checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LineItem, MoneySet};

/// Card details reported by the payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_bin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result_code: Option<String>,

    /// Masked, e.g. `"•••• •••• •••• 4242"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_company: Option<String>,
}

/// Money moving through a gateway for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// `authorization`, `capture`, `sale`, `void` or `refund`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// `pending`, `failure`, `success` or `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// The authorization a capture or refund settles against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
}

/// Browser information recorded when the order was placed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Why an order adjustment was recorded on a refund.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderAdjustmentKind {
    ShippingRefund,
    RefundDiscrepancy,
}

/// A refund amount not tied to a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderAdjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<OrderAdjustmentKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount_set: Option<MoneySet>,
}

/// Quantity of one line item being refunded.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefundLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item: Option<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<MoneySet>,
}

/// A refund issued against an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Refund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refund_line_items: Vec<RefundLineItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_adjustments: Vec<OrderAdjustment>,
}
