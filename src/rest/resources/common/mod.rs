//! Record types shared by the order, fulfillment and metafield resources.

mod address;
mod discount;
mod line_item;
mod money;
mod payment;
pub mod tolerant;

pub use address::{Address, ItemLocation};
pub use discount::{
    AppliedDiscount, DiscountAllocation, DiscountAllocationMethod, DiscountApplication,
    DiscountApplicationType, DiscountCode, DiscountTargetSelection, DiscountTargetType,
    DiscountValueType,
};
pub use line_item::{LineItem, ShippingLine, TaxLine};
pub use money::{Money, MoneySet};
pub use payment::{
    ClientDetails, OrderAdjustment, OrderAdjustmentKind, PaymentDetails, Refund, RefundLineItem,
    Transaction,
};
pub use tolerant::{NoteAttribute, PropertyList};
