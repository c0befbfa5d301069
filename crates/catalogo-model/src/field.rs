//! Canonical semantic fields targeted by the conversion pipeline.
//!
//! A canonical field names a product attribute independently of how the
//! source spreadsheet spells its header. The set is closed: adding a field
//! means extending the enum and the synonym tables together.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product attribute the pipeline knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    /// Product code (the one field strict mode treats as mandatory).
    Code,
    /// Product description; may be synthesized when no column supplies it.
    Description,
    /// Sale unit (UN, PC, KG, ...).
    Unit,
    /// Fiscal classification (NCM).
    TaxClassification,
    /// Retail sale price.
    RetailPrice,
    /// Wholesale price (reported in the observations column).
    WholesalePrice,
    /// Promotional price (reported in the observations column).
    PromoPrice,
    /// Stock on hand.
    Stock,
    /// Purchase/cost price.
    PurchasePrice,
    /// Code used by the supplier.
    OriginalCode,
    /// Supplier name.
    Supplier,
    /// Physical location inside the store/warehouse.
    Address,
    /// Secondary location (reported in the additional-info column).
    Address2,
    /// Warranty in months.
    Warranty,
    /// Pending issue notes (reported in the additional-info column).
    Pending,
    /// Product line / department.
    ProductLine,
    /// Product group / category.
    Group,
}

impl CanonicalField {
    /// All canonical fields, in extraction order.
    pub const ALL: [CanonicalField; 17] = [
        CanonicalField::Code,
        CanonicalField::Description,
        CanonicalField::Unit,
        CanonicalField::TaxClassification,
        CanonicalField::RetailPrice,
        CanonicalField::WholesalePrice,
        CanonicalField::PromoPrice,
        CanonicalField::Stock,
        CanonicalField::PurchasePrice,
        CanonicalField::OriginalCode,
        CanonicalField::Supplier,
        CanonicalField::Address,
        CanonicalField::Address2,
        CanonicalField::Warranty,
        CanonicalField::Pending,
        CanonicalField::ProductLine,
        CanonicalField::Group,
    ];

    /// Stable identifier used in logs and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Code => "code",
            CanonicalField::Description => "description",
            CanonicalField::Unit => "unit",
            CanonicalField::TaxClassification => "tax_classification",
            CanonicalField::RetailPrice => "retail_price",
            CanonicalField::WholesalePrice => "wholesale_price",
            CanonicalField::PromoPrice => "promo_price",
            CanonicalField::Stock => "stock",
            CanonicalField::PurchasePrice => "purchase_price",
            CanonicalField::OriginalCode => "original_code",
            CanonicalField::Supplier => "supplier",
            CanonicalField::Address => "address",
            CanonicalField::Address2 => "address2",
            CanonicalField::Warranty => "warranty",
            CanonicalField::Pending => "pending",
            CanonicalField::ProductLine => "product_line",
            CanonicalField::Group => "group",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
