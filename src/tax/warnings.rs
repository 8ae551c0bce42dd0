use rust_decimal::Decimal;
use serde::Serialize;

/// Domain warnings attached to a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Warning {
    /// Taxable income is in a bracket whose higher surcharge is not modelled.
    /// The lower surcharge rate was applied, so the tax is understated.
    SurchargeNotModelled { taxable: Decimal },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::SurchargeNotModelled { taxable } => write!(
                f,
                "ignoring surcharge for high income (taxable {}K), tax is approximate",
                taxable.normalize()
            ),
        }
    }
}
