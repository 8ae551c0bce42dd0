use rust_decimal::Decimal;
use serde::Serialize;

use super::regime::Regime;
use super::warnings::Warning;

/// Income tax due on a taxable income, with its components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeTax {
    pub taxable: Decimal,
    /// Sum of the slab taxes, before cess and surcharge
    pub slab_tax: Decimal,
    pub cess: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
    pub warnings: Vec<Warning>,
}

impl IncomeTax {
    fn rebated(taxable: Decimal) -> Self {
        IncomeTax {
            taxable,
            slab_tax: Decimal::ZERO,
            cess: Decimal::ZERO,
            surcharge: Decimal::ZERO,
            total: Decimal::ZERO,
            warnings: Vec::new(),
        }
    }

    /// True when the figure leaves out a levy that is not modelled
    pub fn is_approximate(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Calculate income tax, cess and surcharge on a taxable income
pub fn income_tax_for(regime: &Regime, taxable: Decimal) -> IncomeTax {
    // Full rebate, whatever the slabs say
    if taxable <= regime.rebate_limit {
        return IncomeTax::rebated(taxable);
    }

    let slab_tax: Decimal = regime.slabs.iter().map(|s| s.tax_on(taxable)).sum();
    let cess = slab_tax * regime.cess_rate;

    let mut warnings = Vec::new();
    if taxable >= regime.unmodelled_surcharge_threshold {
        log::warn!(
            "Ignoring surcharge for high income: taxable {} >= {}",
            taxable,
            regime.unmodelled_surcharge_threshold
        );
        warnings.push(Warning::SurchargeNotModelled { taxable });
    }
    let surcharge = if taxable >= regime.surcharge_threshold {
        slab_tax * regime.surcharge_rate
    } else {
        Decimal::ZERO
    };

    let total = slab_tax + cess + surcharge;
    log::debug!(
        "Income tax on {}: slabs {}, cess {}, surcharge {}, total {}",
        taxable,
        slab_tax,
        cess,
        surcharge,
        total
    );

    IncomeTax {
        taxable,
        slab_tax,
        cess,
        surcharge,
        total,
        warnings,
    }
}
