//! Take-home pay for employees and consultants

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::income::{income_tax_for, IncomeTax};
use super::regime::Regime;
use super::warnings::Warning;
use super::{ensure_non_negative, TaxError};

/// How the CTC is paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Employment {
    /// Salaried, with PF withheld and deductions available
    Employee,
    /// Independent, taxed presumptively on gross receipts
    Consultant,
}

#[cfg(test)]
impl Employment {
    pub const ALL: [Employment; 2] = [Employment::Employee, Employment::Consultant];
}

impl std::fmt::Display for Employment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Employment::Employee => write!(f, "employee"),
            Employment::Consultant => write!(f, "consultant"),
        }
    }
}

/// Everything withheld or paid out of an annual CTC
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalTax {
    pub income_tax: IncomeTax,
    pub professional_tax: Decimal,
    /// GST paid out of pocket, consultants only
    pub gst: Decimal,
}

impl TotalTax {
    pub fn total(&self) -> Decimal {
        self.income_tax.total + self.professional_tax + self.gst
    }
}

/// Monthly take-home for a CTC, with the annual breakdown behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TakeHome {
    pub ctc: Decimal,
    pub employment: Employment,
    pub income_tax: IncomeTax,
    pub professional_tax: Decimal,
    pub gst: Decimal,
    pub provident_fund: Decimal,
    pub net_annual: Decimal,
    /// Whole thousands per month
    pub monthly: Decimal,
}

impl TakeHome {
    pub fn warnings(&self) -> &[Warning] {
        &self.income_tax.warnings
    }

    pub fn is_approximate(&self) -> bool {
        self.income_tax.is_approximate()
    }
}

/// Income tax, professional tax and GST due on an annual CTC
pub fn total_tax_for(regime: &Regime, ctc: Decimal, employment: Employment) -> TotalTax {
    let (taxable, gst) = match employment {
        Employment::Employee => (ctc - regime.employee_deduction, Decimal::ZERO),
        Employment::Consultant => {
            // Income tax is charged net of GST
            let gst = ctc * regime.effective_gst_rate();
            ((ctc - gst) * regime.presumptive_rate, gst)
        }
    };

    TotalTax {
        income_tax: income_tax_for(regime, taxable),
        professional_tax: regime.professional_tax,
        gst,
    }
}

/// Annual provident fund contribution. Consultants don't pay PF.
pub fn pf_for(regime: &Regime, ctc: Decimal, employment: Employment) -> Decimal {
    match employment {
        Employment::Employee => ctc.min(regime.pf_wage_ceiling) * regime.pf_rate,
        Employment::Consultant => Decimal::ZERO,
    }
}

/// Monthly take-home pay for an annual CTC
pub fn take_home(
    regime: &Regime,
    ctc: Decimal,
    employment: Employment,
) -> Result<TakeHome, TaxError> {
    ensure_non_negative("CTC", ctc)?;

    let tax = total_tax_for(regime, ctc, employment);
    let provident_fund = pf_for(regime, ctc, employment);
    let net_annual = ctc - tax.total() - provident_fund;
    let monthly = (net_annual / dec!(12)).floor();

    log::debug!(
        "{} on CTC {}: tax {}, PF {}, net {}, monthly {}",
        employment,
        ctc,
        tax.total(),
        provident_fund,
        net_annual,
        monthly
    );

    Ok(TakeHome {
        ctc,
        employment,
        income_tax: tax.income_tax,
        professional_tax: tax.professional_tax,
        gst: tax.gst,
        provident_fund,
        net_annual,
        monthly,
    })
}
