use rust_decimal::Decimal;

use crate::types::{LoanStatus, Money, Rate};

/// Derived profit/loss columns for one loan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitLoss {
    /// Outstanding principal after the default-zeroing rule.
    pub outstanding_principal: Money,
    pub profit_loss: Money,
    /// `None` when funded_amount is zero.
    pub profit_loss_pct: Option<Rate>,
}

/// Derive profit/loss for a single loan.
///
/// The zeroing rule runs first: a defaulted loan's quoted outstanding
/// principal is not counted as a loss component. Reordering these two
/// steps would change every defaulted row's result.
pub fn derive_profit_loss(
    status: LoanStatus,
    funded_amount: Money,
    total_payment: Money,
    recoveries: Money,
    outstanding_principal: Money,
) -> ProfitLoss {
    let outstanding_principal = if status == LoanStatus::Defaulted {
        Decimal::ZERO
    } else {
        outstanding_principal
    };

    let profit_loss = total_payment + recoveries - funded_amount - outstanding_principal;
    let profit_loss_pct = profit_loss.checked_div(funded_amount);

    ProfitLoss {
        outstanding_principal,
        profit_loss,
        profit_loss_pct,
    }
}
