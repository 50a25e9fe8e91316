use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%) unless a field says otherwise.
pub type Rate = Decimal;

/// One row of the loan table as it comes out of the data source, before
/// any processing. A missing `loan_status` is represented as `None` and
/// makes the row unusable (there is nothing to normalize).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLoanRow {
    pub funded_amount: Money,
    pub total_payment: Money,
    pub outstanding_principal: Money,
    pub recoveries: Money,
    pub grade: String,
    pub raw_status: Option<String>,
}

/// Canonical loan status categories.
///
/// The set is fixed: every processed record carries exactly one of these.
/// `Late31To120` is part of the set but is never produced by the
/// normalizer (see `status::STATUS_RULES`); `Uncategorized` is a
/// defensive fallback that is counted and reported, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    #[serde(rename = "charged_off")]
    ChargedOff,
    #[serde(rename = "default")]
    Defaulted,
    #[serde(rename = "paid")]
    Paid,
    #[serde(rename = "grace_period")]
    GracePeriod,
    #[serde(rename = "current")]
    Current,
    #[serde(rename = "late_16_30")]
    Late16To30,
    #[serde(rename = "late_31_120")]
    Late31To120,
    #[serde(rename = "uncategorized")]
    Uncategorized,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ChargedOff => "charged_off",
            Self::Defaulted => "default",
            Self::Paid => "paid",
            Self::GracePeriod => "grace_period",
            Self::Current => "current",
            Self::Late16To30 => "late_16_30",
            Self::Late31To120 => "late_31_120",
            Self::Uncategorized => "uncategorized",
        };
        write!(f, "{}", s)
    }
}

/// A fully processed loan record. Field order is the flat-file column
/// order: the CSV exporter serializes records as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub funded_amount: Money,
    pub total_payment: Money,
    /// Already zeroed for defaulted loans.
    pub outstanding_principal: Money,
    pub recoveries: Money,
    pub grade: String,
    pub raw_status: String,
    pub clean_status: LoanStatus,
    /// total_payment + recoveries - funded_amount - outstanding_principal.
    /// Positive = net gain to the lender.
    pub profit_loss: Money,
    /// profit_loss / funded_amount; `None` when funded_amount is zero.
    pub profit_loss_pct: Option<Rate>,
}

/// Per-grade sums over the processed loan table. One row per grade
/// present in the input, ordered by grade ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub grade: String,
    pub funded_amount: Money,
    pub total_payment: Money,
    pub outstanding_principal: Money,
    pub recoveries: Money,
    pub profit_loss: Money,
}

/// Whole-book totals backing the report's summary slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_outstanding_principal: Money,
    pub total_recoveries: Money,
    pub total_profit_loss: Money,
    /// (total profit/loss ÷ total funded) rounded to 4 dp, then × 100.
    /// `None` when the book has zero funded volume.
    pub net_return_pct: Option<Rate>,
}
