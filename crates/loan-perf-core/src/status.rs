use crate::types::LoanStatus;

/// Ordered keyword table for status normalization. First match wins, so
/// the order here is load-bearing: "Charged Off - Paid" must land in
/// ChargedOff, not Paid.
///
/// The upstream tool had a second "late" rule for the 31-120 day bucket,
/// but a buggy compound membership test made it unreachable: every "late"
/// status fell into the 16-30 bucket. We keep that observable behavior as
/// a single-keyword rule; Late31To120 stays in the category set but is
/// never produced here.
pub const STATUS_RULES: &[(&str, LoanStatus)] = &[
    ("charged", LoanStatus::ChargedOff),
    ("default", LoanStatus::Defaulted),
    ("paid", LoanStatus::Paid),
    ("grace", LoanStatus::GracePeriod),
    ("current", LoanStatus::Current),
    ("issued", LoanStatus::Current),
    ("late", LoanStatus::Late16To30),
];

/// Map one raw status string onto its canonical category.
///
/// Matching is case-insensitive on the trimmed input. Anything that hits
/// no rule is `Uncategorized` — a diagnostic outcome, not an error.
pub fn normalize_status(raw: &str) -> LoanStatus {
    let needle = raw.trim().to_lowercase();

    for (keyword, status) in STATUS_RULES {
        if needle.contains(keyword) {
            return *status;
        }
    }

    LoanStatus::Uncategorized
}
