use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{GradeSummary, LoanRecord, PortfolioSummary};

/// Group the processed loan table by grade and sum the numeric columns.
///
/// One row per grade present in the input, ordered by grade ascending;
/// absent grades produce no row.
pub fn summarize_by_grade(records: &[LoanRecord]) -> Vec<GradeSummary> {
    let mut groups: BTreeMap<&str, GradeSummary> = BTreeMap::new();

    for record in records {
        let entry = groups
            .entry(record.grade.as_str())
            .or_insert_with(|| GradeSummary {
                grade: record.grade.clone(),
                funded_amount: Decimal::ZERO,
                total_payment: Decimal::ZERO,
                outstanding_principal: Decimal::ZERO,
                recoveries: Decimal::ZERO,
                profit_loss: Decimal::ZERO,
            });

        entry.funded_amount += record.funded_amount;
        entry.total_payment += record.total_payment;
        entry.outstanding_principal += record.outstanding_principal;
        entry.recoveries += record.recoveries;
        entry.profit_loss += record.profit_loss;
    }

    groups.into_values().collect()
}

/// Whole-book totals for the report's summary slide.
///
/// Net return is (total profit/loss ÷ total funded) rounded to four
/// decimal places, then expressed as a percentage; `None` when the book
/// has no funded volume.
pub fn portfolio_summary(grades: &[GradeSummary]) -> PortfolioSummary {
    let total_funded: Decimal = grades.iter().map(|g| g.funded_amount).sum();
    let total_outstanding_principal = grades.iter().map(|g| g.outstanding_principal).sum();
    let total_recoveries = grades.iter().map(|g| g.recoveries).sum();
    let total_profit_loss: Decimal = grades.iter().map(|g| g.profit_loss).sum();

    let net_return_pct = total_profit_loss
        .checked_div(total_funded)
        .map(|ratio| ratio.round_dp(4) * dec!(100));

    PortfolioSummary {
        total_outstanding_principal,
        total_recoveries,
        total_profit_loss,
        net_return_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LoanStatus, Money};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn record(grade: &str, profit_loss: Money) -> LoanRecord {
        LoanRecord {
            funded_amount: dec!(1000),
            total_payment: dec!(0),
            outstanding_principal: dec!(0),
            recoveries: dec!(0),
            grade: grade.into(),
            raw_status: "Current".into(),
            clean_status: LoanStatus::Current,
            profit_loss,
            profit_loss_pct: None,
        }
    }

    #[test]
    fn grades_are_summed_and_ordered_ascending() {
        // Insertion order is B first; output must still be A before B.
        let records = vec![
            record("B", dec!(5)),
            record("A", dec!(10)),
            record("A", dec!(20)),
            record("A", dec!(30)),
        ];

        let summary = summarize_by_grade(&records);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].grade, "A");
        assert_eq!(summary[0].profit_loss, dec!(60));
        assert_eq!(summary[0].funded_amount, dec!(3000));
        assert_eq!(summary[1].grade, "B");
        assert_eq!(summary[1].profit_loss, dec!(5));
    }

    #[test]
    fn absent_grades_produce_no_rows() {
        let summary = summarize_by_grade(&[record("C", dec!(1))]);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].grade, "C");
    }

    #[test]
    fn portfolio_summary_totals_and_net_return() {
        let grades = vec![
            GradeSummary {
                grade: "A".into(),
                funded_amount: dec!(6000),
                total_payment: dec!(6500),
                outstanding_principal: dec!(1200),
                recoveries: dec!(40),
                profit_loss: dec!(500),
            },
            GradeSummary {
                grade: "B".into(),
                funded_amount: dec!(4000),
                total_payment: dec!(3700),
                outstanding_principal: dec!(800),
                recoveries: dec!(60),
                profit_loss: dec!(-300),
            },
        ];

        let summary = portfolio_summary(&grades);

        assert_eq!(summary.total_outstanding_principal, dec!(2000));
        assert_eq!(summary.total_recoveries, dec!(100));
        assert_eq!(summary.total_profit_loss, dec!(200));
        // 200 / 10000 = 0.02 -> 2.00%
        assert_eq!(summary.net_return_pct, Some(dec!(2.00)));
    }

    #[test]
    fn net_return_rounds_the_ratio_to_four_places_first() {
        let grades = vec![GradeSummary {
            grade: "A".into(),
            funded_amount: dec!(30000),
            total_payment: dec!(0),
            outstanding_principal: dec!(0),
            recoveries: dec!(0),
            profit_loss: dec!(1000),
        }];

        let summary = portfolio_summary(&grades);

        // 1000 / 30000 = 0.03333... -> 0.0333 -> 3.33%
        assert_eq!(summary.net_return_pct, Some(dec!(3.33)));
    }

    #[test]
    fn empty_book_yields_the_sentinel() {
        let summary = portfolio_summary(&[]);
        assert_eq!(summary.net_return_pct, None);
        assert_eq!(summary.total_profit_loss, dec!(0));
    }
}
