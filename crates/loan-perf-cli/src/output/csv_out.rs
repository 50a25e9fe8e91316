use std::path::Path;

use loan_perf_core::{GradeSummary, LoanRecord};

/// Write the full per-loan table as CSV: header row, no index column,
/// columns in record-field order.
pub fn write_loans(path: &Path, records: &[LoanRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the per-grade summary table as CSV.
pub fn write_grade_summary(
    path: &Path,
    grades: &[GradeSummary],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for grade in grades {
        wtr.serialize(grade)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_perf_core::LoanStatus;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn sample_records() -> Vec<LoanRecord> {
        vec![
            LoanRecord {
                funded_amount: dec!(1000),
                total_payment: dec!(1100.50),
                outstanding_principal: dec!(0),
                recoveries: dec!(0),
                grade: "A".into(),
                raw_status: "Fully Paid".into(),
                clean_status: LoanStatus::Paid,
                profit_loss: dec!(100.50),
                profit_loss_pct: Some(dec!(0.1005)),
            },
            LoanRecord {
                funded_amount: dec!(0),
                total_payment: dec!(25),
                outstanding_principal: dec!(0),
                recoveries: dec!(0),
                grade: "B".into(),
                raw_status: "Current".into(),
                clean_status: LoanStatus::Current,
                profit_loss: dec!(25),
                profit_loss_pct: None,
            },
        ]
    }

    #[test]
    fn round_trip_reproduces_every_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loans_all.csv");
        let records = sample_records();

        write_loans(&path, &records).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let read_back: Vec<LoanRecord> = rdr
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(read_back.len(), 2);
        assert_eq!(read_back[0].funded_amount, records[0].funded_amount);
        assert_eq!(read_back[0].profit_loss, records[0].profit_loss);
        assert_eq!(read_back[0].profit_loss_pct, records[0].profit_loss_pct);
        assert_eq!(read_back[0].clean_status, LoanStatus::Paid);
        assert_eq!(read_back[0].grade, "A");
        // The zero-funded row keeps its sentinel through the round trip.
        assert_eq!(read_back[1].profit_loss_pct, None);
    }

    #[test]
    fn header_row_matches_field_order_with_no_index_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loans_all.csv");
        write_loans(&path, &sample_records()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "funded_amount,total_payment,outstanding_principal,recoveries,\
             grade,raw_status,clean_status,profit_loss,profit_loss_pct"
        );
    }

    #[test]
    fn grade_summary_writes_one_row_per_grade() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loans_by_grade.csv");
        let grades = vec![GradeSummary {
            grade: "A".into(),
            funded_amount: dec!(3000),
            total_payment: dec!(2900),
            outstanding_principal: dec!(400),
            recoveries: dec!(10),
            profit_loss: dec!(-490),
        }];

        write_grade_summary(&path, &grades).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "grade,funded_amount,total_payment,outstanding_principal,recoveries,profit_loss"
        );
        assert_eq!(lines.next().unwrap(), "A,3000,2900,400,10,-490");
        assert_eq!(lines.next(), None);
    }
}
