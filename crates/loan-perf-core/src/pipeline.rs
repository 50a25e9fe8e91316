use crate::profit_loss::derive_profit_loss;
use crate::status::normalize_status;
use crate::types::{LoanRecord, LoanStatus, RawLoanRow};

/// Diagnostic counts from one pipeline run, for operator visibility.
///
/// None of these are errors: rows without a status are dropped (there is
/// nothing to normalize), uncategorized rows are retained and processed
/// normally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub total_rows: usize,
    pub with_status: usize,
    pub missing_status: usize,
    pub uncategorized: usize,
}

/// Run the full transformation: drop status-less rows, normalize the
/// status, derive profit/loss. One pass, each stage feeding the next.
pub fn run_pipeline(rows: Vec<RawLoanRow>) -> (Vec<LoanRecord>, PipelineReport) {
    let mut report = PipelineReport {
        total_rows: rows.len(),
        ..PipelineReport::default()
    };

    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        // Status filter: normalization is never invoked on a missing status.
        let raw_status = match row.raw_status {
            Some(s) => s,
            None => {
                report.missing_status += 1;
                continue;
            }
        };
        report.with_status += 1;

        let clean_status = normalize_status(&raw_status);
        if clean_status == LoanStatus::Uncategorized {
            report.uncategorized += 1;
        }

        let pl = derive_profit_loss(
            clean_status,
            row.funded_amount,
            row.total_payment,
            row.recoveries,
            row.outstanding_principal,
        );

        records.push(LoanRecord {
            funded_amount: row.funded_amount,
            total_payment: row.total_payment,
            outstanding_principal: pl.outstanding_principal,
            recoveries: row.recoveries,
            grade: row.grade,
            raw_status,
            clean_status,
            profit_loss: pl.profit_loss,
            profit_loss_pct: pl.profit_loss_pct,
        });
    }

    (records, report)
}
