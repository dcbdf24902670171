//! Dashboard display formatting

use crate::services::DashboardReport;

/// Format the dashboard report: summary lines plus the unpaid-tenants table
pub fn format_dashboard(report: &DashboardReport, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Dashboard for {}\n", report.year));
    output.push_str(&format!("Total Tenants: {}\n", report.total_tenants));
    output.push_str(&format!(
        "Collected: {} {}\n",
        currency, report.total_collected
    ));
    output.push_str(&format!(
        "Outstanding: {} {}\n",
        currency, report.total_outstanding
    ));
    output.push('\n');

    if report.unpaid.is_empty() {
        output.push_str("No unpaid tenants.\n");
        return output;
    }

    let room_width = report
        .unpaid
        .iter()
        .map(|r| r.room_no.len())
        .max()
        .unwrap_or(7)
        .max("Room No".len());

    let name_width = report
        .unpaid
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max("Name".len());

    let months_width = report
        .unpaid
        .iter()
        .map(|r| r.unpaid_months.len())
        .max()
        .unwrap_or(13)
        .max("Unpaid Months".len());

    output.push_str(&format!(
        "{:<room_width$}  {:<name_width$}  {:<months_width$}  {:>12}\n",
        "Room No", "Name", "Unpaid Months", "Balance Due",
    ));
    output.push_str(&format!(
        "{:-<room_width$}  {:-<name_width$}  {:-<months_width$}  {:->12}\n",
        "", "", "", "",
    ));

    for record in &report.unpaid {
        output.push_str(&format!(
            "{:<room_width$}  {:<name_width$}  {:<months_width$}  {:>12}\n",
            record.room_no,
            record.name,
            record.unpaid_months,
            format!("{} {}", currency, record.balance_due),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::UnpaidRecord;

    #[test]
    fn test_no_unpaid() {
        let report = DashboardReport {
            year: 2025,
            total_tenants: 3,
            total_collected: 84000,
            total_outstanding: 0,
            unpaid: vec![],
        };
        let output = format_dashboard(&report, "Ksh");

        assert!(output.contains("Total Tenants: 3"));
        assert!(output.contains("Collected: Ksh 84000"));
        assert!(output.contains("No unpaid tenants."));
    }

    #[test]
    fn test_unpaid_table() {
        let report = DashboardReport {
            year: 2025,
            total_tenants: 1,
            total_collected: 0,
            total_outstanding: 28000,
            unpaid: vec![UnpaidRecord {
                room_no: "B12".into(),
                name: "Alice Wanjiku".into(),
                unpaid_months: "September, October".into(),
                balance_due: 6000,
            }],
        };
        let output = format_dashboard(&report, "Ksh");

        assert!(output.contains("Outstanding: Ksh 28000"));
        assert!(output.contains("Room No"));
        assert!(output.contains("September, October"));
        assert!(output.contains("Ksh 6000"));
    }
}
