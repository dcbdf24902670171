//! Payment display formatting

use crate::models::PaymentEntry;

/// Format a tenant's payment history as a table
pub fn format_payment_list(entries: &[PaymentEntry], currency: &str) -> String {
    if entries.is_empty() {
        return "No payments found.\n".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.tenant_name.len())
        .max()
        .unwrap_or(6)
        .max("Tenant".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<9}  {:>4}  {:>12}\n",
        "Tenant", "Month", "Year", "Amount Paid",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<9}  {:->4}  {:->12}\n",
        "", "", "", "",
    ));

    let mut total = 0i64;
    for entry in entries {
        total += entry.amount;
        output.push_str(&format!(
            "{:<name_width$}  {:<9}  {:>4}  {:>12}\n",
            entry.tenant_name,
            entry.month.name(),
            entry.year,
            format!("{} {}", currency, entry.amount),
        ));
    }

    output.push_str(&format!(
        "\n{} payment(s), {} {} total\n",
        entries.len(),
        currency,
        total
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_payment_list(&[], "Ksh"), "No payments found.\n");
    }

    #[test]
    fn test_table_totals() {
        let entries = vec![
            PaymentEntry {
                tenant_name: "Alice Wanjiku".into(),
                month: Month::September,
                year: 2025,
                amount: 3000,
            },
            PaymentEntry {
                tenant_name: "Alice Wanjiku".into(),
                month: Month::May,
                year: 2025,
                amount: 1000,
            },
        ];
        let output = format_payment_list(&entries, "Ksh");

        assert!(output.contains("September"));
        assert!(output.contains("2 payment(s), Ksh 4000 total"));
    }
}
