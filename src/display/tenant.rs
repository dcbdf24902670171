//! Tenant display formatting

use crate::models::Tenant;

/// Format a list of tenants as a table
pub fn format_tenant_list(tenants: &[Tenant], currency: &str) -> String {
    if tenants.is_empty() {
        return "No tenants found.\n".to_string();
    }

    let room_width = tenants
        .iter()
        .map(|t| t.room_no.len())
        .max()
        .unwrap_or(4)
        .max("Room".len());

    let name_width = tenants
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max("Name".len());

    let phone_width = tenants
        .iter()
        .map(|t| t.phone.len())
        .max()
        .unwrap_or(5)
        .max("Phone".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<room_width$}  {:<name_width$}  {:<phone_width$}  {:>12}  {:>12}\n",
        "Room", "Name", "Phone", "Monthly Fee", "Holiday Fee",
    ));
    output.push_str(&format!(
        "{:-<room_width$}  {:-<name_width$}  {:-<phone_width$}  {:->12}  {:->12}\n",
        "", "", "", "", "",
    ));

    for tenant in tenants {
        output.push_str(&format!(
            "{:<room_width$}  {:<name_width$}  {:<phone_width$}  {:>12}  {:>12}\n",
            tenant.room_no,
            tenant.name,
            tenant.phone,
            format!("{} {}", currency, tenant.monthly_fee),
            format!("{} {}", currency, tenant.holiday_fee),
        ));
    }

    output.push_str(&format!("\n{} tenant(s)\n", tenants.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_tenant_list(&[], "Ksh"), "No tenants found.\n");
    }

    #[test]
    fn test_table_contains_rows() {
        let tenants = vec![
            Tenant::new("A01", "Alice Wanjiku", "0712345678", 3000, 1000),
            Tenant::new("B12", "Brian Otieno", "0733000000", 3500, 1200),
        ];
        let output = format_tenant_list(&tenants, "Ksh");

        assert!(output.contains("Room"));
        assert!(output.contains("Alice Wanjiku"));
        assert!(output.contains("Ksh 3500"));
        assert!(output.contains("2 tenant(s)"));
    }
}
