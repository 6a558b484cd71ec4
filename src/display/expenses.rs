//! Expense display formatting
//!
//! Formats the ledger for terminal output with aligned columns and amounts
//! rendered to two decimal places.

/// Format a user's expense list as an aligned table
pub fn format_expense_list(username: &str, entries: &[(String, f64)]) -> String {
    if entries.is_empty() {
        return "No expenses to display.".to_string();
    }

    let category_width = entries
        .iter()
        .map(|(c, _)| c.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("Expenses for {}:\n", username));
    output.push_str(&format!(
        "{:<category_width$}  {:>12}\n",
        "Category",
        "Amount",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<category_width$}  {:->12}\n",
        "",
        "",
        category_width = category_width,
    ));

    for (category, amount) in entries {
        output.push_str(&format!(
            "{:<category_width$}  {:>12.2}\n",
            category,
            amount,
            category_width = category_width,
        ));
    }

    output
}
