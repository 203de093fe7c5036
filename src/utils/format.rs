/// Formats a rupee amount with Indian digit grouping: the last three integer
/// digits stay together, every group above them has two digits. Whole
/// amounts drop the fraction, anything else keeps two decimals.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as u64;
    let (rupees, fraction) = (paise / 100, paise % 100);
    let grouped = group_indian(&rupees.to_string());
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, fraction)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    // Walk the head right to left in pairs.
    let mut parts = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        parts.push(&head[start..end]);
        end = start;
    }
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
