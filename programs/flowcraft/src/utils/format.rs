/// Renders base units as a decimal string with exactly `decimals` fraction digits.
pub fn format_token_amount(amount: u64, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let d = decimals as usize;
    let digits = format!("{:0>width$}", amount, width = d + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - d);
    format!("{int_part}.{frac_part}")
}
