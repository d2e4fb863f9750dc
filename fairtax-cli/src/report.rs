//! Renders an assessment as the user-facing report: a summary of the input
//! followed by exactly one of the three poverty-line branches.

use fairtax_core::{FairTaxAssessment, FairTaxInput, PovertyStanding};
use rust_decimal::Decimal;

const RULE: &str = "--------------------------------------------------";

/// Formats an amount as US currency: `$1,234.56`, `-$1,234.56` for
/// negatives. Rounds to cents, half away from zero.
pub fn format_usd(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Renders the full report for one calculation.
pub fn render(
    input: &FairTaxInput,
    assessment: &FairTaxAssessment,
) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "You live in {},\nmake {} a year,\nand have a family of {}.\n\n",
        input.state.name(),
        format_usd(input.gross_income),
        input.family_size,
    ));

    match assessment.standing() {
        PovertyStanding::Above => out.push_str(&format!(
            "You will pay {} in taxes,\nso you still make {},\nwhich is {} above the poverty line\nfor your state and family size.\n",
            format_usd(assessment.tax_owed),
            format_usd(assessment.disposable_income),
            format_usd(assessment.poverty_line_margin),
        )),
        PovertyStanding::AtLine => {
            out.push_str("You make exactly the poverty line,\nso you will not pay taxes.\n")
        }
        PovertyStanding::Below => out.push_str(&format!(
            "You are {} below the poverty line,\nso you will not pay any taxes.\n",
            format_usd(assessment.poverty_line_margin.abs()),
        )),
    }

    out.push_str(RULE);
    out
}
