//! Budget display formatting
//!
//! Renders the results of the budget engine. Nothing here recomputes
//! totals; every figure comes from the value passed in.

use std::collections::BTreeMap;

use super::{format_activity_list, separator};
use crate::models::{Activity, ActivityCategory, Money};
use crate::services::{BudgetSummary, LimitStatus};

/// One-line total for a trip
pub fn format_total(destination: &str, total: Money, symbol: &str) -> String {
    format!(
        "Total cost for {}: {}\n",
        destination,
        total.format_with_symbol(symbol)
    )
}

/// Per-category totals; categories without activities are not listed
pub fn format_category_breakdown(
    by_category: &BTreeMap<ActivityCategory, Money>,
    symbol: &str,
) -> String {
    if by_category.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let mut output = String::new();
    for (category, amount) in by_category {
        output.push_str(&format!(
            "  {:<12} {:>12}\n",
            category.label(),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Activities above a threshold
pub fn format_high_cost(activities: &[&Activity], threshold: Money, symbol: &str) -> String {
    if activities.is_empty() {
        return format!(
            "No activities cost more than {}.\n",
            threshold.format_with_symbol(symbol)
        );
    }

    let mut output = format!(
        "Activities costing more than {}:\n\n",
        threshold.format_with_symbol(symbol)
    );
    output.push_str(&format_activity_list(activities, symbol));
    output
}

/// Verdict of a budget check
pub fn format_budget_check(total: Money, status: &LimitStatus, symbol: &str) -> String {
    if status.over_budget {
        format!(
            "OVER BUDGET: {} exceeds the limit of {} by {}\n",
            total.format_with_symbol(symbol),
            status.limit.format_with_symbol(symbol),
            status.remaining.abs().format_with_symbol(symbol)
        )
    } else {
        format!(
            "Within budget: {} of {} ({} remaining)\n",
            total.format_with_symbol(symbol),
            status.limit.format_with_symbol(symbol),
            status.remaining.format_with_symbol(symbol)
        )
    }
}

/// Full budget summary for a trip
pub fn format_budget_summary(destination: &str, summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", destination));
    output.push_str(&format!("{}\n", separator(27)));
    output.push_str(&format!("  Activities: {}\n", summary.activity_count));
    output.push_str(&format!(
        "  Total:      {}\n",
        summary.total.format_with_symbol(symbol)
    ));

    if !summary.by_category.is_empty() {
        output.push_str("\nBy category:\n");
        output.push_str(&format_category_breakdown(&summary.by_category, symbol));
    }

    if let Some(status) = &summary.limit {
        output.push('\n');
        output.push_str(&format!(
            "  Limit:      {}\n",
            status.limit.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  Remaining:  {}\n",
            status.remaining.format_with_symbol(symbol)
        ));
        if status.over_budget {
            output.push_str("  Status:     OVER BUDGET\n");
        } else {
            output.push_str("  Status:     Within budget\n");
        }
    }

    output
}
