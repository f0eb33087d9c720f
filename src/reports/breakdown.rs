//! Category breakdown
//!
//! Groups expenses by category and computes each group's share of the whole.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Amount, Category, Expense};

/// One category's slice of the total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    /// Sum of amounts in this category
    pub total: Amount,
    /// `total / grand_total * 100`, full precision
    pub percentage: Decimal,
    /// Number of records in this category
    pub count: usize,
}

impl CategoryShare {
    /// Percentage rounded to one place, e.g. "74.5%"
    pub fn percentage_label(&self) -> String {
        let rounded = self
            .percentage
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.1}%", rounded)
    }
}

/// Per-category totals, largest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    shares: Vec<CategoryShare>,
    grand_total: Amount,
}

impl CategoryBreakdown {
    pub fn shares(&self) -> &[CategoryShare] {
        &self.shares
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryShare> {
        self.shares.iter()
    }

    /// Share of a single category, if it has any records
    pub fn get(&self, category: &Category) -> Option<&CategoryShare> {
        self.shares.iter().find(|s| s.category == *category)
    }

    pub fn grand_total(&self) -> Amount {
        self.grand_total
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Group `expenses` by category
///
/// Categories without records are omitted. A zero grand total yields an
/// empty breakdown.
pub fn category_breakdown(expenses: &[Expense]) -> CategoryBreakdown {
    let mut groups: HashMap<&Category, (Amount, usize)> = HashMap::new();
    for expense in expenses {
        let entry = groups.entry(&expense.category).or_default();
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let grand_total: Amount = groups.values().map(|(total, _)| *total).sum();
    if grand_total.is_zero() {
        return CategoryBreakdown::default();
    }

    let hundred = Decimal::ONE_HUNDRED;
    let mut shares: Vec<CategoryShare> = groups
        .into_iter()
        .map(|(category, (total, count))| CategoryShare {
            category: category.clone(),
            total,
            percentage: total.value() / grand_total.value() * hundred,
            count,
        })
        .collect();

    shares.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });

    CategoryBreakdown {
        shares,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn expense(amount: &str, category: Category) -> Expense {
        Expense::new(
            "x",
            Amount::parse(amount).unwrap(),
            "2024-05-01",
            category,
            "2024-05".parse().unwrap(),
        )
    }

    #[test]
    fn test_empty_ledger_has_empty_breakdown() {
        let breakdown = category_breakdown(&[]);
        assert!(breakdown.is_empty());
        assert!(breakdown.grand_total().is_zero());
    }

    #[test]
    fn test_zero_total_is_guarded() {
        let zeroes = vec![
            expense("0", Category::Food),
            expense("0", Category::Books),
        ];
        assert!(category_breakdown(&zeroes).is_empty());
    }

    #[test]
    fn test_coffee_and_bus() {
        let ledger = vec![
            expense("1.20", Category::Transport),
            expense("3.50", Category::Food),
        ];

        let breakdown = category_breakdown(&ledger);
        assert_eq!(breakdown.len(), 2);

        let food = breakdown.get(&Category::Food).unwrap();
        assert_eq!(food.total.to_string(), "3.50");
        assert_eq!(food.percentage_label(), "74.5%");

        let transport = breakdown.get(&Category::Transport).unwrap();
        assert_eq!(transport.total.to_string(), "1.20");
        assert_eq!(transport.percentage_label(), "25.5%");

        assert_eq!(breakdown.shares()[0].category, Category::Food);
        assert!(breakdown.get(&Category::Books).is_none());
    }

    #[test]
    fn test_groups_are_summed() {
        let ledger = vec![
            expense("2", Category::Food),
            expense("3", Category::Food),
            expense("5", Category::Health),
        ];

        let breakdown = category_breakdown(&ledger);
        let food = breakdown.get(&Category::Food).unwrap();
        assert_eq!(food.count, 2);
        assert_eq!(food.percentage, Decimal::from(50));
        assert_eq!(breakdown.grand_total().to_string(), "10.00");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let ledger = vec![
            expense("1", Category::Food),
            expense("1", Category::Transport),
            expense("1", Category::Books),
            expense("0.07", Category::Unrecognized("Gifts".into())),
        ];

        let sum: Decimal = category_breakdown(&ledger)
            .iter()
            .map(|s| s.percentage)
            .sum();
        let epsilon = Decimal::from_str("0.000001").unwrap();
        assert!((sum - Decimal::ONE_HUNDRED).abs() < epsilon);
    }

    #[test]
    fn test_ties_ordered_by_label() {
        let ledger = vec![
            expense("4", Category::Transport),
            expense("4", Category::Books),
        ];

        let breakdown = category_breakdown(&ledger);
        assert_eq!(breakdown.shares()[0].category, Category::Books);
        assert_eq!(breakdown.shares()[1].category, Category::Transport);
    }
}
