//! Read-only queries over a slice of expenses
//!
//! Every function here borrows the ledger and returns new data; none of them
//! mutate their input. Filters preserve the original order.

use std::collections::BTreeSet;

use crate::models::{Expense, Money};

/// Sum of every amount; zero for an empty ledger
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Expenses whose category matches, ignoring case
///
/// Takes any iterator of borrowed expenses, so filters compose on each other's
/// output.
pub fn filter_by_category<'a, I>(expenses: I, category: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let wanted = category.to_lowercase();
    expenses
        .into_iter()
        .filter(|e| e.category_key() == wanted)
        .collect()
}

/// Expenses whose date starts with a `YYYY-MM` prefix
pub fn filter_by_month<'a, I>(expenses: I, year_month: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    filter_by_date_prefix(expenses, year_month)
}

/// Expenses whose date starts with a `YYYY` prefix
pub fn filter_by_year<'a, I>(expenses: I, year: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    filter_by_date_prefix(expenses, year)
}

fn filter_by_date_prefix<'a, I>(expenses: I, prefix: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.date_has_prefix(prefix))
        .collect()
}

/// Distinct categories, lower-cased and sorted ascending
pub fn list_categories(expenses: &[Expense]) -> Vec<String> {
    expenses
        .iter()
        .map(Expense::category_key)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-05", Money::from_cents(1250), "Food"),
            Expense::new("2024-02-10", Money::from_cents(3000), "Food"),
            Expense::new("2024-02-20", Money::from_cents(500), "Transport"),
        ]
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&scenario()), Money::from_cents(4750));
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_total_with_negative_amount() {
        let mut expenses = scenario();
        expenses.push(Expense::new("2024-03-01", Money::from_cents(-750), "Refund"));
        assert_eq!(total(&expenses), Money::from_cents(4000));
    }

    #[test]
    fn test_total_of_huge_amounts_saturates() {
        let expenses = vec![
            Expense::new("2024-01-01", Money::from_cents(i64::MAX), "Big"),
            Expense::new("2024-01-02", Money::from_cents(i64::MAX), "Big"),
        ];
        assert_eq!(total(&expenses), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_filters_compose() {
        let expenses = scenario();
        let food = filter_by_category(&expenses, "food");
        let food_in_feb = filter_by_month(food, "2024-02");
        assert_eq!(food_in_feb, vec![&expenses[1]]);

        let transport_2023 = filter_by_year(filter_by_category(&expenses, "transport"), "2023");
        assert!(transport_2023.is_empty());
    }

    #[test]
    fn test_filter_by_month() {
        let expenses = scenario();
        let feb = filter_by_month(&expenses, "2024-02");
        assert_eq!(feb, vec![&expenses[1], &expenses[2]]);

        assert!(filter_by_month(&expenses, "2024-03").is_empty());
    }

    #[test]
    fn test_filter_by_year() {
        let mut expenses = scenario();
        expenses.push(Expense::new("2023-12-31", Money::from_cents(100), "Food"));

        let in_2024 = filter_by_year(&expenses, "2024");
        assert_eq!(in_2024.len(), 3);
        assert!(in_2024.iter().all(|e| e.date.starts_with("2024")));

        assert_eq!(filter_by_year(&expenses, "2023"), vec![&expenses[3]]);
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let expenses = scenario();
        let food = filter_by_category(&expenses, "food");
        assert_eq!(food, vec![&expenses[0], &expenses[1]]);

        let transport = filter_by_category(&expenses, "TRANSPORT");
        assert_eq!(transport, vec![&expenses[2]]);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let expenses = vec![
            Expense::new("2024-05-01", Money::from_cents(100), "food"),
            Expense::new("2024-01-01", Money::from_cents(200), "Rent"),
            Expense::new("2024-03-01", Money::from_cents(300), "FOOD"),
        ];
        let dates: Vec<_> = filter_by_category(&expenses, "Food")
            .into_iter()
            .map(|e| e.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2024-05-01", "2024-03-01"]);
    }

    #[test]
    fn test_filter_by_unknown_category_is_empty() {
        assert!(filter_by_category(&scenario(), "Travel").is_empty());
        assert!(filter_by_category(&Vec::<Expense>::new(), "Food").is_empty());
    }

    #[test]
    fn test_list_categories() {
        assert_eq!(list_categories(&scenario()), vec!["food", "transport"]);
        assert!(list_categories(&[]).is_empty());
    }

    #[test]
    fn test_list_categories_dedupes_case() {
        let expenses = vec![
            Expense::new("2024-01-01", Money::from_cents(100), "Zoo"),
            Expense::new("2024-01-02", Money::from_cents(100), "bills"),
            Expense::new("2024-01-03", Money::from_cents(100), "Bills"),
            Expense::new("2024-01-04", Money::from_cents(100), "ZOO"),
        ];
        assert_eq!(list_categories(&expenses), vec!["bills", "zoo"]);
    }
}
