// src/services/cost_estimator.rs
// DOCUMENTATION: Mock trip cost estimation
// PURPOSE: Compare estimated food/activity spend against a budget

use crate::models::{BudgetStatus, CostSummary};

/// Average ticket cost per attraction, in USD
pub const TICKET_COST: f64 = 35.0;

/// Average daily food spend, in USD
pub const DAILY_FOOD_COST: f64 = 30.0;

/// USD -> INR conversion applied to the estimated costs
pub const CONVERSION_RATE: f64 = 82.0;

/// Share of the daily budget allotted to activities by /calculate
pub const ACTIVITY_SHARE: f64 = 0.2;

pub struct CostEstimator;

impl CostEstimator {
    /// Estimate trip cost for the given budget.
    ///
    /// Costs are converted with `CONVERSION_RATE`; the budget is taken to be
    /// in the local currency already and is compared as-is.
    /// Returns None unless both budget and days are positive.
    pub fn estimate(budget: f64, days: i64, attraction_count: usize) -> Option<CostSummary> {
        if !(budget > 0.0 && days > 0) {
            return None;
        }

        let food_cost = DAILY_FOOD_COST * days as f64 * CONVERSION_RATE;
        let activity_cost = attraction_count as f64 * TICKET_COST * CONVERSION_RATE;
        let total_cost = food_cost + activity_cost;
        let remaining = budget - total_cost;

        log::debug!(
            "Cost estimate: budget={} days={} food={} activities={} total={} remaining={}",
            budget,
            days,
            food_cost,
            activity_cost,
            total_cost,
            remaining
        );

        let budget_status = if remaining >= 0.0 {
            BudgetStatus::WithinBudget
        } else {
            BudgetStatus::OverBudget
        };

        Some(CostSummary {
            total_food: food_cost,
            total_activity: activity_cost,
            total_trip: total_cost,
            remaining_budget: remaining,
            budget_status,
        })
    }

    /// Daily activity allowance, rounded to two decimals.
    /// `days` must already be known to be positive.
    pub fn daily_activity_allowance(budget: f64, days: i64) -> f64 {
        let share = (budget / days as f64) * ACTIVITY_SHARE;
        (share * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_without_budget_or_days() {
        assert!(CostEstimator::estimate(0.0, 3, 5).is_none());
        assert!(CostEstimator::estimate(-10.0, 3, 5).is_none());
        assert!(CostEstimator::estimate(5000.0, 0, 5).is_none());
        assert!(CostEstimator::estimate(5000.0, -2, 5).is_none());
        assert!(CostEstimator::estimate(f64::NAN, 2, 5).is_none());
    }

    #[test]
    fn test_within_budget() {
        let summary = CostEstimator::estimate(100_000.0, 3, 4).unwrap();

        assert_eq!(summary.total_food, 30.0 * 3.0 * 82.0);
        assert_eq!(summary.total_activity, 4.0 * 35.0 * 82.0);
        assert_eq!(summary.total_trip, summary.total_food + summary.total_activity);
        assert_eq!(summary.remaining_budget, 100_000.0 - summary.total_trip);
        assert_eq!(summary.budget_status, BudgetStatus::WithinBudget);
    }

    #[test]
    fn test_budget_is_not_converted() {
        // 2 days of food alone is 4920 in local currency
        let summary = CostEstimator::estimate(100.0, 2, 0).unwrap();

        assert_eq!(summary.total_food, 4920.0);
        assert_eq!(summary.total_activity, 0.0);
        assert_eq!(summary.remaining_budget, -4820.0);
        assert_eq!(summary.budget_status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_exact_budget_is_within() {
        let summary = CostEstimator::estimate(2460.0, 1, 0).unwrap();
        assert_eq!(summary.remaining_budget, 0.0);
        assert_eq!(summary.budget_status, BudgetStatus::WithinBudget);
    }

    #[test]
    fn test_daily_activity_allowance() {
        assert_eq!(CostEstimator::daily_activity_allowance(1000.0, 5), 40.0);
        assert_eq!(CostEstimator::daily_activity_allowance(100.0, 3), 6.67);
        assert_eq!(CostEstimator::daily_activity_allowance(0.0, 7), 0.0);
    }
}
