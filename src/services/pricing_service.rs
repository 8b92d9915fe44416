use crate::models::plan::TripPlan;

pub struct PricingService;

impl PricingService {
    /// Transport and lodging for the whole stay: bus + hotel per night × days + taxi.
    /// Missing costs count as zero.
    pub fn calculate_trip_cost(plan: &TripPlan, days: i64) -> f64 {
        let bus = plan.bus_cost.unwrap_or(0.0);
        let hotel = plan.hotel_cost.unwrap_or(0.0);
        let taxi = plan.taxi_cost.unwrap_or(0.0);
        bus + hotel * days as f64 + taxi
    }

    /// Display cost per day. `None` when the plan carries no bus, hotel or taxi cost,
    /// or the day count is not positive.
    pub fn calculate_cost_per_day(plan: &TripPlan, days: i64) -> Option<f64> {
        if days <= 0 {
            return None;
        }
        if plan.bus_cost.is_none() && plan.hotel_cost.is_none() && plan.taxi_cost.is_none() {
            return None;
        }
        Some(Self::calculate_trip_cost(plan, days) / days as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(bus: Option<f64>, hotel: Option<f64>, taxi: Option<f64>) -> TripPlan {
        TripPlan {
            bus_cost: bus,
            hotel_cost: hotel,
            taxi_cost: taxi,
            ..Default::default()
        }
    }

    #[test]
    fn test_cost_per_day_calculation() {
        // 85 + 180 * 7 + 120 = 1465 over 7 days
        let plan = costs(Some(85.0), Some(180.0), Some(120.0));
        let per_day = PricingService::calculate_cost_per_day(&plan, 7).unwrap();
        assert!((per_day - 1465.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_costs_count_as_zero() {
        let plan = costs(None, Some(100.0), None);
        assert_eq!(PricingService::calculate_cost_per_day(&plan, 4), Some(100.0));

        let plan = costs(Some(30.0), None, Some(10.0));
        assert_eq!(PricingService::calculate_cost_per_day(&plan, 2), Some(20.0));
    }

    #[test]
    fn test_no_costs_no_figure() {
        assert_eq!(PricingService::calculate_cost_per_day(&TripPlan::default(), 3), None);
        let plan = costs(Some(1.0), None, None);
        assert_eq!(PricingService::calculate_cost_per_day(&plan, 0), None);
    }
}
