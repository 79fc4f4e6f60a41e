use serde::Serialize;

use crate::widgets::TicketDefaults;

use super::coerce;

/// The eight editable inputs of the ticket estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketField {
    TicketPrice,
    VenueCapacity,
    SellThroughRate,
    MerchSpendPerGuest,
    VenueFeePercent,
    VenueCostFixed,
    MarketingCost,
    CrewCost,
}

/// Slider bounds for fields that have one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TicketField {
    pub const ALL: [TicketField; 8] = [
        TicketField::TicketPrice,
        TicketField::VenueCapacity,
        TicketField::SellThroughRate,
        TicketField::MerchSpendPerGuest,
        TicketField::VenueFeePercent,
        TicketField::VenueCostFixed,
        TicketField::MarketingCost,
        TicketField::CrewCost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TicketField::TicketPrice => "Ticket Price",
            TicketField::VenueCapacity => "Venue Capacity",
            TicketField::SellThroughRate => "Sell-Through Rate",
            TicketField::MerchSpendPerGuest => "Merch Spend per Guest",
            TicketField::VenueFeePercent => "Venue's Cut of Tickets",
            TicketField::VenueCostFixed => "Venue Cost (Fixed Fee)",
            TicketField::MarketingCost => "Marketing & Promotion",
            TicketField::CrewCost => "Crew & Staff",
        }
    }

    /// `%` for rates, `$` for per-unit money, `None` otherwise.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            TicketField::TicketPrice | TicketField::MerchSpendPerGuest => Some("$"),
            TicketField::SellThroughRate | TicketField::VenueFeePercent => Some("%"),
            _ => None,
        }
    }

    /// Range and step of the field's slider. The flat costs are typed in
    /// only and have none.
    pub fn slider(self) -> Option<Slider> {
        let (max, step) = match self {
            TicketField::TicketPrice => (200.0, 1.0),
            TicketField::VenueCapacity => (5000.0, 10.0),
            TicketField::SellThroughRate
            | TicketField::MerchSpendPerGuest
            | TicketField::VenueFeePercent => (100.0, 1.0),
            TicketField::VenueCostFixed | TicketField::MarketingCost | TicketField::CrewCost => {
                return None;
            }
        };
        Some(Slider {
            min: 0.0,
            max,
            step,
        })
    }
}

/// Figures derived from the current estimator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketProjection {
    pub tickets_sold: f64,
    pub gross_ticket_revenue: f64,
    pub gross_merch_revenue: f64,
    pub total_gross_revenue: f64,
    pub venue_cut_cost: f64,
    pub total_costs: f64,
    pub net_profit: f64,
}

/// Editable state of one rendered ticket estimator.
///
/// Starts from the payload defaults; edits never write back to them.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketEstimator {
    defaults: TicketDefaults,
    fields: TicketDefaults,
}

impl TicketEstimator {
    pub fn new(defaults: &TicketDefaults) -> Self {
        Self {
            defaults: *defaults,
            fields: *defaults,
        }
    }

    pub fn defaults(&self) -> &TicketDefaults {
        &self.defaults
    }

    pub fn get(&self, field: TicketField) -> f64 {
        let f = &self.fields;
        match field {
            TicketField::TicketPrice => f.ticket_price,
            TicketField::VenueCapacity => f.venue_capacity,
            TicketField::SellThroughRate => f.sell_through_rate,
            TicketField::MerchSpendPerGuest => f.merch_spend_per_guest,
            TicketField::VenueFeePercent => f.venue_fee_percent,
            TicketField::VenueCostFixed => f.venue_cost_fixed,
            TicketField::MarketingCost => f.marketing_cost,
            TicketField::CrewCost => f.crew_cost,
        }
    }

    /// Sets a field from raw input; input without a leading number is 0.
    pub fn set(&mut self, field: TicketField, input: &str) {
        self.set_value(field, coerce::leading_float(input));
    }

    pub fn set_value(&mut self, field: TicketField, value: f64) {
        let f = &mut self.fields;
        let slot = match field {
            TicketField::TicketPrice => &mut f.ticket_price,
            TicketField::VenueCapacity => &mut f.venue_capacity,
            TicketField::SellThroughRate => &mut f.sell_through_rate,
            TicketField::MerchSpendPerGuest => &mut f.merch_spend_per_guest,
            TicketField::VenueFeePercent => &mut f.venue_fee_percent,
            TicketField::VenueCostFixed => &mut f.venue_cost_fixed,
            TicketField::MarketingCost => &mut f.marketing_cost,
            TicketField::CrewCost => &mut f.crew_cost,
        };
        *slot = if value.is_finite() { value } else { 0.0 };
    }

    /// Moves a slider field by `steps` steps, clamped to its range. Fields
    /// without a slider are left alone.
    pub fn nudge(&mut self, field: TicketField, steps: f64) {
        if let Some(slider) = field.slider() {
            let value = (self.get(field) + steps * slider.step).clamp(slider.min, slider.max);
            self.set_value(field, value);
        }
    }

    pub fn reset(&mut self) {
        self.fields = self.defaults;
    }

    /// Recomputes every derived figure from the current inputs. Only tickets
    /// sold is rounded (down); everything else is exact arithmetic.
    pub fn projection(&self) -> TicketProjection {
        let f = &self.fields;
        let tickets_sold = (f.venue_capacity * f.sell_through_rate / 100.0).floor();
        let gross_ticket_revenue = tickets_sold * f.ticket_price;
        let gross_merch_revenue = tickets_sold * f.merch_spend_per_guest;
        let total_gross_revenue = gross_ticket_revenue + gross_merch_revenue;
        let venue_cut_cost = gross_ticket_revenue * f.venue_fee_percent / 100.0;
        let total_costs = venue_cut_cost + f.venue_cost_fixed + f.marketing_cost + f.crew_cost;

        TicketProjection {
            tickets_sold,
            gross_ticket_revenue,
            gross_merch_revenue,
            total_gross_revenue,
            venue_cut_cost,
            total_costs,
            net_profit: total_gross_revenue - total_costs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn defaults() -> TicketDefaults {
        TicketDefaults {
            ticket_price: 20.0,
            venue_capacity: 200.0,
            sell_through_rate: 75.0,
            merch_spend_per_guest: 10.0,
            venue_fee_percent: 15.0,
            venue_cost_fixed: 500.0,
            marketing_cost: 200.0,
            crew_cost: 300.0,
        }
    }

    #[test]
    fn projection_from_defaults() {
        assert_eq!(
            TicketEstimator::new(&defaults()).projection(),
            TicketProjection {
                tickets_sold: 150.0,
                gross_ticket_revenue: 3000.0,
                gross_merch_revenue: 1500.0,
                total_gross_revenue: 4500.0,
                venue_cut_cost: 450.0,
                total_costs: 1450.0,
                net_profit: 3050.0,
            }
        );
    }

    #[test]
    fn tickets_sold_rounds_down() {
        let mut est = TicketEstimator::new(&defaults());
        est.set(TicketField::VenueCapacity, "199");
        // 199 * 0.75 = 149.25
        assert_eq!(est.projection().tickets_sold, 149.0);
    }

    #[test]
    fn edits_leave_defaults_untouched() {
        let mut est = TicketEstimator::new(&defaults());
        est.set(TicketField::TicketPrice, "25.5");
        assert_eq!(est.get(TicketField::TicketPrice), 25.5);
        assert_eq!(est.defaults(), &defaults());

        est.reset();
        assert_eq!(est.get(TicketField::TicketPrice), 20.0);
    }

    #[rstest]
    #[case("")]
    #[case("free")]
    #[case("-")]
    fn non_numeric_input_is_zero(#[case] input: &str) {
        let mut est = TicketEstimator::new(&defaults());
        est.set(TicketField::CrewCost, input);
        assert_eq!(est.get(TicketField::CrewCost), 0.0);
        assert_eq!(est.projection().total_costs, 1150.0);
    }

    #[test]
    fn losing_show_has_negative_profit() {
        let mut est = TicketEstimator::new(&defaults());
        est.set(TicketField::SellThroughRate, "10");
        let p = est.projection();
        assert_eq!(p.tickets_sold, 20.0);
        assert_eq!(p.net_profit, 600.0 - (60.0 + 1000.0));
    }

    #[test]
    fn every_field_round_trips_through_set() {
        let mut est = TicketEstimator::new(&TicketDefaults::default());
        for (i, field) in TicketField::ALL.into_iter().enumerate() {
            est.set(field, &format!("{}", i + 1));
        }
        for (i, field) in TicketField::ALL.into_iter().enumerate() {
            assert_eq!(est.get(field), (i + 1) as f64);
        }
    }

    #[test]
    fn nudge_clamps_to_slider_range() {
        let mut est = TicketEstimator::new(&defaults());
        est.nudge(TicketField::SellThroughRate, 40.0);
        assert_eq!(est.get(TicketField::SellThroughRate), 100.0);
        est.nudge(TicketField::VenueCapacity, -3.0);
        assert_eq!(est.get(TicketField::VenueCapacity), 170.0);
        est.nudge(TicketField::CrewCost, 5.0);
        assert_eq!(est.get(TicketField::CrewCost), 300.0);
    }
}
