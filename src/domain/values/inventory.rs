use serde::{Deserialize, Serialize};

/// Point-in-time stock position for a SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub on_hand_units: i64,
    pub days_of_supply: i64,
    pub avg_daily_demand: f64,
}

impl InventorySnapshot {
    /// Sell-through velocity in units/day of supply.
    ///
    /// `days_of_supply == 0` with stock on hand means demand has outrun the
    /// position entirely and velocity is treated as infinite. An empty
    /// position has zero velocity.
    pub fn velocity(&self) -> f64 {
        if self.days_of_supply > 0 {
            self.on_hand_units as f64 / self.days_of_supply as f64
        } else if self.on_hand_units > 0 {
            f64::INFINITY
        } else {
            0.0
        }
    }
}

/// Unit economics for a SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricing {
    pub unit_cost: f64,
    pub retail_price: f64,
}

impl Pricing {
    pub fn margin(&self) -> f64 {
        if self.retail_price > 0.0 {
            (self.retail_price - self.unit_cost) / self.retail_price
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity() {
        let inv = InventorySnapshot {
            on_hand_units: 960,
            days_of_supply: 18,
            avg_daily_demand: 53.3,
        };
        assert!((inv.velocity() - 53.333).abs() < 0.01);
    }

    #[test]
    fn test_velocity_zero_days_with_stock_is_infinite() {
        let inv = InventorySnapshot {
            on_hand_units: 100,
            days_of_supply: 0,
            avg_daily_demand: 50.0,
        };
        assert!(inv.velocity().is_infinite());
    }

    #[test]
    fn test_velocity_empty_position_is_zero() {
        let inv = InventorySnapshot {
            on_hand_units: 0,
            days_of_supply: 0,
            avg_daily_demand: 0.0,
        };
        assert_eq!(inv.velocity(), 0.0);
    }
}
