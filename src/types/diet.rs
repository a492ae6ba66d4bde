use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::food::FoodCategory;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub category: FoodCategory,
    pub daily_budget: f64,
}

/// A client's nutrition plan.
///
/// `end_date > start_date` and at-most-one-active-diet-per-client are
/// store-level invariants; nothing here enforces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    pub daily_calories_budget: f64,
    pub is_active: bool,
    #[serde(rename = "created_at", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "updated_at", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub budgets: Vec<CategoryBudget>,
}

/// A derived daily snapshot of diet adherence. Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietProgress {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub consumed_calories: f64,
    pub category_consumption: HashMap<FoodCategory, f64>,
    pub remaining_calories: f64,
    pub category_remaining: HashMap<FoodCategory, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn diet_wire_shape() {
        let diet = Diet {
            id: "diet-1".into(),
            doc_type: "diet".into(),
            start_date: datetime!(2024-03-01 00:00 UTC),
            end_date: datetime!(2024-06-01 00:00 UTC),
            daily_calories_budget: 1800.0,
            is_active: true,
            created_at: datetime!(2024-03-01 00:00 UTC),
            updated_at: datetime!(2024-03-01 00:00 UTC),
            budgets: vec![CategoryBudget {
                category: FoodCategory::Proteins,
                daily_budget: 400.0,
            }],
        };

        let json = serde_json::to_value(&diet).unwrap();
        assert_eq!(json["_id"], "diet-1");
        assert_eq!(json["dailyCaloriesBudget"], 1800.0);
        assert_eq!(json["isActive"], true);
        assert_eq!(json["budgets"][0]["category"], "PROTEINS");
        assert_eq!(json["budgets"][0]["dailyBudget"], 400.0);

        let back: Diet = serde_json::from_value(json).unwrap();
        assert_eq!(back, diet);
    }

    #[test]
    fn progress_maps_key_by_category_name() {
        let progress = DietProgress {
            date: datetime!(2024-03-02 00:00 UTC),
            consumed_calories: 950.0,
            category_consumption: HashMap::from([(FoodCategory::Grains, 300.0)]),
            remaining_calories: 850.0,
            category_remaining: HashMap::from([(FoodCategory::Grains, 150.0)]),
        };

        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["categoryConsumption"]["GRAINS"], 300.0);
        assert_eq!(json["categoryRemaining"]["GRAINS"], 150.0);

        let back: DietProgress = serde_json::from_value(json).unwrap();
        assert_eq!(back, progress);
    }
}
