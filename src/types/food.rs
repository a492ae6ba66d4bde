use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodCategory {
    Grains,
    Proteins,
    Fats,
    SimpleSugars,
    Fruits,
    Vegetables,
    Dairy,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Grains,
        FoodCategory::Proteins,
        FoodCategory::Fats,
        FoodCategory::SimpleSugars,
        FoodCategory::Fruits,
        FoodCategory::Vegetables,
        FoodCategory::Dairy,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Bilingual display name (English / Farsi).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub en: String,
    pub fa: String,
}

/// A catalog food entry.
///
/// `unit_reference_value` and `calories_per_reference` are non-negative by
/// convention; the store persisting the item is responsible for rejecting
/// anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub name: LocalizedName,
    pub category1: FoodCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category2: Option<FoodCategory>,
    pub unit: String,
    pub unit_reference_value: f64,
    pub calories_per_reference: f64,
    #[serde(rename = "created_at", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "updated_at", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A logged meal entry. References a [`FoodItem`] by id only; existence of
/// the referenced item is a store-level concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedFood {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub meal: MealSlot,
    pub food_item_id: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_file_ids: Option<Vec<String>>,
    #[serde(rename = "created_at", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "updated_at", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
