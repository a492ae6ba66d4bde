//! Shared domain type definitions.
//!
//! Pure data shapes consumed across the platform: no behavior lives here.
//! Field names serialize exactly as the platform's JSON wire format expects
//! (camelCase, with CouchDB-style `_id`/`_rev` and snake_case timestamps).

pub mod api;
pub mod diet;
pub mod food;
pub mod user;

pub use api::{ApiResponse, ErrorResponse, PaginatedResponse, ValidationError, ValidationErrorResponse};
pub use diet::{CategoryBudget, Diet, DietProgress};
pub use food::{ConsumedFood, FoodCategory, FoodItem, LocalizedName, MealSlot};
pub use user::{User, UserRole, UserWithRelations};
