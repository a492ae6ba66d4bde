//! Home/dashboard page.

use std::collections::HashMap;

use time::macros::datetime;

use crate::types::diet::DietProgress;
use crate::types::food::FoodCategory;
use crate::ui::components::card;
use crate::ui::Theme;

/// Fixed snapshot shown until the dashboard is wired to live data.
fn mock_progress() -> DietProgress {
    DietProgress {
        date: datetime!(2024-03-02 00:00 UTC),
        consumed_calories: 1240.0,
        category_consumption: HashMap::from([
            (FoodCategory::Grains, 420.0),
            (FoodCategory::Proteins, 510.0),
            (FoodCategory::Vegetables, 180.0),
        ]),
        remaining_calories: 560.0,
        category_remaining: HashMap::from([
            (FoodCategory::Grains, 80.0),
            (FoodCategory::Proteins, 140.0),
            (FoodCategory::Vegetables, 220.0),
        ]),
    }
}

pub fn render(theme: &Theme) -> String {
    let progress = mock_progress();

    let cards = [
        card(theme, "Clients", "Linked client accounts", "<p>18</p>", None),
        card(theme, "Active Diets", "Plans currently running", "<p>11</p>", None),
        card(
            theme,
            "Calories Today",
            "Consumed / remaining",
            &format!(
                "<p>{:.0} kcal consumed, {:.0} kcal remaining</p>",
                progress.consumed_calories, progress.remaining_calories
            ),
            None,
        ),
    ];

    format!(
        concat!(
            r#"<h1 style="color:{heading}">Welcome to Mansouri Nutritionist Platform</h1>"#,
            r#"<p style="color:{text}">Professional platform for nutritionists to manage client diets and track progress.</p>"#,
            r#"<div class="card-grid">{cards}</div>"#
        ),
        heading = theme.dark_outline_green,
        text = theme.dark_gray,
        cards = cards.join(""),
    )
}
