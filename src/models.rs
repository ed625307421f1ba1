use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A prepared dish, as accepted and returned by the API and persisted by
/// every backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Dish {
    /// Assigned by the server on creation, never client-supplied.
    pub id: Uuid,
    pub name: String,
    /// Ordered preparation steps.
    pub recipe: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub nutrition: Nutrition,
    pub meal_type: MealType,
    /// Minutes.
    pub cooking_time: i32,
    pub servings: i32,
    /// Free-text labels. Stored natively by the document backend; the
    /// relational backend drops these on round-trip (see `repo::postgres`).
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One ingredient line. Names are not unique within a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
}

/// Nutrition facts. No consistency between the macros and calories is
/// enforced anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// The six recognized meal types, serialized in lowercase wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Brunch,
    Lunch,
    Dinner,
    Supper,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Brunch => "brunch",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Supper => "supper",
            MealType::Snack => "snack",
        }
    }

    /// Parses the lowercase wire form. Anything outside the six known types
    /// is rejected, including case variants.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(MealType::Breakfast),
            "brunch" => Some(MealType::Brunch),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "supper" => Some(MealType::Supper),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meal_type_wire_form_round_trips() {
        for meal_type in [
            MealType::Breakfast,
            MealType::Brunch,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Supper,
            MealType::Snack,
        ] {
            assert_eq!(MealType::parse(meal_type.as_str()), Some(meal_type));
            let encoded = serde_json::to_value(meal_type).unwrap();
            assert_eq!(encoded, json!(meal_type.as_str()));
        }
    }

    #[test]
    fn meal_type_rejects_unknown_values() {
        assert_eq!(MealType::parse("elevenses"), None);
        assert_eq!(MealType::parse("Breakfast"), None);
        assert!(serde_json::from_value::<MealType>(json!("second breakfast")).is_err());
    }

    #[test]
    fn dish_deserializes_without_tags() {
        let dish: Dish = serde_json::from_value(json!({
            "id": Uuid::new_v4().to_string(),
            "name": "Oatmeal",
            "recipe": ["Simmer the oats."],
            "ingredients": [{"name": "oats", "quantity": 50.0}],
            "nutrition": {"calories": 150.0, "protein": 5.0, "fat": 3.0, "carbs": 27.0},
            "meal_type": "breakfast",
            "cooking_time": 10,
            "servings": 1
        }))
        .unwrap();

        assert_eq!(dish.name, "Oatmeal");
        assert_eq!(dish.meal_type, MealType::Breakfast);
        assert!(dish.tags.is_empty());
    }

    #[test]
    fn dish_serializes_snake_case_wire_names() {
        let dish = Dish {
            id: Uuid::new_v4(),
            name: "Oatmeal".to_string(),
            recipe: vec!["Simmer the oats.".to_string()],
            ingredients: vec![Ingredient {
                name: "oats".to_string(),
                quantity: 50.0,
            }],
            nutrition: Nutrition {
                calories: 150.0,
                protein: 5.0,
                fat: 3.0,
                carbs: 27.0,
            },
            meal_type: MealType::Breakfast,
            cooking_time: 10,
            servings: 1,
            tags: vec!["quick".to_string()],
        };

        let value = serde_json::to_value(&dish).unwrap();
        for field in [
            "id",
            "name",
            "recipe",
            "ingredients",
            "nutrition",
            "meal_type",
            "cooking_time",
            "servings",
            "tags",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(value["meal_type"], json!("breakfast"));
    }
}
