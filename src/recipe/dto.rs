use serde::{Deserialize, Serialize};

/// Request body for a recipe suggestion.
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,
}

/// Nutrition values as display strings ("350 kcal"). The provider is not
/// guaranteed to return parseable numbers, so these stay strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

/// The recipe shape the model is required to produce. Deserialization doubles
/// as shape validation of the model's reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: NutritionInfo,
}
