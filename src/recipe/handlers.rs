use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    recipe::{
        dto::{RecipeRequest, RecipeResponse},
        llm::ChatCompletions,
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new().route("/recipe/suggest", post(suggest))
}

const SYSTEM_PROMPT: &str = r#"You are a helpful culinary assistant. Your task is to generate a single, creative recipe based on a list of available ingredients.
Your response MUST be a valid JSON object that strictly follows this structure:
{
  "title": "Recipe Title",
  "description": "A brief, appealing description of the dish.",
  "ingredients": ["Ingredient 1", "Ingredient 2", ...],
  "instructions": ["Step 1", "Step 2", ...],
  "nutrition": {
    "calories": "X kcal",
    "protein": "Y g",
    "carbs": "Z g",
    "fats": "W g"
  }
}
Do not include any text or markdown formatting outside of the main JSON object."#;

pub(crate) fn build_user_prompt(req: &RecipeRequest) -> String {
    let mut prompt = format!(
        "Please generate a recipe using the following ingredients: {}. \
         You can assume basic pantry staples like salt, pepper, and oil are available.",
        req.ingredients.join(", ")
    );
    if let Some(cuisine) = req.cuisine.as_deref().filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(" Preferred cuisine: {cuisine}."));
    }
    if let Some(restrictions) = req
        .dietary_restrictions
        .as_deref()
        .filter(|r| !r.is_empty())
    {
        prompt.push_str(&format!(
            " The recipe must respect these dietary restrictions: {}.",
            restrictions.join(", ")
        ));
    }
    prompt
}

/// Validates the request, runs the completion and checks the reply against the
/// required recipe shape. No retries: a failed call fails the request.
pub(crate) async fn suggest_recipe(
    llm: &dyn ChatCompletions,
    req: &RecipeRequest,
) -> Result<RecipeResponse, AppError> {
    if req.ingredients.is_empty() {
        return Err(AppError::Validation(
            "Ingredients list cannot be empty".into(),
        ));
    }

    let user_prompt = build_user_prompt(req);
    let content = llm
        .complete_json(SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|e| AppError::Service(format!("The AI service returned an error: {e:#}")))?;

    serde_json::from_str::<RecipeResponse>(&content).map_err(|e| {
        warn!(error = %e, "model reply did not match the recipe shape");
        AppError::Service("AI failed to return a valid recipe format".into())
    })
}

#[instrument(skip(state, payload))]
pub async fn suggest(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    let Some(llm) = state.llm.as_deref() else {
        return Err(AppError::Service(
            "AI service is not configured correctly".into(),
        ));
    };

    let recipe = suggest_recipe(llm, &payload).await?;
    info!(user = %user_id, title = %recipe.title, "recipe suggested");
    Ok(Json(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::async_trait;
    use std::sync::Mutex;

    struct FakeChat {
        reply: String,
        calls: Mutex<Vec<String>>,
    }

    impl FakeChat {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatCompletions for FakeChat {
        async fn complete_json(
            &self,
            _system_prompt: &str,
            user_prompt: &str,
        ) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(user_prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn request(ingredients: &[&str]) -> RecipeRequest {
        RecipeRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cuisine: None,
            dietary_restrictions: None,
        }
    }

    const GOOD_REPLY: &str = r#"{
        "title": "Herbed Egg Fried Rice",
        "description": "A quick fried rice.",
        "ingredients": ["2 eggs", "1 cup rice"],
        "instructions": ["Cook rice.", "Fry eggs."],
        "nutrition": {
            "calories": "420 kcal",
            "protein": "18 g",
            "carbs": "55 g",
            "fats": "14 g"
        }
    }"#;

    #[tokio::test]
    async fn empty_ingredients_fail_before_the_provider_is_called() {
        let fake = FakeChat::new(GOOD_REPLY);
        let err = suggest_recipe(&fake, &request(&[])).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn valid_reply_parses_into_a_recipe() {
        let fake = FakeChat::new(GOOD_REPLY);
        let recipe = suggest_recipe(&fake, &request(&["eggs", "rice"]))
            .await
            .expect("suggest should succeed");
        assert_eq!(recipe.title, "Herbed Egg Fried Rice");
        assert_eq!(recipe.nutrition.calories, "420 kcal");
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn non_json_reply_is_a_service_error() {
        let fake = FakeChat::new("Sure! Here is a recipe: ...");
        let err = suggest_recipe(&fake, &request(&["eggs"])).await.unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_service_error() {
        let fake = FakeChat::new(r#"{"title": "only a title"}"#);
        let err = suggest_recipe(&fake, &request(&["eggs"])).await.unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }

    #[test]
    fn user_prompt_joins_ingredients_with_commas() {
        let prompt = build_user_prompt(&request(&["eggs", "rice", "scallions"]));
        assert!(prompt.contains("eggs, rice, scallions"));
    }

    #[test]
    fn user_prompt_carries_cuisine_and_restrictions() {
        let mut req = request(&["tofu"]);
        req.cuisine = Some("thai".into());
        req.dietary_restrictions = Some(vec!["vegan".into(), "gluten-free".into()]);
        let prompt = build_user_prompt(&req);
        assert!(prompt.contains("thai"));
        assert!(prompt.contains("vegan, gluten-free"));
    }
}
