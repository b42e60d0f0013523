//! HTTP API Client
//!
//! Functions for communicating with the GymRec REST API. Every call is a
//! single best-effort attempt; non-success responses and transport failures
//! surface as `Err(String)` for the caller to handle.

use gloo_net::http::{Request, Response};

use crate::api::query::QueryBuilder;
use crate::state::global::{
    Exercise, ExerciseFilters, ExperienceLevel, Favorite, FilterOptions, HistoryEntry, User,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// API base URL, overridable at build time via `GYMREC_API_URL`
pub fn api_base() -> String {
    option_env!("GYMREC_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

// ============ Request / Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<Exercise>,
    pub total: usize,
}

#[derive(Debug, serde::Deserialize)]
struct RecommendationResponse {
    recommendations: Vec<Exercise>,
}

/// Preference payload for `POST /api/recommend/`. Unset fields are left out
/// of the JSON body entirely.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    pub limit: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub experience_level: ExperienceLevel,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
}

/// Error body shape used by the backend
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: Option<String>,
}

/// Extract a readable message from a non-success response
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<ApiError>()
        .await
        .ok()
        .and_then(|error| error.detail)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

// ============ Exercises ============

/// Fetch one page of exercises matching the active filters
pub async fn fetch_exercises(
    page: usize,
    page_size: usize,
    filters: &ExerciseFilters,
) -> Result<ExerciseListResponse, String> {
    let mut query = QueryBuilder::new();
    query.push("page", page);
    query.push("page_size", page_size);
    query.push_non_empty("body_part", &filters.body_part);
    query.push_non_empty("equipment", &filters.equipment);
    query.push_non_empty("level", &filters.level);
    query.push_non_empty("exercise_type", &filters.exercise_type);

    let response = Request::get(&format!("{}/api/exercises/{}", api_base(), query.suffix()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single exercise by id
pub async fn fetch_exercise(exercise_id: i64) -> Result<Exercise, String> {
    let response = Request::get(&format!("{}/api/exercises/{}", api_base(), exercise_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the filter option sets used to populate the select inputs
pub async fn fetch_filter_options() -> Result<FilterOptions, String> {
    let response = Request::get(&format!("{}/api/exercises/filters", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Recommendations ============

/// Request recommendations for a preference set
pub async fn fetch_recommendations(
    request: &RecommendationRequest,
) -> Result<Vec<Exercise>, String> {
    let response = Request::post(&format!("{}/api/recommend/", api_base()))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: RecommendationResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.recommendations)
}

/// Fetch exercises similar to a given exercise
pub async fn fetch_similar(exercise_id: i64, limit: usize) -> Result<Vec<Exercise>, String> {
    let response = Request::post(&format!(
        "{}/api/recommend/similar/{}?limit={}",
        api_base(),
        exercise_id,
        limit
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: RecommendationResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.recommendations)
}

// ============ Users ============

/// Create a user profile; the backend assigns and returns the id
pub async fn create_user(request: &UserCreate) -> Result<User, String> {
    let response = Request::post(&format!("{}/api/users/", api_base()))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a user by id
pub async fn fetch_user(user_id: &str) -> Result<User, String> {
    let response = Request::get(&format!("{}/api/users/{}", api_base(), user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update profile fields
pub async fn update_user(user_id: &str, request: &UserUpdate) -> Result<User, String> {
    let response = Request::put(&format!("{}/api/users/{}", api_base(), user_id))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a user account
pub async fn delete_user(user_id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/users/{}", api_base(), user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

// ============ Favorites ============

/// Fetch a user's saved favorites
pub async fn fetch_favorites(user_id: &str) -> Result<Vec<Favorite>, String> {
    let response = Request::get(&format!("{}/api/users/{}/favorites", api_base(), user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Save an exercise to a user's favorites
pub async fn add_favorite(user_id: &str, exercise_title: &str) -> Result<Favorite, String> {
    #[derive(serde::Serialize)]
    struct FavoriteCreate {
        exercise_title: String,
    }

    let response = Request::post(&format!("{}/api/users/{}/favorites", api_base(), user_id))
        .json(&FavoriteCreate {
            exercise_title: exercise_title.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Remove a favorite by id
pub async fn remove_favorite(user_id: &str, favorite_id: &str) -> Result<(), String> {
    let response = Request::delete(&format!(
        "{}/api/users/{}/favorites/{}",
        api_base(),
        user_id,
        favorite_id
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

// ============ History ============

/// Fetch a user's workout history
pub async fn fetch_history(user_id: &str) -> Result<Vec<HistoryEntry>, String> {
    let response = Request::get(&format!("{}/api/users/{}/history", api_base(), user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Log a completed exercise with optional notes
pub async fn add_history(
    user_id: &str,
    exercise_title: &str,
    notes: &str,
) -> Result<HistoryEntry, String> {
    #[derive(serde::Serialize)]
    struct HistoryCreate {
        exercise_title: String,
        notes: String,
    }

    let response = Request::post(&format!("{}/api/users/{}/history", api_base(), user_id))
        .json(&HistoryCreate {
            exercise_title: exercise_title.to_string(),
            notes: notes.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn test_recommendation_request_omits_unset_fields() {
        let request = RecommendationRequest {
            body_part: None,
            equipment: None,
            level: Some("Beginner".to_string()),
            exercise_type: None,
            limit: 5,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"level": "Beginner", "limit": 5}));
    }

    #[test]
    fn test_user_update_omits_unset_fields() {
        let request = UserUpdate {
            name: None,
            experience_level: Some(ExperienceLevel::Intermediate),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"experience_level": "Intermediate"})
        );
    }

    #[test]
    fn test_user_round_trip_preserves_profile_fields() {
        let request = UserCreate {
            email: "jo@example.com".to_string(),
            name: "Jo".to_string(),
            experience_level: ExperienceLevel::Expert,
        };
        let body = serde_json::to_value(&request).unwrap();

        // The backend echoes the submitted fields plus an assigned id
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "7f6a3c1e",
            "email": body["email"],
            "name": body["name"],
            "experience_level": body["experience_level"],
            "created_at": "2024-06-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(user.email, request.email);
        assert_eq!(user.name, request.name);
        assert_eq!(user.experience_level, Some(request.experience_level));
    }

    #[test]
    fn test_exercise_list_response_shape() {
        let parsed: ExerciseListResponse = serde_json::from_value(serde_json::json!({
            "exercises": [{"id": 1, "title": "Plank"}],
            "total": 200,
            "page": 1,
            "page_size": 12
        }))
        .unwrap();

        assert_eq!(parsed.total, 200);
        assert_eq!(parsed.exercises.len(), 1);
        assert_eq!(parsed.exercises[0].title, "Plank");
    }
}
