//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use roster_domain::{
    PageRequest, Player, PlayerDraft, PlayerFilter, PlayerId, PlayerOrder, PlayerPatch,
    Profession, Race,
};

use crate::app::App;
use crate::use_cases::ManagementError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Request shapes
// =============================================================================

/// Listing and counting criteria. Birthday bounds are epoch milliseconds.
///
/// Paging fields are ignored by the count endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQueryParams {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub order: Option<PlayerOrder>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl PlayerQueryParams {
    fn filter(&self) -> PlayerFilter {
        PlayerFilter {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            after: self.after.map(filter_bound),
            before: self.before.map(filter_bound),
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }

    fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }
}

/// Body of a create request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequestDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl CreatePlayerRequestDto {
    fn into_draft(self) -> Result<PlayerDraft, ApiError> {
        Ok(PlayerDraft {
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday.map(|ms| millis("birthday", ms)).transpose()?,
            banned: self.banned,
            experience: self.experience,
        })
    }
}

/// Body of an update request. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequestDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl UpdatePlayerRequestDto {
    fn into_patch(self) -> Result<PlayerPatch, ApiError> {
        Ok(PlayerPatch {
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday.map(|ms| millis("birthday", ms)).transpose()?,
            banned: self.banned,
            experience: self.experience,
        })
    }
}

fn millis(field: &str, value: i64) -> Result<DateTime<Utc>, ApiError> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| ApiError::BadRequest(format!("{field} is out of range: {value}")))
}

/// Criteria bounds accept any millisecond value; values past what `DateTime`
/// can hold clamp to its extremes, so they exclude nothing.
fn filter_bound(value: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value).unwrap_or(if value < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

fn parse_player_id(raw: &str) -> Result<PlayerId, ApiError> {
    raw.parse()
        .map_err(|e: roster_domain::DomainError| ApiError::BadRequest(e.to_string()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// =============================================================================
// Players
// =============================================================================

async fn list_players(
    State(app): State<Arc<App>>,
    Query(params): Query<PlayerQueryParams>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let filter = params.filter();
    let players = app
        .use_cases
        .management
        .player
        .list(&filter, params.order, params.page())
        .await?;
    Ok(Json(players))
}

async fn count_players(
    State(app): State<Arc<App>>,
    Query(params): Query<PlayerQueryParams>,
) -> Result<Json<usize>, ApiError> {
    let filter = params.filter();
    let count = app.use_cases.management.player.count(&filter).await?;
    Ok(Json(count))
}

async fn create_player(
    State(app): State<Arc<App>>,
    body: Result<Json<CreatePlayerRequestDto>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let draft = json_body(body)?.into_draft()?;
    let player = app.use_cases.management.player.create(draft).await?;
    Ok(Json(player))
}

async fn get_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_player_id(&id)?;
    let player = app.use_cases.management.player.get(id).await?;
    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePlayerRequestDto>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_player_id(&id)?;
    let patch = json_body(body)?.into_patch()?;
    let player = app.use_cases.management.player.update(id, patch).await?;
    Ok(Json(player))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_player_id(&id)?;
    app.use_cases.management.player.delete(id).await?;
    Ok(StatusCode::OK)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound { .. } => ApiError::NotFound,
            ManagementError::Validation(msg) => ApiError::BadRequest(msg),
            ManagementError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::memory::InMemoryPlayerRepo;

    const BIRTHDAY: i64 = 1_276_603_200_000;

    fn router() -> Router {
        let repo = Arc::new(InMemoryPlayerRepo::new());
        routes().with_state(Arc::new(App::new(repo)))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send(router, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn new_player(name: &str, experience: i32) -> Value {
        json!({
            "name": name,
            "title": "Sellsword",
            "race": "ORC",
            "profession": "WARRIOR",
            "birthday": BIRTHDAY,
            "experience": experience,
        })
    }

    async fn seed(router: &Router, players: &[(&str, i32)]) {
        for (name, experience) in players {
            let (status, _) = send_json(
                router,
                Method::POST,
                "/rest/players",
                Some(new_player(name, *experience)),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    fn names(list: &Value) -> Vec<&str> {
        list.as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, bytes) = send(&router(), Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"OK");
    }

    #[tokio::test]
    async fn create_returns_player_with_derived_fields() {
        let router = router();
        let (status, body) = send_json(
            &router,
            Method::POST,
            "/rest/players",
            Some(new_player("Urg", 750)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["level"], 3);
        assert_eq!(body["untilNextLevel"], 250);
        assert_eq!(body["banned"], false);
        assert_eq!(body["birthday"], BIRTHDAY);
    }

    #[tokio::test]
    async fn create_rejects_invalid_and_malformed_bodies() {
        let router = router();

        let mut missing_race = new_player("Urg", 10);
        missing_race["race"] = Value::Null;
        let (status, _) =
            send_json(&router, Method::POST, "/rest/players", Some(missing_race)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send_json(
            &router,
            Method::POST,
            "/rest/players",
            Some(new_player("Thirteen_char", 10)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut unknown_race = new_player("Urg", 10);
        unknown_race["race"] = json!("GOBLIN");
        let (status, _) =
            send_json(&router, Method::POST, "/rest/players", Some(unknown_race)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, count) = send_json(&router, Method::GET, "/rest/players/count", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn list_applies_criteria_order_and_paging() {
        let router = router();
        seed(
            &router,
            &[("Urg", 900), ("Bosh", 20), ("Amak", 5_000), ("Grul", 300)],
        )
        .await;

        let (status, list) = send_json(
            &router,
            Method::GET,
            "/rest/players?minExperience=100&order=NAME&pageNumber=0&pageSize=2",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&list), vec!["Amak", "Grul"]);

        let (_, list) = send_json(&router, Method::GET, "/rest/players", None).await;
        assert_eq!(names(&list), vec!["Urg", "Bosh", "Amak"]);

        let (_, list) = send_json(&router, Method::GET, "/rest/players?pageNumber=9", None).await;
        assert_eq!(list, json!([]));

        let (_, count) = send_json(
            &router,
            Method::GET,
            "/rest/players/count?minExperience=100&pageSize=1",
            None,
        )
        .await;
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn extreme_birthday_bounds_match_everything() {
        let router = router();
        seed(&router, &[("Urg", 0), ("Bosh", 10)]).await;

        let uri = format!(
            "/rest/players/count?after={}&before={}",
            i64::MIN,
            i64::MAX
        );
        let (status, count) = send_json(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn malformed_query_is_bad_request() {
        let router = router();
        let (status, _) = send(&router, Method::GET, "/rest/players?order=HEIGHT", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&router, Method::GET, "/rest/players?pageSize=-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_distinguishes_malformed_and_missing_ids() {
        let router = router();
        seed(&router, &[("Urg", 0)]).await;

        let (status, body) = send_json(&router, Method::GET, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Urg");

        for bad in ["0", "-4", "abc"] {
            let (status, _) =
                send(&router, Method::GET, &format!("/rest/players/{bad}"), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "id {bad}");
        }

        let (status, _) = send(&router, Method::GET, "/rest/players/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let router = router();
        seed(&router, &[("Urg", 0)]).await;

        let (status, body) = send_json(
            &router,
            Method::POST,
            "/rest/players/1",
            Some(json!({ "experience": 1000 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Urg");
        assert_eq!(body["title"], "Sellsword");
        assert_eq!(body["level"], 4);
        assert_eq!(body["untilNextLevel"], 500);

        let (status, _) = send_json(
            &router,
            Method::POST,
            "/rest/players/1",
            Some(json!({ "name": "Grom", "experience": -5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send_json(&router, Method::GET, "/rest/players/1", None).await;
        assert_eq!(body["name"], "Urg");
        assert_eq!(body["experience"], 1000);

        let (status, _) = send_json(
            &router,
            Method::POST,
            "/rest/players/7",
            Some(json!({ "banned": true })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_missing() {
        let router = router();
        seed(&router, &[("Urg", 0)]).await;

        let (status, _) = send(&router, Method::DELETE, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&router, Method::DELETE, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::DELETE, "/rest/players/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn management_errors_map_to_api_errors() {
        assert!(matches!(
            ApiError::from(ManagementError::not_found("Player", 3)),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(ManagementError::Validation("name".into())),
            ApiError::BadRequest(_)
        ));
    }
}
