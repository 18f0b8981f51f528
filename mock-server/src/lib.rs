//! In-process stand-in for the Skyscanner API on RapidAPI.
//!
//! Serves canned culture data and simulates live searches: create calls
//! open a session keyed by a fresh uuid and report
//! `RESULT_STATUS_INCOMPLETE` until the session has been polled
//! `POLLS_UNTIL_COMPLETE` times.

pub mod fixtures;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

pub const COMPLETE: &str = "RESULT_STATUS_COMPLETE";
pub const INCOMPLETE: &str = "RESULT_STATUS_INCOMPLETE";
pub const FAILED: &str = "RESULT_STATUS_FAILED";

/// Polls needed before a live search session reports completion.
pub const POLLS_UNTIL_COMPLETE: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchKind {
    Flights,
    Hotels,
}

#[derive(Debug)]
struct Session {
    kind: SearchKind,
    polls: u32,
}

type Sessions = Arc<RwLock<HashMap<String, Session>>>;

/// Body of every POST endpoint: `{"query": {...}}`.
#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: Value,
}

type Failure = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let sessions: Sessions = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v3/culture/locales", get(locales))
        .route("/v3/culture/markets/{locale}", get(markets))
        .route("/v3/culture/currencies", get(currencies))
        .route("/v3/flights/carriers", get(carriers))
        .route("/v3/geo/hierarchy/flights/{locale}", get(locations))
        .route("/v3e/flights/live/search/synced", post(flight_synced))
        .route("/v3/flights/live/search/create", post(flight_create))
        .route("/v3/flights/live/search/poll/{token}", get(flight_poll))
        .route("/v3e/hotels/live/search/create", post(hotel_create))
        .route("/v3e/hotels/live/search/poll/{page}/{token}", get(hotel_poll))
        .route("/v3/autosuggest/flights", post(autosuggest_flights))
        .route("/v3/autosuggest/hotels", post(autosuggest_hotels))
        .with_state(sessions)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    info!(addr = ?listener.local_addr().ok(), "mock skyscanner listening");
    axum::serve(listener, app()).await
}

fn authorize(headers: &HeaderMap) -> Result<(), Failure> {
    let has_key = headers
        .get("x-rapidapi-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.is_empty());
    if has_key {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid API key. Go to https://docs.rapidapi.com/docs/keys for more info."})),
        ))
    }
}

fn bad_request(message: &str) -> Failure {
    (StatusCode::BAD_REQUEST, Json(json!({"message": message})))
}

// --- culture ---

async fn locales(headers: HeaderMap) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    Ok(Json(json!({"status": COMPLETE, "locales": fixtures::locales()})))
}

async fn markets(headers: HeaderMap, Path(locale): Path<String>) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    Ok(Json(match fixtures::markets(&locale) {
        Some(markets) => json!({"status": COMPLETE, "markets": markets}),
        None => json!({"status": FAILED, "markets": []}),
    }))
}

async fn currencies(headers: HeaderMap) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    Ok(Json(json!({"status": COMPLETE, "currencies": fixtures::currencies()})))
}

async fn carriers(headers: HeaderMap) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    Ok(Json(json!({"status": COMPLETE, "carriers": fixtures::carriers()})))
}

async fn locations(headers: HeaderMap, Path(locale): Path<String>) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    if fixtures::markets(&locale).is_none() {
        return Ok(Json(json!({"status": FAILED, "places": {}})));
    }
    Ok(Json(json!({"status": COMPLETE, "places": fixtures::places()})))
}

// --- flights ---

/// Itineraries for the first leg of a flight query.
fn flight_content(query: &Value) -> Result<Value, Failure> {
    let legs = query
        .get("queryLegs")
        .and_then(Value::as_array)
        .filter(|legs| !legs.is_empty())
        .ok_or_else(|| bad_request("query.queryLegs must contain at least one leg"))?;
    let adults = query.get("adults").and_then(Value::as_u64).unwrap_or(1);
    let first = &legs[0];
    Ok(json!({
        "results": {
            "itineraries": {
                "13554-2612221000--32753-0-9772-2612222010": {
                    "pricingOptions": [
                        {"price": {"amount": (adults * 412_000).to_string(), "unit": "PRICE_UNIT_MILLI"}}
                    ],
                    "legIds": ["13554-2612221000--32753-0-9772-2612222010"]
                }
            },
            "legs": {
                "13554-2612221000--32753-0-9772-2612222010": {
                    "originPlaceId": first["originPlaceId"].clone(),
                    "destinationPlaceId": first["destinationPlaceId"].clone(),
                    "operatingCarrierIds": ["-32753"]
                }
            }
        },
        "stats": {"legCount": legs.len()}
    }))
}

async fn open_session(sessions: &Sessions, kind: SearchKind) -> String {
    let token = Uuid::new_v4().to_string();
    sessions
        .write()
        .await
        .insert(token.clone(), Session { kind, polls: 0 });
    debug!(%token, ?kind, "session opened");
    token
}

/// Count one poll; returns the session status, or a 404 failure.
async fn poll_session(sessions: &Sessions, token: &str, kind: SearchKind) -> Result<&'static str, Failure> {
    let mut sessions = sessions.write().await;
    let session = sessions
        .get_mut(token)
        .filter(|s| s.kind == kind)
        .ok_or((StatusCode::NOT_FOUND, Json(json!({"message": "session not found"}))))?;
    session.polls += 1;
    Ok(if session.polls >= POLLS_UNTIL_COMPLETE {
        COMPLETE
    } else {
        INCOMPLETE
    })
}

async fn flight_synced(headers: HeaderMap, Json(input): Json<SearchRequest>) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    let content = flight_content(&input.query)?;
    Ok(Json(json!({
        "sessionToken": Uuid::new_v4().to_string(),
        "status": COMPLETE,
        "action": "RESULT_ACTION_REPLACED",
        "content": content
    })))
}

async fn flight_create(
    State(sessions): State<Sessions>,
    headers: HeaderMap,
    Json(input): Json<SearchRequest>,
) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    let content = flight_content(&input.query)?;
    let token = open_session(&sessions, SearchKind::Flights).await;
    Ok(Json(json!({
        "sessionToken": token,
        "status": INCOMPLETE,
        "action": "RESULT_ACTION_REPLACED",
        "content": content
    })))
}

async fn flight_poll(
    State(sessions): State<Sessions>,
    headers: HeaderMap,
    Path(token): Path<String>,
) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    let status = poll_session(&sessions, &token, SearchKind::Flights).await?;
    Ok(Json(json!({
        "sessionToken": token,
        "status": status,
        "action": "RESULT_ACTION_OMITTED",
        "content": {"results": {"itineraries": {}, "legs": {}}}
    })))
}

// --- hotels ---

async fn hotel_create(
    State(sessions): State<Sessions>,
    headers: HeaderMap,
    Json(input): Json<SearchRequest>,
) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    if input.query.get("placeId").is_none() {
        return Err(bad_request("query.placeId is required"));
    }
    let token = open_session(&sessions, SearchKind::Hotels).await;
    Ok(Json(json!({
        "sessionToken": token,
        "status": INCOMPLETE,
        "results": {"hotels": []}
    })))
}

async fn hotel_poll(
    State(sessions): State<Sessions>,
    headers: HeaderMap,
    Path((page, token)): Path<(u32, String)>,
) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    let status = poll_session(&sessions, &token, SearchKind::Hotels).await?;
    Ok(Json(json!({
        "sessionToken": token,
        "status": status,
        "page": page,
        "results": {
            "hotels": [
                {"hotelId": format!("h{page}-1"), "name": "The Savoy", "stars": 5},
                {"hotelId": format!("h{page}-2"), "name": "Premier Inn London County Hall", "stars": 3}
            ]
        }
    })))
}

// --- autosuggest ---

fn matching_places(query: &Value) -> Result<Vec<Value>, Failure> {
    let term = query
        .get("searchTerm")
        .and_then(Value::as_str)
        .ok_or_else(|| bad_request("query.searchTerm is required"))?
        .to_lowercase();
    Ok(fixtures::SUGGESTIONS
        .iter()
        .filter(|(_, iata, name)| name.to_lowercase().contains(&term) || iata.to_lowercase() == term)
        .map(|(entity_id, iata, name)| json!({"entityId": entity_id, "iataCode": iata, "name": name}))
        .collect())
}

async fn autosuggest_flights(headers: HeaderMap, Json(input): Json<SearchRequest>) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    Ok(Json(json!({"places": matching_places(&input.query)?})))
}

async fn autosuggest_hotels(headers: HeaderMap, Json(input): Json<SearchRequest>) -> Result<Json<Value>, Failure> {
    authorize(&headers)?;
    let places = matching_places(&input.query)?
        .into_iter()
        .map(|mut place| {
            place["class"] = json!("City");
            place
        })
        .collect::<Vec<_>>();
    Ok(Json(json!({"places": places})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_content_requires_a_leg() {
        let err = flight_content(&json!({"queryLegs": []})).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn flight_content_prices_per_adult() {
        let query = json!({
            "adults": 2,
            "queryLegs": [{"originPlaceId": {"iata": "LHR"}, "destinationPlaceId": {"iata": "DXB"}}]
        });
        let content = flight_content(&query).unwrap();
        let itinerary = &content["results"]["itineraries"]["13554-2612221000--32753-0-9772-2612222010"];
        assert_eq!(itinerary["pricingOptions"][0]["price"]["amount"], "824000");
        assert_eq!(content["stats"]["legCount"], 1);
    }

    #[test]
    fn suggestions_match_name_or_iata() {
        let names: Vec<_> = matching_places(&json!({"searchTerm": "lon"}))
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["London", "London Heathrow"]);

        let by_iata = matching_places(&json!({"searchTerm": "DXB"})).unwrap();
        assert_eq!(by_iata.len(), 1);
    }

    #[test]
    fn missing_key_is_unauthorized() {
        let err = authorize(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn session_completes_after_enough_polls() {
        let sessions: Sessions = Arc::new(RwLock::new(HashMap::new()));
        let token = open_session(&sessions, SearchKind::Flights).await;
        assert_eq!(poll_session(&sessions, &token, SearchKind::Flights).await.unwrap(), INCOMPLETE);
        assert_eq!(poll_session(&sessions, &token, SearchKind::Flights).await.unwrap(), COMPLETE);
        assert!(poll_session(&sessions, &token, SearchKind::Hotels).await.is_err());
    }
}
