//! Stateless request builder and response parser for the Skyscanner API.
//!
//! # Design
//! `SkyscannerClient` holds only an immutable `ClientConfig`. Each operation
//! is split into a `build_*` method that resolves the API key and produces a
//! fresh `HttpRequest`, and a `parse_*` method that interprets the response
//! envelope. The caller (or `Invoker`) executes the HTTP round-trip in
//! between, keeping this type deterministic and free of I/O.
//!
//! Path parameters (locale codes, session tokens) are interpolated verbatim;
//! callers must URL-encode untrusted values.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, API_HOST_HEADER, API_KEY_HEADER};
use crate::operation::Operation;
use crate::types::{
    AutosuggestFlightQuery, AutosuggestHotelQuery, Carrier, Currency, FlightQuery, HotelQuery,
    Locale, Location, Market, SearchResponse,
};

/// JSON body wrapper: the remote API expects `{"query": ...}`.
#[derive(Serialize)]
struct QueryEnvelope<'a, Q> {
    query: &'a Q,
}

/// Synchronous, stateless client for the Skyscanner API.
///
/// Every `build_*` method takes an optional explicit API key; when `None`,
/// the key is read from the configured environment variable at call time.
#[derive(Debug, Clone, Default)]
pub struct SkyscannerClient {
    config: ClientConfig,
}

impl SkyscannerClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -- culture / reference data ------------------------------------------

    pub fn build_locales(&self, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.get("/v3/culture/locales", key)
    }

    pub fn build_markets(&self, locale: &str, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.get(&format!("/v3/culture/markets/{locale}"), key)
    }

    pub fn build_currencies(&self, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.get("/v3/culture/currencies", key)
    }

    pub fn build_carriers(&self, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.get("/v3/flights/carriers", key)
    }

    pub fn build_locations(&self, locale: &str, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.get(&format!("/v3/geo/hierarchy/flights/{locale}"), key)
    }

    // -- flight live search --------------------------------------------------

    pub fn build_flight_sync_search(
        &self,
        query: &FlightQuery,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/v3e/flights/live/search/synced", query, key)
    }

    pub fn build_flight_async_create_search(
        &self,
        query: &FlightQuery,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/v3/flights/live/search/create", query, key)
    }

    pub fn build_flight_async_poll_search(
        &self,
        session_token: &str,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.get(&format!("/v3/flights/live/search/poll/{session_token}"), key)
    }

    // -- hotel live search ---------------------------------------------------

    pub fn build_hotel_create_search(
        &self,
        query: &HotelQuery,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/v3e/hotels/live/search/create", query, key)
    }

    pub fn build_hotel_poll_page_search(
        &self,
        page: u32,
        session_token: &str,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.get(&format!("/v3e/hotels/live/search/poll/{page}/{session_token}"), key)
    }

    // -- autosuggest ---------------------------------------------------------

    pub fn build_autosuggest_flights(
        &self,
        query: &AutosuggestFlightQuery,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/v3/autosuggest/flights", query, key)
    }

    pub fn build_autosuggest_hotels(
        &self,
        query: &AutosuggestHotelQuery,
        key: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/v3/autosuggest/hotels", query, key)
    }

    // -- parsing -------------------------------------------------------------

    pub fn parse_locales(&self, response: HttpResponse) -> Result<Vec<Locale>, ApiError> {
        extract(Operation::Locales, response, "locales")
    }

    pub fn parse_markets(&self, response: HttpResponse) -> Result<Vec<Market>, ApiError> {
        extract(Operation::Markets, response, "markets")
    }

    pub fn parse_currencies(&self, response: HttpResponse) -> Result<Vec<Currency>, ApiError> {
        extract(Operation::Currencies, response, "currencies")
    }

    pub fn parse_carriers(&self, response: HttpResponse) -> Result<HashMap<String, Carrier>, ApiError> {
        extract(Operation::Carriers, response, "carriers")
    }

    pub fn parse_locations(&self, response: HttpResponse) -> Result<HashMap<String, Location>, ApiError> {
        extract(Operation::Locations, response, "places")
    }

    pub fn parse_flight_sync_search(&self, response: HttpResponse) -> Result<SearchResponse, ApiError> {
        whole(Operation::FlightSyncSearch, response)
    }

    pub fn parse_flight_async_create_search(
        &self,
        response: HttpResponse,
    ) -> Result<SearchResponse, ApiError> {
        whole(Operation::FlightAsyncCreateSearch, response)
    }

    pub fn parse_flight_async_poll_search(
        &self,
        response: HttpResponse,
    ) -> Result<SearchResponse, ApiError> {
        whole(Operation::FlightAsyncPollSearch, response)
    }

    pub fn parse_hotel_create_search(&self, response: HttpResponse) -> Result<Value, ApiError> {
        read_envelope(Operation::HotelCreateSearch, response)
    }

    pub fn parse_hotel_poll_page_search(&self, response: HttpResponse) -> Result<Value, ApiError> {
        read_envelope(Operation::HotelPollPageSearch, response)
    }

    pub fn parse_autosuggest_flights(&self, response: HttpResponse) -> Result<Value, ApiError> {
        read_envelope(Operation::AutosuggestFlights, response)
    }

    pub fn parse_autosuggest_hotels(&self, response: HttpResponse) -> Result<Value, ApiError> {
        read_envelope(Operation::AutosuggestHotels, response)
    }

    // -- request construction ----------------------------------------------

    fn get(&self, path: &str, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        let key = self.config.resolve_key(key)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.config.base_url()),
            headers: self.headers(key),
            body: None,
        })
    }

    fn post<Q: Serialize>(&self, path: &str, query: &Q, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        let key = self.config.resolve_key(key)?;
        let body = serde_json::to_string(&QueryEnvelope { query })
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = self.headers(key);
        headers.push(("content-type".to_string(), "application/json".to_string()));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.config.base_url()),
            headers,
            body: Some(body),
        })
    }

    fn headers(&self, key: String) -> Vec<(String, String)> {
        vec![
            (API_KEY_HEADER.to_string(), key),
            (API_HOST_HEADER.to_string(), self.config.host().to_string()),
        ]
    }
}

/// Decode the body and apply the operation's status policy.
///
/// A non-2xx response with a JSON body is a remote rejection; one with an
/// unparsable body is an HTTP-layer failure.
fn read_envelope(op: Operation, response: HttpResponse) -> Result<Value, ApiError> {
    let envelope: Value = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(_) if !response.is_success() => {
            return Err(ApiError::HttpError {
                operation: op.name(),
                status: response.status,
                body: response.body,
            });
        }
        Err(e) => {
            return Err(ApiError::Deserialization {
                operation: op.name(),
                message: e.to_string(),
            });
        }
    };

    let status = envelope.get("status").and_then(Value::as_str);
    if !response.is_success() || !op.status_policy().accepts(status) {
        warn!(operation = op.name(), http_status = response.status, status, "envelope rejected");
        return Err(ApiError::RemoteStatus {
            operation: op.name(),
            status: status.map(str::to_string),
            envelope: envelope.to_string(),
        });
    }
    Ok(envelope)
}

/// Pull the payload out of `field` of an accepted envelope.
fn extract<T: DeserializeOwned>(op: Operation, response: HttpResponse, field: &str) -> Result<T, ApiError> {
    let mut envelope = read_envelope(op, response)?;
    let payload = envelope
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| ApiError::Deserialization {
            operation: op.name(),
            message: format!("missing field `{field}`"),
        })?;
    serde_json::from_value(payload).map_err(|e| ApiError::Deserialization {
        operation: op.name(),
        message: e.to_string(),
    })
}

/// Deserialize an accepted envelope as a whole.
fn whole<T: DeserializeOwned>(op: Operation, response: HttpResponse) -> Result<T, ApiError> {
    let envelope = read_envelope(op, response)?;
    serde_json::from_value(envelope).map_err(|e| ApiError::Deserialization {
        operation: op.name(),
        message: e.to_string(),
    })
}
