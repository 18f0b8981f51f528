//! Async façade pairing `SkyscannerClient` with a `Transport`.
//!
//! Each method resolves the key, builds a fresh request, performs the single
//! round-trip and parses the envelope. Nothing is cached, retried or polled;
//! async searches are driven by the caller, which polls until
//! `SearchResponse::is_complete()`.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::client::SkyscannerClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::transport::Transport;
use crate::types::{
    AutosuggestFlightQuery, AutosuggestHotelQuery, Carrier, Currency, FlightQuery, HotelQuery,
    Locale, Location, Market, SearchResponse,
};

#[derive(Debug, Clone)]
pub struct Invoker<T> {
    client: SkyscannerClient,
    transport: T,
}

impl<T: Transport> Invoker<T> {
    pub fn new(client: SkyscannerClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &SkyscannerClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn locales(&self, key: Option<&str>) -> Result<Vec<Locale>, ApiError> {
        let request = self.client.build_locales(key)?;
        let response = self.send(Operation::Locales, request).await?;
        self.client.parse_locales(response)
    }

    pub async fn markets(&self, locale: &str, key: Option<&str>) -> Result<Vec<Market>, ApiError> {
        let request = self.client.build_markets(locale, key)?;
        let response = self.send(Operation::Markets, request).await?;
        self.client.parse_markets(response)
    }

    pub async fn currencies(&self, key: Option<&str>) -> Result<Vec<Currency>, ApiError> {
        let request = self.client.build_currencies(key)?;
        let response = self.send(Operation::Currencies, request).await?;
        self.client.parse_currencies(response)
    }

    pub async fn carriers(&self, key: Option<&str>) -> Result<HashMap<String, Carrier>, ApiError> {
        let request = self.client.build_carriers(key)?;
        let response = self.send(Operation::Carriers, request).await?;
        self.client.parse_carriers(response)
    }

    pub async fn locations(
        &self,
        locale: &str,
        key: Option<&str>,
    ) -> Result<HashMap<String, Location>, ApiError> {
        let request = self.client.build_locations(locale, key)?;
        let response = self.send(Operation::Locations, request).await?;
        self.client.parse_locations(response)
    }

    pub async fn flight_sync_search(
        &self,
        query: &FlightQuery,
        key: Option<&str>,
    ) -> Result<SearchResponse, ApiError> {
        let request = self.client.build_flight_sync_search(query, key)?;
        let response = self.send(Operation::FlightSyncSearch, request).await?;
        self.client.parse_flight_sync_search(response)
    }

    /// Start an async flight search. The returned envelope carries the
    /// session token to pass to `flight_async_poll_search`.
    pub async fn flight_async_create_search(
        &self,
        query: &FlightQuery,
        key: Option<&str>,
    ) -> Result<SearchResponse, ApiError> {
        let request = self.client.build_flight_async_create_search(query, key)?;
        let response = self.send(Operation::FlightAsyncCreateSearch, request).await?;
        self.client.parse_flight_async_create_search(response)
    }

    pub async fn flight_async_poll_search(
        &self,
        session_token: &str,
        key: Option<&str>,
    ) -> Result<SearchResponse, ApiError> {
        let request = self.client.build_flight_async_poll_search(session_token, key)?;
        let response = self.send(Operation::FlightAsyncPollSearch, request).await?;
        self.client.parse_flight_async_poll_search(response)
    }

    pub async fn hotel_create_search(&self, query: &HotelQuery, key: Option<&str>) -> Result<Value, ApiError> {
        let request = self.client.build_hotel_create_search(query, key)?;
        let response = self.send(Operation::HotelCreateSearch, request).await?;
        self.client.parse_hotel_create_search(response)
    }

    pub async fn hotel_poll_page_search(
        &self,
        page: u32,
        session_token: &str,
        key: Option<&str>,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_hotel_poll_page_search(page, session_token, key)?;
        let response = self.send(Operation::HotelPollPageSearch, request).await?;
        self.client.parse_hotel_poll_page_search(response)
    }

    pub async fn autosuggest_flights(
        &self,
        query: &AutosuggestFlightQuery,
        key: Option<&str>,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_autosuggest_flights(query, key)?;
        let response = self.send(Operation::AutosuggestFlights, request).await?;
        self.client.parse_autosuggest_flights(response)
    }

    pub async fn autosuggest_hotels(
        &self,
        query: &AutosuggestHotelQuery,
        key: Option<&str>,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_autosuggest_hotels(query, key)?;
        let response = self.send(Operation::AutosuggestHotels, request).await?;
        self.client.parse_autosuggest_hotels(response)
    }

    async fn send(&self, op: Operation, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        // Headers stay out of the log: they carry the API key.
        debug!(operation = op.name(), method = %request.method, url = %request.url, "dispatching request");
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|source| ApiError::Transport {
                operation: op.name(),
                source,
            })?;
        debug!(operation = op.name(), status = response.status, "response received");
        Ok(response)
    }
}
