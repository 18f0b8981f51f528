//! Typed client for the Skyscanner flight and hotel search API on RapidAPI.
//!
//! # Overview
//! Covers culture lookups (locales, markets, currencies), carriers, the
//! flights geo hierarchy, live flight search (synced, or create + poll),
//! live hotel search (create + poll) and autosuggest.
//!
//! # Design
//! - `SkyscannerClient` is stateless: each operation is split into `build_*`
//!   (produces a fresh `HttpRequest`) and `parse_*` (interprets the
//!   `HttpResponse` envelope), so the I/O boundary is explicit.
//! - `Invoker` pairs the client with an injected `Transport` and exposes one
//!   `async fn` per operation. `ReqwestTransport` is the bundled transport.
//! - The API key is resolved per call: explicit argument first, then the
//!   `RAPIDAPI_KEY` environment variable (configurable via `ClientConfig`).
//! - Search operations accept `RESULT_STATUS_INCOMPLETE`; reference lookups
//!   accept only `RESULT_STATUS_COMPLETE`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod invoker;
pub mod operation;
pub mod transport;
pub mod types;

pub use client::SkyscannerClient;
pub use config::ClientConfig;
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use invoker::Invoker;
pub use operation::{Operation, StatusPolicy};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    AutosuggestFlightQuery, AutosuggestHotelQuery, CabinClass, Carrier, Currency, Date, FlightQuery,
    HotelQuery, Locale, Location, LocationCoordinates, LocationType, Market, PlaceId, QueryLeg,
    ResultStatus, SearchResponse,
};
