//! Endpoint catalog: one `Operation` per remote endpoint.
//!
//! Each operation knows its diagnostic name and which envelope statuses it
//! accepts. URLs are built by `SkyscannerClient`, which owns the path
//! parameters.

use std::fmt;

use crate::types::ResultStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Locales,
    Markets,
    Currencies,
    Carriers,
    Locations,
    FlightSyncSearch,
    FlightAsyncCreateSearch,
    FlightAsyncPollSearch,
    HotelCreateSearch,
    HotelPollPageSearch,
    AutosuggestFlights,
    AutosuggestHotels,
}

/// Which envelope statuses an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Reference data: only `RESULT_STATUS_COMPLETE`.
    CompleteOnly,
    /// Live search: `RESULT_STATUS_COMPLETE` or `RESULT_STATUS_INCOMPLETE`.
    Search,
    /// Autosuggest envelopes carry no status; one that does must be
    /// `RESULT_STATUS_COMPLETE`.
    CompleteIfPresent,
}

impl StatusPolicy {
    pub fn accepts(self, status: Option<&str>) -> bool {
        let complete = ResultStatus::Complete.as_str();
        let incomplete = ResultStatus::Incomplete.as_str();
        match (self, status) {
            (StatusPolicy::CompleteIfPresent, None) => true,
            (_, None) => false,
            (StatusPolicy::Search, Some(s)) => s == complete || s == incomplete,
            (StatusPolicy::CompleteOnly | StatusPolicy::CompleteIfPresent, Some(s)) => s == complete,
        }
    }
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Locales => "locales",
            Operation::Markets => "markets",
            Operation::Currencies => "currencies",
            Operation::Carriers => "carriers",
            Operation::Locations => "locations",
            Operation::FlightSyncSearch => "flight_sync_search",
            Operation::FlightAsyncCreateSearch => "flight_async_create_search",
            Operation::FlightAsyncPollSearch => "flight_async_poll_search",
            Operation::HotelCreateSearch => "hotel_create_search",
            Operation::HotelPollPageSearch => "hotel_poll_page_search",
            Operation::AutosuggestFlights => "autosuggest_flights",
            Operation::AutosuggestHotels => "autosuggest_hotels",
        }
    }

    pub fn status_policy(self) -> StatusPolicy {
        match self {
            Operation::Locales
            | Operation::Markets
            | Operation::Currencies
            | Operation::Carriers
            | Operation::Locations => StatusPolicy::CompleteOnly,
            Operation::FlightSyncSearch
            | Operation::FlightAsyncCreateSearch
            | Operation::FlightAsyncPollSearch
            | Operation::HotelCreateSearch
            | Operation::HotelPollPageSearch => StatusPolicy::Search,
            Operation::AutosuggestFlights | Operation::AutosuggestHotels => {
                StatusPolicy::CompleteIfPresent
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
