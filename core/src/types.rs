//! Request and response DTOs for the Skyscanner API.
//!
//! # Design
//! Field names follow the remote camelCase wire format through serde
//! attributes. The closed vocabularies (`CabinClass`, `LocationType`,
//! `ResultStatus`) are Rust enums that serialize to the exact remote strings,
//! so an unknown value is rejected at the boundary instead of being passed
//! along. No referential integrity is checked: a `Location::parent_id` may
//! name a place absent from the same result set.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Culture / reference data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locale {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Market {
    pub code: String,
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub symbol_on_left: bool,
    pub space_between_amount_and_symbol: bool,
    pub decimal_digits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Carrier {
    pub name: String,
    #[serde(default)]
    pub iata: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LocationType {
    #[serde(rename = "PLACE_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "PLACE_TYPE_AIRPORT")]
    Airport,
    #[serde(rename = "PLACE_TYPE_CITY")]
    City,
    #[serde(rename = "PLACE_TYPE_COUNTRY")]
    Country,
    #[serde(rename = "PLACE_TYPE_CONTINENT")]
    Continent,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A node of the flights geo hierarchy. Cities and countries carry no IATA
/// code, and the root has no parent, so both default to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub entity_id: String,
    #[serde(default)]
    pub parent_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationType,
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub coordinates: LocationCoordinates,
}

// ---------------------------------------------------------------------------
// Search queries
// ---------------------------------------------------------------------------

/// A place reference: either an IATA code or a Skyscanner entity id.
///
/// Serializes to `{"iata": "LHR"}` or `{"entityId": "27544008"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlaceId {
    Iata(String),
    EntityId(String),
}

impl PlaceId {
    pub fn iata(code: &str) -> Self {
        PlaceId::Iata(code.to_string())
    }

    pub fn entity_id(id: &str) -> Self {
        PlaceId::EntityId(id.to_string())
    }
}

/// Calendar date without a timezone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryLeg {
    pub origin_place_id: PlaceId,
    pub destination_place_id: PlaceId,
    pub date: Date,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CabinClass {
    #[serde(rename = "CABIN_CLASS_UNSPECIFIED")]
    Unspecified,
    #[default]
    #[serde(rename = "CABIN_CLASS_ECONOMY")]
    Economy,
    #[serde(rename = "CABIN_CLASS_PREMIUM_ECONOMY")]
    PremiumEconomy,
    #[serde(rename = "CABIN_CLASS_BUSINESS")]
    Business,
    #[serde(rename = "CABIN_CLASS_FIRST")]
    First,
}

/// Flight live-search query. `query_legs` is ordered: one leg for one-way,
/// two for a return trip, more for multi-city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuery {
    pub market: String,
    pub locale: String,
    pub currency: String,
    pub query_legs: Vec<QueryLeg>,
    pub cabin_class: CabinClass,
    pub adults: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children_ages: Vec<u32>,
}

/// Hotel live-search query. `sort_by` is passed to the API unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuery {
    pub market: String,
    pub locale: String,
    pub currency: String,
    pub place_id: PlaceId,
    pub check_in_date: Date,
    pub check_out_date: Date,
    pub adults: u32,
    pub rooms: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children_ages: Vec<u32>,
    pub sort_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutosuggestFlightQuery {
    pub market: String,
    pub locale: String,
    pub search_term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutosuggestHotelQuery {
    pub market: String,
    pub locale: String,
    pub search_term: String,
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// Value of the `status` field carried by response envelopes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResultStatus {
    #[serde(rename = "RESULT_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "RESULT_STATUS_COMPLETE")]
    Complete,
    #[serde(rename = "RESULT_STATUS_INCOMPLETE")]
    Incomplete,
    #[serde(rename = "RESULT_STATUS_FAILED")]
    Failed,
}

impl ResultStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultStatus::Unspecified => "RESULT_STATUS_UNSPECIFIED",
            ResultStatus::Complete => "RESULT_STATUS_COMPLETE",
            ResultStatus::Incomplete => "RESULT_STATUS_INCOMPLETE",
            ResultStatus::Failed => "RESULT_STATUS_FAILED",
        }
    }
}

/// Flight live-search envelope. `content` holds itineraries, legs, segments
/// and reference data keyed by id; it is kept as JSON since its shape is
/// large and evolves on the remote side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub session_token: Option<String>,
    pub status: ResultStatus,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl SearchResponse {
    /// Whether polling can stop.
    pub fn is_complete(&self) -> bool {
        self.status == ResultStatus::Complete
    }
}
