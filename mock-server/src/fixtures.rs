//! Canned reference data served by the mock.

use serde_json::{json, Value};

pub fn locales() -> Value {
    json!([
        {"code": "en-GB", "name": "English (United Kingdom)"},
        {"code": "en-US", "name": "English (United States)"},
        {"code": "fr-FR", "name": "Français (France)"}
    ])
}

/// Markets as named in `locale`, or `None` for a locale we do not serve.
pub fn markets(locale: &str) -> Option<Value> {
    match locale {
        "en-GB" | "en-US" => Some(json!([
            {"code": "UK", "name": "United Kingdom", "currency": "GBP"},
            {"code": "US", "name": "United States", "currency": "USD"},
            {"code": "FR", "name": "France", "currency": "EUR"}
        ])),
        "fr-FR" => Some(json!([
            {"code": "UK", "name": "Royaume-Uni", "currency": "GBP"},
            {"code": "US", "name": "États-Unis", "currency": "USD"},
            {"code": "FR", "name": "France", "currency": "EUR"}
        ])),
        _ => None,
    }
}

pub fn currencies() -> Value {
    json!([
        {
            "code": "GBP", "symbol": "£", "thousandsSeparator": ",", "decimalSeparator": ".",
            "symbolOnLeft": true, "spaceBetweenAmountAndSymbol": false, "decimalDigits": 2
        },
        {
            "code": "EUR", "symbol": "€", "thousandsSeparator": ".", "decimalSeparator": ",",
            "symbolOnLeft": false, "spaceBetweenAmountAndSymbol": true, "decimalDigits": 2
        },
        {
            "code": "JPY", "symbol": "¥", "thousandsSeparator": ",", "decimalSeparator": ".",
            "symbolOnLeft": true, "spaceBetweenAmountAndSymbol": false, "decimalDigits": 0
        }
    ])
}

pub fn carriers() -> Value {
    json!({
        "-32753": {"name": "Emirates", "iata": "EK"},
        "-32677": {"name": "British Airways", "iata": "BA"},
        "-32356": {"name": "Air France", "iata": "AF"}
    })
}

pub fn places() -> Value {
    json!({
        "1": {
            "entityId": "1", "parentId": "", "name": "Europe",
            "type": "PLACE_TYPE_CONTINENT", "iata": "",
            "coordinates": {"latitude": 54.526, "longitude": 15.2551}
        },
        "29475437": {
            "entityId": "29475437", "parentId": "1", "name": "United Kingdom",
            "type": "PLACE_TYPE_COUNTRY", "iata": "",
            "coordinates": {"latitude": 55.3781, "longitude": -3.436}
        },
        "27544008": {
            "entityId": "27544008", "parentId": "29475437", "name": "London",
            "type": "PLACE_TYPE_CITY", "iata": "LON",
            "coordinates": {"latitude": 51.5072, "longitude": -0.1276}
        },
        "95565050": {
            "entityId": "95565050", "parentId": "27544008", "name": "London Heathrow",
            "type": "PLACE_TYPE_AIRPORT", "iata": "LHR",
            "coordinates": {"latitude": 51.4706, "longitude": -0.461941}
        }
    })
}

/// Autosuggest candidates: (entity id, IATA, display name).
pub const SUGGESTIONS: &[(&str, &str, &str)] = &[
    ("27544008", "LON", "London"),
    ("95565050", "LHR", "London Heathrow"),
    ("27539733", "PAR", "Paris"),
    ("95673529", "DXB", "Dubai International"),
];
