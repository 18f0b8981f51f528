//! Verify build/parse pairs against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes operation arguments, the expected request, a
//! simulated response and either the expected parse result or the expected
//! error kind. Results are compared as parsed JSON so field ordering does not
//! matter.

use serde::Serialize;
use serde_json::Value;
use skyscanner_core::{ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, SkyscannerClient};

const BASE_URL: &str = "http://localhost:3000";
const KEY: Option<&str> = Some("vector-key");

type Parser<'a> = Box<dyn FnOnce(HttpResponse) -> Result<Value, ApiError> + 'a>;

fn client() -> SkyscannerClient {
    SkyscannerClient::new(ClientConfig::default().with_base_url(BASE_URL))
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn parser<'a>(f: impl FnOnce(HttpResponse) -> Result<Value, ApiError> + 'a) -> Parser<'a> {
    Box::new(f)
}

fn to_json<T: Serialize>(result: Result<T, ApiError>) -> Result<Value, ApiError> {
    result.map(|v| serde_json::to_value(v).unwrap())
}

fn arg<T: serde::de::DeserializeOwned>(args: &Value, name: &str) -> T {
    serde_json::from_value(args[name].clone()).unwrap_or_else(|e| panic!("bad arg `{name}`: {e}"))
}

/// Build the request for `operation` and return it with the matching parser.
fn build<'a>(c: &'a SkyscannerClient, operation: &str, args: &Value) -> (HttpRequest, Parser<'a>) {
    match operation {
        "locales" => (c.build_locales(KEY).unwrap(), parser(move |r| to_json(c.parse_locales(r)))),
        "markets" => (
            c.build_markets(&arg::<String>(args, "locale"), KEY).unwrap(),
            parser(move |r| to_json(c.parse_markets(r))),
        ),
        "currencies" => (c.build_currencies(KEY).unwrap(), parser(move |r| to_json(c.parse_currencies(r)))),
        "carriers" => (c.build_carriers(KEY).unwrap(), parser(move |r| to_json(c.parse_carriers(r)))),
        "locations" => (
            c.build_locations(&arg::<String>(args, "locale"), KEY).unwrap(),
            parser(move |r| to_json(c.parse_locations(r))),
        ),
        "flight_sync_search" => (
            c.build_flight_sync_search(&arg(args, "query"), KEY).unwrap(),
            parser(move |r| to_json(c.parse_flight_sync_search(r))),
        ),
        "flight_async_create_search" => (
            c.build_flight_async_create_search(&arg(args, "query"), KEY).unwrap(),
            parser(move |r| to_json(c.parse_flight_async_create_search(r))),
        ),
        "flight_async_poll_search" => (
            c.build_flight_async_poll_search(&arg::<String>(args, "session_token"), KEY).unwrap(),
            parser(move |r| to_json(c.parse_flight_async_poll_search(r))),
        ),
        "hotel_create_search" => (
            c.build_hotel_create_search(&arg(args, "query"), KEY).unwrap(),
            parser(move |r| c.parse_hotel_create_search(r)),
        ),
        "hotel_poll_page_search" => (
            c.build_hotel_poll_page_search(arg(args, "page"), &arg::<String>(args, "session_token"), KEY)
                .unwrap(),
            parser(move |r| c.parse_hotel_poll_page_search(r)),
        ),
        "autosuggest_flights" => (
            c.build_autosuggest_flights(&arg(args, "query"), KEY).unwrap(),
            parser(move |r| c.parse_autosuggest_flights(r)),
        ),
        "autosuggest_hotels" => (
            c.build_autosuggest_hotels(&arg(args, "query"), KEY).unwrap(),
            parser(move |r| c.parse_autosuggest_hotels(r)),
        ),
        other => panic!("unknown operation: {other}"),
    }
}

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let operation = case["operation"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let (req, parse) = build(&c, operation, &case["args"]);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(req.header("X-RapidAPI-Key"), Some("vector-key"), "{name}: key header");
        assert_eq!(
            req.header("X-RapidAPI-Host"),
            Some("skyscanner-api.p.rapidapi.com"),
            "{name}: host header"
        );
        match expected_req.get("body") {
            Some(expected_body) => {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected_body, "{name}: body");
                assert_eq!(req.header("content-type"), Some("application/json"), "{name}: content-type");
            }
            None => assert!(req.body.is_none(), "{name}: body should be None"),
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let outcome = parse(response);

        match case.get("expected_error") {
            None => {
                let result = outcome.unwrap_or_else(|e| panic!("{name}: unexpected error: {e}"));
                assert_eq!(result, case["expected_result"], "{name}: parsed result");
            }
            Some(expected) => {
                let err = outcome.expect_err(name);
                match (expected["kind"].as_str().unwrap(), err) {
                    ("remote_status", ApiError::RemoteStatus { status, operation: op, .. }) => {
                        assert_eq!(status.as_deref(), expected["status"].as_str(), "{name}: status");
                        assert_eq!(op, operation, "{name}: operation");
                    }
                    ("http", ApiError::HttpError { status, .. }) => {
                        assert_eq!(Some(u64::from(status)), expected["status"].as_u64(), "{name}: http status");
                    }
                    (kind, err) => panic!("{name}: expected {kind}, got {err:?}"),
                }
            }
        }
    }
}

#[test]
fn culture_test_vectors() {
    run_vectors(include_str!("../../test-vectors/culture.json"));
}

#[test]
fn search_test_vectors() {
    run_vectors(include_str!("../../test-vectors/search.json"));
}
