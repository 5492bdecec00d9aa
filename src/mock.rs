//! Fake request records for the site's interactive terminal demo.
//!
//! The record mirrors what the Httpzen CLI shows after a request: the
//! request line, headers, a JSON body and where the server lives. Only the
//! decorative fields are random; the status and body are fixed so the demo
//! always shows a successful call.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to Httpzen, your tool to test APIs";

const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE"];

const WORDS: &[&str] = &[
    "amber", "basalt", "cobalt", "delta", "ember", "fjord", "granite", "harbor", "indigo",
    "juniper", "kestrel", "lumen", "meadow", "nimbus", "orchid", "prairie", "quartz", "raven",
    "sierra", "tundra",
];

const TLDS: &[&str] = &["com", "net", "org", "io", "dev", "info"];

const PATHS: &[&str] = &["", "/api", "/v1/users", "/status", "/docs", "/health"];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "curl/8.8.0",
    "httpzen/1.0",
];

const COUNTRIES: &[&str] = &[
    "Brazil", "Canada", "Germany", "Japan", "Kenya", "Mexico", "Norway", "Portugal",
    "South Africa", "United States",
];

const CITIES: &[&str] = &[
    "Lisbon", "Recife", "Toronto", "Berlin", "Osaka", "Nairobi", "Monterrey", "Bergen",
    "Cape Town", "Portland",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "Networks", "Telecom"];

/// A fixed-shape request, response and network record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockRequest {
    pub http_version: String,
    pub status_code: u16,
    pub response_time: u32,
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub response: MockResponse,
    pub network: MockNetwork,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockResponse {
    pub success: bool,
    pub data: MockData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockNetwork {
    pub protocol: String,
    pub ip: Ipv4Addr,
    pub country: String,
    pub hostname: String,
    pub city: String,
    pub decimal: u8,
    pub asn: u16,
    pub isp: String,
    pub coordinates: String,
}

/// Generates a record using the thread-local RNG.
pub fn mock_request() -> MockRequest {
    mock_request_with(&mut rand::rng())
}

/// Generates a record from the given RNG.
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let req = httpzen_site::mock_request_with(&mut StdRng::seed_from_u64(7));
/// assert_eq!(req.status_code, 200);
/// assert!(req.response.success);
/// ```
pub fn mock_request_with<R: Rng + ?Sized>(rng: &mut R) -> MockRequest {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("User-Agent".to_string(), pick(rng, USER_AGENTS).to_string());
    headers.insert(
        "Accept-Ch".to_string(),
        "Sec-CH-Prefers-Color-Scheme".to_string(),
    );
    headers.insert(
        "Content-Security-Policy".to_string(),
        "default-src 'self'; script-src 'none';".to_string(),
    );
    headers.insert("X-Xss-Protection".to_string(), "1; mode=block".to_string());

    let url = format!("https://{}{}", domain(rng), pick(rng, PATHS));

    MockRequest {
        http_version: "1.1".to_string(),
        status_code: 200,
        response_time: rng.random_range(100..=500),
        method: pick(rng, METHODS).to_string(),
        url,
        headers,
        response: MockResponse {
            success: true,
            data: MockData {
                message: WELCOME_MESSAGE.to_string(),
            },
        },
        network: MockNetwork {
            protocol: "IPv4".to_string(),
            ip: Ipv4Addr::from(rng.random::<[u8; 4]>()),
            country: pick(rng, COUNTRIES).to_string(),
            hostname: domain(rng),
            city: pick(rng, CITIES).to_string(),
            decimal: rng.random_range(1..=255),
            asn: rng.random_range(1000..=9999),
            isp: format!("{} {}", capitalize(pick(rng, WORDS)), pick(rng, COMPANY_SUFFIXES)),
            coordinates: format!(
                "{:.4}, {:.4}",
                rng.random_range(-90.0..=90.0_f64),
                rng.random_range(-180.0..=180.0_f64)
            ),
        },
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn domain<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}-{}.{}", pick(rng, WORDS), pick(rng, WORDS), pick(rng, TLDS))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn status_and_success_are_fixed(seed in any::<u64>()) {
            let req = mock_request_with(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(req.status_code, 200);
            prop_assert!(req.response.success);
        }

        #[test]
        fn random_fields_stay_in_range(seed in any::<u64>()) {
            let req = mock_request_with(&mut StdRng::seed_from_u64(seed));
            prop_assert!((100..=500).contains(&req.response_time));
            prop_assert!(METHODS.contains(&req.method.as_str()));
            prop_assert!(req.url.starts_with("https://"));
            prop_assert!(req.network.decimal >= 1);
            prop_assert!((1000..=9999).contains(&req.network.asn));
            prop_assert!(req.network.coordinates.contains(", "));
        }
    }
}
