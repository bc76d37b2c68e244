//! Open Food Facts
//!
//! Food search against the public Open Food Facts database. Transport is left to a
//! `SendRequest` implementation, this module builds the search request and decodes the response
//! payload into raw food candidates.

use gymplan_domain as domain;
use serde::Deserialize;
use serde_json::Value;

pub const SEARCH_URL: &str = "https://world.openfoodfacts.org/cgi/search.pl";
pub const PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl Request {
    /// Search sorted by popularity.
    #[must_use]
    pub fn search(query: &str) -> Self {
        Self {
            url: SEARCH_URL,
            params: vec![
                ("search_terms", query.to_string()),
                ("search_simple", "1".to_string()),
                ("action", "process".to_string()),
                ("json", "1".to_string()),
                ("page_size", PAGE_SIZE.to_string()),
                ("sort_by", "unique_scans_n".to_string()),
            ],
        }
    }
}

pub trait SendRequest {
    /// Body of the response. Timeouts and unreachable hosts are reported as `NoConnection`.
    fn send_request(&self, request: &Request) -> Result<String, domain::StorageError>;
}

pub struct OpenFoodFacts<S: SendRequest> {
    sender: S,
}

impl<S: SendRequest> OpenFoodFacts<S> {
    pub const fn new(sender: S) -> Self {
        Self { sender }
    }
}

impl<S: SendRequest> domain::FoodRepository for OpenFoodFacts<S> {
    fn search_foods(&self, query: &str) -> Result<Vec<domain::FoodCandidate>, domain::ReadError> {
        let body = self.sender.send_request(&Request::search(query))?;
        decode(&body).map_err(|err| domain::ReadError::Other(Box::new(err)))
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Deserialize, Default)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal: Option<Value>,
    #[serde(rename = "energy_100g")]
    energy_kj: Option<Value>,
    #[serde(rename = "proteins_100g")]
    proteins: Option<Value>,
    #[serde(rename = "carbohydrates_100g")]
    carbohydrates: Option<Value>,
    #[serde(rename = "fat_100g")]
    fat: Option<Value>,
}

/// Decode a search response into at most `PAGE_SIZE` candidates, keeping the response order.
///
/// Nutrient values are given as numbers or numeric strings. Anything else counts as missing.
pub fn decode(payload: &str) -> Result<Vec<domain::FoodCandidate>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(payload)?;
    Ok(response
        .products
        .into_iter()
        .take(PAGE_SIZE)
        .map(|product| domain::FoodCandidate {
            name: product.product_name.unwrap_or_default(),
            calories: number(product.nutriments.energy_kcal.as_ref()),
            energy_kj: number(product.nutriments.energy_kj.as_ref()),
            protein: number(product.nutriments.proteins.as_ref()),
            carbs: number(product.nutriments.carbohydrates.as_ref()),
            fat: number(product.nutriments.fat.as_ref()),
        })
        .collect())
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
