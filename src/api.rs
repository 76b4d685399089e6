use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{PulseError, Result};
use crate::filters::{category_scope, FilterState};
use crate::model::{CompareResponse, Comparison, Product, ProductId};

// -- Request bodies --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareArgs<'a> {
    product_ids: &'a [ProductId],
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the storefront backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    pub fn products_url(&self, filters: &FilterState) -> Result<Url> {
        let mut url = self.endpoint("api/products")?;
        let query = filters.query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    pub fn brands_url(&self, category: Option<&str>) -> Result<Url> {
        let mut url = self.endpoint("api/brands")?;
        if let Some(category) = category.and_then(category_scope) {
            url.query_pairs_mut().append_pair("category", category);
        }
        Ok(url)
    }

    pub async fn list_products(&self, filters: &FilterState) -> Result<Vec<Product>> {
        let url = self.products_url(filters)?;
        self.get_json(url).await
    }

    pub async fn list_brands(&self, category: Option<&str>) -> Result<Vec<String>> {
        let url = self.brands_url(category)?;
        let brands: Vec<String> = self.get_json(url).await?;
        Ok(dedup_brands(brands))
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let url = self.endpoint("api/categories")?;
        self.get_json(url).await
    }

    /// POST the ids to `/api/compare`. Rows come back in `ids` order
    /// whichever response shape the backend picked.
    pub async fn compare(&self, ids: &[ProductId]) -> Result<Comparison> {
        let url = self.endpoint("api/compare")?;
        debug!("POST {} ({} products)", url, ids.len());

        let resp = self
            .http
            .post(url.clone())
            .json(&CompareArgs { product_ids: ids })
            .send()
            .await?;
        let body: CompareResponse = Self::read_json(url, resp).await?;
        Ok(Comparison::from(body).ordered_by(ids))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let resp = self.http.get(url.clone()).send().await?;
        Self::read_json(url, resp).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        url: Url,
        resp: reqwest::Response,
    ) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_default();
            warn!("{} returned {}: {}", url, status, detail);
            return Err(PulseError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| PulseError::Decode(e.to_string()))
    }
}

/// Drop empty and repeated brand names, keeping first-seen order.
pub fn dedup_brands(brands: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(brands.len());
    for brand in brands {
        if !brand.is_empty() && !seen.contains(&brand) {
            seen.push(brand);
        }
    }
    seen
}
