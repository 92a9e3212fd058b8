// web_app/api/client.rs - REST client for the catalog API
//
// Contract (all paths relative to the configured base URL):
// - GET    {base}        -> list of products
// - POST   {base}        -> create from {title, description, image, tags[]}
// - PUT    {base}{id}    -> replace with the full product body
// - DELETE {base}{id}    -> delete
//
// Philosophy:
// - The client is a bridge, not business logic
// - Non-2xx responses become `CatalogError::Api` with status and body
// - Mutation response bodies are not interpreted; the caller refetches

use async_trait::async_trait;
use reqwest::Response;
use url::Url;

use crate::web_app::error::CatalogError;
use crate::web_app::model::{NewProduct, Product};

/// Operations the product manager needs from the catalog backend
///
/// Futures are not required to be `Send` so browser fetches qualify.
#[async_trait(?Send)]
pub trait CatalogApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    async fn create_product(&self, product: &NewProduct) -> Result<(), CatalogError>;

    async fn update_product(&self, product: &Product) -> Result<(), CatalogError>;

    async fn delete_product(&self, id: &str) -> Result<(), CatalogError>;
}

/// `reqwest`-backed implementation of [`CatalogApi`]
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base_url = parse_base_url(base_url)?;
        tracing::debug!("Catalog client targeting {}", base_url);
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single product; the id is percent-encoded as one path segment.
    pub fn item_url(&self, id: &str) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

/// Parses the configured base URL, forcing a trailing slash so item URLs
/// nest under it.
pub fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized)
        .map_err(|e| CatalogError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(CatalogError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

async fn ensure_success(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Api {
        status: status.as_u16(),
        body,
    })
}

fn network_error(e: reqwest::Error) -> CatalogError {
    CatalogError::Network(e.to_string())
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response).await?;

        let products: Vec<Product> = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        tracing::debug!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<(), CatalogError> {
        let response = self
            .http
            .post(self.base_url.clone())
            .json(product)
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<(), CatalogError> {
        let url = self.item_url(&product.id)?;
        let response = self
            .http
            .put(url)
            .json(product)
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<(), CatalogError> {
        let url = self.item_url(id)?;
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("http://localhost:5000/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/");

        let url = parse_base_url("http://localhost:5000/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/");
    }

    #[test]
    fn test_parse_base_url_rejects_relative() {
        let err = parse_base_url("api/").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_parse_base_url_rejects_non_base() {
        let err = parse_base_url("mailto:admin@example.com").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_item_url_nests_under_base() {
        let client = HttpCatalogClient::new("http://localhost:5000/api").unwrap();
        let url = client.item_url("65f1c0ffee").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/65f1c0ffee");
    }

    #[test]
    fn test_item_url_encodes_id() {
        let client = HttpCatalogClient::new("http://localhost:5000/api/").unwrap();
        let url = client.item_url("a/b c").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/a%2Fb%20c");
    }

    #[test]
    fn test_item_url_at_host_root() {
        let client = HttpCatalogClient::new("http://localhost:5000").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
        assert_eq!(
            client.item_url("42").unwrap().as_str(),
            "http://localhost:5000/42"
        );
    }
}
