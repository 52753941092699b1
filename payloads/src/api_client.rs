use crate::{requests, responses};
use reqwest::{StatusCode, multipart};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.address)
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// List every orphanage. Backs the dashboard.
    pub async fn list_orphanages(
        &self,
    ) -> Result<Vec<responses::Orphanage>, ClientError> {
        let response = self.empty_get("orphanages").await?;
        ok_body(response).await
    }

    /// Submit an orphanage as a multipart form.
    ///
    /// The backend only exposes the create endpoint; the edit page posts
    /// here too, which records a new orphanage rather than updating the
    /// original. See DESIGN.md for why this is left as-is.
    pub async fn submit_orphanage(
        &self,
        details: requests::SubmitOrphanage,
    ) -> Result<(), ClientError> {
        let response = self
            .post_multipart("orphanages", details.into_multipart())
            .await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
