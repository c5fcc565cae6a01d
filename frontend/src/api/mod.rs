//! HTTP client for the remote scholarship service.
//!
//! Every call goes through `gloo-net`. Paths come from `common::api::Endpoint`
//! and non-2xx answers are classified by `ClientError::from_response`, so the
//! views only ever see `Result<_, ClientError>`.

use chrono::{DateTime, Utc};
use common::api::{Endpoint, Method};
use common::config::ClientConfig;
use common::error::ClientError;
use common::feed::{FeedBatch, FeedSource};
use common::model::application::{Application, ScholarshipStatus, StatusFilter};
use common::model::funds::FundsSummary;
use common::model::notification::{HodFeedback, Notification, PrincipalFeedback};
use common::requests::{
    FinanceApproval, NewNotification, PrincipalApproval, TrackingResponse, UploadResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    fn builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ClientError> {
        let response = self.builder(&endpoint).send().await.map_err(transport)?;
        decode(response).await
    }

    async fn send_json<B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Response, ClientError> {
        let response = self
            .builder(&endpoint)
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response).await
    }

    pub async fn applications(&self) -> Result<Vec<Application>, ClientError> {
        self.get(Endpoint::Applications).await
    }

    pub async fn scholarships(&self, filter: StatusFilter) -> Result<Vec<Application>, ClientError> {
        self.get(Endpoint::Scholarships(filter)).await
    }

    pub async fn approve_finance_head(
        &self,
        id: &str,
        body: &FinanceApproval,
    ) -> Result<(), ClientError> {
        self.send_json(Endpoint::ApproveFinanceHead(id.to_string()), body)
            .await
            .map(|_| ())
    }

    pub async fn approve_principal(
        &self,
        id: &str,
        body: &PrincipalApproval,
    ) -> Result<(), ClientError> {
        self.send_json(Endpoint::ApprovePrincipal(id.to_string()), body)
            .await
            .map(|_| ())
    }

    /// Multipart upload; the browser sets the boundary header itself.
    pub async fn upload_documents(&self, form: FormData) -> Result<UploadResponse, ClientError> {
        let response = self
            .builder(&Endpoint::UploadDocuments)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    pub async fn tracking_status(&self, application_id: &str) -> Result<ScholarshipStatus, ClientError> {
        let envelope: TrackingResponse = self
            .get(Endpoint::TrackingStatus(application_id.to_string()))
            .await?;
        Ok(envelope.tracking_status)
    }

    pub async fn post_notification(
        &self,
        body: &NewNotification,
    ) -> Result<Notification, ClientError> {
        let response = self.send_json(Endpoint::PostNotification, body).await?;
        response
            .json::<Notification>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetches one feed source. `None` when the source needs an application id
    /// and none is stored. Feedback bodies carry no timestamp and are stamped
    /// with `fetched_at`.
    pub async fn feed_batch(
        &self,
        source: FeedSource,
        application_id: Option<&str>,
        fetched_at: DateTime<Utc>,
    ) -> Option<Result<FeedBatch, ClientError>> {
        let endpoint = source.endpoint(application_id)?;
        let application_id = application_id.unwrap_or_default().to_string();
        let batch = match source {
            FeedSource::Stream(_) => self
                .get::<Vec<Notification>>(endpoint)
                .await
                .map(FeedBatch::Notifications),
            FeedSource::HodFeedback => {
                self.get::<HodFeedback>(endpoint).await.map(|body| FeedBatch::Hod {
                    application_id,
                    body,
                    fetched_at,
                })
            }
            FeedSource::PrincipalFeedback => {
                self.get::<PrincipalFeedback>(endpoint).await.map(|body| FeedBatch::Principal {
                    application_id,
                    body,
                    fetched_at,
                })
            }
        };
        Some(batch)
    }

    pub async fn amount_details(&self) -> Result<FundsSummary, ClientError> {
        self.get(Endpoint::AmountDetails).await
    }
}

fn transport(err: gloo_net::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

async fn ensure_ok(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_response(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
