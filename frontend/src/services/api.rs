use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use shared::{Bill, CreatedReceipt};
use std::rc::Rc;
use web_sys::FormData;

use crate::config::AppConfig;
use crate::services::session::SessionStorage;
use crate::services::store::{
    BillsResource, ReceiptUpload, Store, StoreError, StoreResult, UpdateBillRequest,
};

/// HTTP client for the Billed API
#[derive(Clone)]
pub struct ApiStore {
    bills: ApiBills,
}

/// `/bills` endpoints
#[derive(Clone)]
pub struct ApiBills {
    base_url: String,
    session: Rc<dyn SessionStorage>,
}

impl ApiStore {
    pub fn new(config: &AppConfig, session: Rc<dyn SessionStorage>) -> Self {
        Self::with_base_url(config.api_base_url.clone(), session)
    }

    pub fn with_base_url(base_url: String, session: Rc<dyn SessionStorage>) -> Self {
        Self {
            bills: ApiBills { base_url, session },
        }
    }
}

impl Store for ApiStore {
    fn bills(&self) -> &dyn BillsResource {
        &self.bills
    }
}

impl ApiBills {
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token when a user is logged in
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.jwt() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(request: Request) -> StoreResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(StoreError::Server { status, message })
        }
    }
}

#[async_trait(?Send)]
impl BillsResource for ApiBills {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        let request = self
            .authorize(Request::get(&self.url("bills")))
            .build()
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        Self::send(request)
            .await?
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        let form = FormData::new().map_err(|e| StoreError::Encode(format!("{:?}", e)))?;
        if let Some(file) = upload.file.as_ref() {
            form.append_with_blob_and_filename("file", file, &upload.file_name)
                .map_err(|e| StoreError::Encode(format!("{:?}", e)))?;
        }
        form.append_with_str("email", &upload.email)
            .map_err(|e| StoreError::Encode(format!("{:?}", e)))?;

        // No content type: the browser sets the multipart boundary itself.
        let request = self
            .authorize(Request::post(&self.url("bills")))
            .body(form)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        Self::send(request)
            .await?
            .json::<CreatedReceipt>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update(&self, request: UpdateBillRequest) -> StoreResult<()> {
        let selector = request.selector.ok_or(StoreError::MissingSelector)?;
        let request = self
            .authorize(Request::patch(&self.url(&format!("bills/{}", selector))))
            .header("Content-Type", "application/json")
            .body(request.data)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        Self::send(request).await.map(|_| ())
    }
}
