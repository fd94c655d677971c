use async_trait::async_trait;
use shared::{Bill, CreatedReceipt};
use thiserror::Error;

/// Failures reported by the bills store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("No bill key to update; upload a receipt first")]
    MissingSelector,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Receipt file and owner email sent as a multipart upload
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptUpload {
    /// Browser file handle. `None` outside a browser, where only the name is known.
    pub file: Option<web_sys::File>,
    pub file_name: String,
    pub email: String,
}

/// Replacement of a stored bill by its serialized form
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBillRequest {
    /// JSON-serialized [`Bill`]
    pub data: String,
    /// Storage key returned by the receipt upload
    pub selector: Option<String>,
}

/// The `bills` resource of the store
#[async_trait(?Send)]
pub trait BillsResource {
    async fn list(&self) -> StoreResult<Vec<Bill>>;

    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt>;

    async fn update(&self, request: UpdateBillRequest) -> StoreResult<()>;
}

/// Remote persistence client handed to the controllers
pub trait Store {
    fn bills(&self) -> &dyn BillsResource;
}

#[cfg(test)]
pub mod testing {
    //! In-memory store recording every call, for controller tests.

    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct MockStore {
        pub bills: MockBills,
    }

    #[derive(Default)]
    pub struct MockBills {
        pub list_result: RefCell<Option<StoreResult<Vec<Bill>>>>,
        pub create_result: RefCell<Option<StoreResult<CreatedReceipt>>>,
        pub update_result: RefCell<Option<StoreResult<()>>>,
        pub created: RefCell<Vec<ReceiptUpload>>,
        pub updated: RefCell<Vec<UpdateBillRequest>>,
    }

    impl MockStore {
        pub fn with_bills(bills: Vec<Bill>) -> Self {
            let store = Self::default();
            *store.bills.list_result.borrow_mut() = Some(Ok(bills));
            store
        }

        pub fn with_receipt(file_url: &str, key: &str) -> Self {
            let store = Self::default();
            *store.bills.create_result.borrow_mut() = Some(Ok(CreatedReceipt {
                file_url: file_url.to_string(),
                key: key.to_string(),
            }));
            store
        }
    }

    impl Store for MockStore {
        fn bills(&self) -> &dyn BillsResource {
            &self.bills
        }
    }

    #[async_trait(?Send)]
    impl BillsResource for MockBills {
        async fn list(&self) -> StoreResult<Vec<Bill>> {
            self.list_result
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
            self.created.borrow_mut().push(upload);
            self.create_result
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(StoreError::Network("no receipt configured".to_string())))
        }

        async fn update(&self, request: UpdateBillRequest) -> StoreResult<()> {
            self.updated.borrow_mut().push(request);
            self.update_result.borrow().clone().unwrap_or(Ok(()))
        }
    }
}
