use shared::{
    is_allowed_receipt, parse_int, Bill, BillStatus, CreatedReceipt, Route, DEFAULT_PCT,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

use crate::services::notifier::Notifier;
use crate::services::session::SessionStorage;
use crate::services::store::{ReceiptUpload, Store, StoreError, StoreResult, UpdateBillRequest};

pub const INVALID_EXTENSION_MESSAGE: &str =
    "Please choose a file with a valid extension (jpg, jpeg, or png).";

/// Parts of the new bill page the controller writes to
pub trait NewBillView {
    /// Empty the `input[data-testid="file"]` value
    fn clear_file_input(&self);

    /// Toggle `#btn-send-bill`
    fn set_send_enabled(&self, enabled: bool);

    /// Show the uploaded name in `#file-name`
    fn show_file_name(&self, file_name: &str);
}

/// Payload of a change event on the file input
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection {
    /// Input value as reported by the browser, e.g. `C:\fakepath\receipt.png`
    pub value: String,
    pub file: Option<web_sys::File>,
}

impl FileSelection {
    /// Last path segment of the input value
    pub fn file_name(&self) -> &str {
        self.value.rsplit(['\\', '/']).next().unwrap_or_default()
    }
}

/// Raw values of the new bill form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillFields {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Receipt captured by the last successful upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadedReceipt {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    /// Storage key used to update the bill on submit
    pub bill_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileChangeOutcome {
    /// Extension not allowed; the user was alerted
    Rejected { file_name: String },
    Uploaded(UploadedReceipt),
    UploadFailed(StoreError),
    /// Valid file but no store to upload to
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub bill: Bill,
    /// `None` when no store is configured
    pub persisted: Option<StoreResult<()>>,
}

/// Controller behind the new bill form
pub struct NewBill {
    on_navigate: Callback<String>,
    store: Option<Rc<dyn Store>>,
    session: Rc<dyn SessionStorage>,
    notifier: Rc<dyn Notifier>,
    view: Rc<dyn NewBillView>,
    receipt: RefCell<UploadedReceipt>,
}

impl NewBill {
    pub fn new(
        on_navigate: Callback<String>,
        store: Option<Rc<dyn Store>>,
        session: Rc<dyn SessionStorage>,
        notifier: Rc<dyn Notifier>,
        view: Rc<dyn NewBillView>,
    ) -> Self {
        Self {
            on_navigate,
            store,
            session,
            notifier,
            view,
            receipt: RefCell::new(UploadedReceipt::default()),
        }
    }

    pub fn receipt(&self) -> UploadedReceipt {
        self.receipt.borrow().clone()
    }

    /// Validate the chosen receipt and upload it.
    ///
    /// A rejected file leaves any previously uploaded receipt in place.
    pub async fn handle_change_file(&self, selection: FileSelection) -> FileChangeOutcome {
        let file_name = selection.file_name().to_string();

        if !is_allowed_receipt(&file_name) {
            self.view.clear_file_input();
            self.view.set_send_enabled(false);
            self.notifier.alert(INVALID_EXTENSION_MESSAGE);
            return FileChangeOutcome::Rejected { file_name };
        }

        let Some(store) = self.store.as_ref() else {
            return FileChangeOutcome::NotConfigured;
        };

        let upload = ReceiptUpload {
            file: selection.file,
            file_name: file_name.clone(),
            email: self.session.current_email(),
        };

        match store.bills().create(upload).await {
            Ok(CreatedReceipt { file_url, key }) => {
                log::debug!("Uploaded receipt {} to {}", file_name, file_url);
                let receipt = UploadedReceipt {
                    file_url: Some(file_url),
                    file_name: Some(file_name.clone()),
                    bill_id: Some(key),
                };
                *self.receipt.borrow_mut() = receipt.clone();
                self.view.set_send_enabled(true);
                self.view.show_file_name(&file_name);
                FileChangeOutcome::Uploaded(receipt)
            }
            Err(e) => FileChangeOutcome::UploadFailed(e),
        }
    }

    /// Assemble the bill from the form, go back to the bills page and persist it.
    pub async fn handle_submit(&self, fields: &NewBillFields) -> SubmitOutcome {
        let bill = self.build_bill(fields);
        self.on_navigate.emit(Route::Bills.path().to_string());
        let persisted = self.update_bill(&bill).await;
        SubmitOutcome { bill, persisted }
    }

    /// Replace the stored bill keyed by the upload. Navigates to the bills
    /// page once the store accepted it. `None` when no store is configured.
    pub async fn update_bill(&self, bill: &Bill) -> Option<StoreResult<()>> {
        let store = self.store.as_ref()?;

        let data = match serde_json::to_string(bill) {
            Ok(data) => data,
            Err(e) => return Some(Err(StoreError::Encode(e.to_string()))),
        };
        let request = UpdateBillRequest {
            data,
            selector: self.receipt.borrow().bill_id.clone(),
        };

        let result = store.bills().update(request).await;
        if result.is_ok() {
            self.on_navigate.emit(Route::Bills.path().to_string());
        }
        Some(result)
    }

    fn build_bill(&self, fields: &NewBillFields) -> Bill {
        let receipt = self.receipt.borrow();
        Bill {
            id: None,
            email: self.session.current_email(),
            expense_type: fields.expense_type.clone(),
            name: fields.name.clone(),
            amount: parse_int(&fields.amount),
            date: fields.date.clone(),
            vat: fields.vat.clone(),
            // zero counts as missing, like an empty field
            pct: parse_int(&fields.pct)
                .filter(|pct| *pct != 0)
                .unwrap_or(DEFAULT_PCT),
            commentary: fields.commentary.clone(),
            comment_admin: None,
            file_url: receipt.file_url.clone(),
            file_name: receipt.file_name.clone(),
            status: BillStatus::Pending,
        }
    }
}
