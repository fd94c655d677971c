use shared::{format_date, format_status, Bill, DateFormatError, Route};
use std::rc::Rc;
use yew::Callback;

use crate::services::store::{Store, StoreResult};

pub use shared::extract_file_extension;

/// Image shown when a bill has no supporting document, inlined so the page
/// needs no static asset
pub const NO_RECEIPT_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='320' height='200' viewBox='0 0 320 200'%3E%3Crect width='320' height='200' fill='%23f2f2f2'/%3E%3Ctext x='160' y='105' font-family='sans-serif' font-size='16' text-anchor='middle' fill='%23808080'%3EAucun justificatif%3C/text%3E%3C/svg%3E";

/// A bill prepared for the bills table
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    /// Record as returned by the store
    pub bill: Bill,
    /// Display date, or the raw date when it could not be formatted
    pub date: String,
    pub status: String,
}

/// A record whose date could not be formatted
#[derive(Debug, Clone, PartialEq)]
pub struct FormatFailure {
    pub error: DateFormatError,
    pub bill: Bill,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedBills {
    pub rows: Vec<BillRow>,
    pub failures: Vec<FormatFailure>,
}

/// Content of the receipt modal opened from an eye icon
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptPreview {
    pub src: String,
    pub alt: &'static str,
    pub width: u32,
    /// `true` when the bill had no document and the placeholder is shown
    pub placeholder: bool,
}

/// Controller behind the employee bills page
pub struct Bills {
    on_navigate: Callback<String>,
    store: Option<Rc<dyn Store>>,
}

impl Bills {
    pub fn new(on_navigate: Callback<String>, store: Option<Rc<dyn Store>>) -> Self {
        Self { on_navigate, store }
    }

    pub fn handle_click_new_bill(&self) {
        self.on_navigate.emit(Route::NewBill.path().to_string());
    }

    /// Build the modal content for the icon carrying `bill_url` in its
    /// `data-bill-url` attribute. The image takes half the modal width.
    pub fn handle_click_icon_eye(&self, bill_url: Option<&str>, modal_width: f64) -> ReceiptPreview {
        let width = (modal_width * 0.5).floor().max(0.0) as u32;
        match bill_url.map(str::trim) {
            Some(url) if !url.is_empty() && url != "null" && url != "undefined" => ReceiptPreview {
                src: url.to_string(),
                alt: "Bill",
                width,
                placeholder: false,
            },
            _ => ReceiptPreview {
                src: NO_RECEIPT_IMAGE.to_string(),
                alt: "No supporting document",
                width,
                placeholder: true,
            },
        }
    }

    /// Fetch and format the bill list. `None` when no store is configured.
    pub async fn get_bills(&self) -> Option<StoreResult<FetchedBills>> {
        let store = self.store.as_ref()?;
        Some(store.bills().list().await.map(format_bills))
    }
}

fn format_bills(bills: Vec<Bill>) -> FetchedBills {
    let mut fetched = FetchedBills::default();
    for bill in bills {
        let status = format_status(bill.status).to_string();
        let date = match format_date(&bill.date) {
            Ok(date) => date,
            Err(error) => {
                fetched.failures.push(FormatFailure {
                    error,
                    bill: bill.clone(),
                });
                bill.date.clone()
            }
        };
        fetched.rows.push(BillRow { bill, date, status });
    }
    fetched
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::services::store::testing::MockStore;
    use crate::services::store::StoreError;
    use shared::BillStatus;
    use std::cell::RefCell;

    fn bill(id: &str, date: &str, status: BillStatus) -> Bill {
        Bill {
            id: Some(id.to_string()),
            email: "a@a".to_string(),
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: Some(400),
            date: date.to_string(),
            vat: "80".to_string(),
            pct: 20,
            commentary: "séminaire billed".to_string(),
            comment_admin: None,
            file_url: Some("https://test.storage.tld/receipt.jpg".to_string()),
            file_name: Some("receipt.jpg".to_string()),
            status,
        }
    }

    fn recording_navigation() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        let paths = Rc::new(RefCell::new(Vec::new()));
        let sink = paths.clone();
        (Callback::from(move |path: String| sink.borrow_mut().push(path)), paths)
    }

    #[tokio::test]
    async fn test_get_bills_without_store() {
        let (on_navigate, paths) = recording_navigation();
        let controller = Bills::new(on_navigate, None);

        assert!(controller.get_bills().await.is_none());
        assert!(paths.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_get_bills_formats_dates_and_statuses() {
        let store = MockStore::with_bills(vec![
            bill("1", "2004-04-04", BillStatus::Pending),
            bill("2", "2003-03-03", BillStatus::Accepted),
            bill("3", "2002-02-02", BillStatus::Refused),
        ]);
        let controller = Bills::new(Callback::from(|_: String| ()), Some(Rc::new(store)));

        let fetched = controller.get_bills().await.unwrap().unwrap();

        let shown: Vec<(&str, &str)> = fetched
            .rows
            .iter()
            .map(|row| (row.date.as_str(), row.status.as_str()))
            .collect();
        assert_eq!(
            shown,
            [
                ("4 Avr. 04", "En attente"),
                ("3 Mar. 03", "Accepté"),
                ("2 Fév. 02", "Refused"),
            ]
        );
        assert!(fetched.failures.is_empty());
    }

    #[tokio::test]
    async fn test_get_bills_keeps_record_with_unparsable_date() {
        let store = MockStore::with_bills(vec![
            bill("1", "2004-04-04", BillStatus::Pending),
            bill("corrupted", "not-a-date", BillStatus::Accepted),
            bill("3", "2002-02-02", BillStatus::Refused),
        ]);
        let controller = Bills::new(Callback::from(|_: String| ()), Some(Rc::new(store)));

        let fetched = controller.get_bills().await.unwrap().unwrap();

        assert_eq!(fetched.rows.len(), 3);
        assert_eq!(fetched.rows[1].date, "not-a-date");
        assert_eq!(fetched.rows[1].status, "Accepté");
        assert_eq!(fetched.failures.len(), 1);
        assert_eq!(fetched.failures[0].bill.id.as_deref(), Some("corrupted"));
        assert_eq!(fetched.failures[0].error.value, "not-a-date");
    }

    #[tokio::test]
    async fn test_get_bills_with_empty_list() {
        let controller = Bills::new(Callback::from(|_: String| ()), Some(Rc::new(MockStore::with_bills(vec![]))));

        let fetched = controller.get_bills().await.unwrap().unwrap();
        assert!(fetched.rows.is_empty());
        assert!(fetched.failures.is_empty());
    }

    #[tokio::test]
    async fn test_get_bills_reports_store_failure() {
        let store = MockStore::default();
        *store.bills.list_result.borrow_mut() = Some(Err(StoreError::Server {
            status: 404,
            message: "Not Found".to_string(),
        }));
        let controller = Bills::new(Callback::from(|_: String| ()), Some(Rc::new(store)));

        let result = controller.get_bills().await.unwrap();
        assert!(matches!(result, Err(StoreError::Server { status: 404, .. })));
    }

    #[test]
    fn test_click_new_bill_navigates_to_form() {
        let (on_navigate, paths) = recording_navigation();
        let controller = Bills::new(on_navigate, None);

        controller.handle_click_new_bill();

        assert_eq!(*paths.borrow(), vec!["#employee/bill/new".to_string()]);
    }

    #[test]
    fn test_icon_eye_shows_receipt() {
        let controller = Bills::new(Callback::from(|_: String| ()), None);

        let preview =
            controller.handle_click_icon_eye(Some("https://test.storage.tld/receipt.jpg"), 801.0);

        assert_eq!(preview.src, "https://test.storage.tld/receipt.jpg");
        assert_eq!(preview.alt, "Bill");
        assert_eq!(preview.width, 400);
        assert!(!preview.placeholder);
    }

    #[test]
    fn test_icon_eye_without_document_shows_placeholder() {
        let controller = Bills::new(Callback::from(|_: String| ()), None);

        for url in [None, Some(""), Some("null"), Some("undefined")] {
            let preview = controller.handle_click_icon_eye(url, 600.0);
            assert!(preview.placeholder);
            assert_eq!(preview.src, NO_RECEIPT_IMAGE);
            assert_eq!(preview.width, 300);
        }
    }

    #[test]
    fn test_placeholder_image_is_inline() {
        assert!(NO_RECEIPT_IMAGE.starts_with("data:image/svg+xml,"));
        assert!(!NO_RECEIPT_IMAGE.contains('#'));
        assert!(!NO_RECEIPT_IMAGE.contains('<'));
    }

    #[test]
    fn test_extract_file_extension_is_reexported() {
        assert_eq!(extract_file_extension("example.png"), "png");
    }
}
