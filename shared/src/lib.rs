use serde::{Deserialize, Serialize};
use std::fmt;

pub mod format;

pub use format::{
    extract_file_extension, format_date, format_status, is_allowed_receipt, parse_int,
    sort_anti_chrono, DateFormatError, ALLOWED_RECEIPT_EXTENSIONS,
};

/// Percentage applied when the form value is missing or does not parse
pub const DEFAULT_PCT: i64 = 20;

/// Local storage key holding the serialized session user
pub const SESSION_USER_KEY: &str = "user";

/// Local storage key holding the API token
pub const SESSION_JWT_KEY: &str = "jwt";

/// Expense categories offered by the new bill form, in display order
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// An expense report submitted by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Server-assigned identifier, absent until the bill is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    /// Expense category, one of [`EXPENSE_TYPES`] when created from the form
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// Amount in whole currency units. `None` when the form value was not a number.
    pub amount: Option<i64>,
    /// ISO-like date string (`YYYY-MM-DD`)
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    /// Note written by an administrator when processing the bill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// Processing state of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Identity stored in local storage after login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl SessionUser {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }
}

/// Returned by the store after a receipt upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReceipt {
    pub file_url: String,
    /// Storage key of the bill record created alongside the upload
    pub key: String,
}

/// Client-side routes, addressed by their hash path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// Resolve a path or location hash. Anything unknown lands on the login page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_start_matches('/') {
            "#employee/bills" => Route::Bills,
            "#employee/bill/new" => Route::NewBill,
            _ => Route::Login,
        }
    }
}
