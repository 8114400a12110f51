//! List page definitions
//!
//! Each list page is a fetched collection plus a table. This module holds
//! the static parts: which fields free-text search looks at, which exact
//! filters can be cycled, which columns the table shows, and which statuses
//! the status picker offers.

use crate::logic::filter::ALL;
use crate::logic::formatting::{format_currency, format_date, format_tat, or_na};
use crate::logic::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Users,
    Repairs,
    Racks,
    Tickets,
}

/// An exact filter the user can cycle through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: &'static str,
    pub label: &'static str,
    /// First entry is always `All`
    pub options: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    /// Share of the table width, in percent
    pub width: u16,
}

const fn col(header: &'static str, field: &'static str, width: u16) -> Column {
    Column { header, field, width }
}

pub const USER_ROLES: &[&str] = &[ALL, "customer", "engineer", "admin"];

const USER_FILTERS: &[FilterSpec] = &[
    FilterSpec {
        field: "status",
        label: "Status",
        options: &[ALL, "Active", "Inactive", "Blocked"],
    },
    FilterSpec {
        field: "kyc.status",
        label: "KYC",
        options: &[ALL, "Pending", "Verified", "Rejected"],
    },
];

const REPAIR_STATUSES: &[&str] = &[
    "Pending",
    "Received",
    "Diagnosed",
    "In Progress",
    "QC",
    "Completed",
    "Delivered",
    "Cancelled",
];

const REPAIR_FILTERS: &[FilterSpec] = &[FilterSpec {
    field: "status",
    label: "Status",
    options: &[
        ALL,
        "Pending",
        "Received",
        "Diagnosed",
        "In Progress",
        "QC",
        "Completed",
        "Delivered",
        "Cancelled",
    ],
}];

const RACK_FILTERS: &[FilterSpec] = &[FilterSpec {
    field: "status",
    label: "Status",
    options: &[ALL, "Occupied", "Available", "Reserved"],
}];

const TICKET_STATUSES: &[&str] = &["Open", "In Progress", "Resolved", "Closed"];

const TICKET_FILTERS: &[FilterSpec] = &[
    FilterSpec {
        field: "status",
        label: "Status",
        options: &[ALL, "Open", "In Progress", "Resolved", "Closed"],
    },
    FilterSpec {
        field: "priority",
        label: "Priority",
        options: &[ALL, "Low", "Medium", "High"],
    },
];

const USER_COLUMNS: &[Column] = &[
    col("Name", "name", 20),
    col("Email", "email", 24),
    col("Phone", "phone", 14),
    col("Status", "status", 10),
    col("KYC", "kyc.status", 10),
    col("Wallet", "wallet.balance", 12),
    col("Joined", "createdAt", 10),
];

const REPAIR_COLUMNS: &[Column] = &[
    col("Order", "orderId", 12),
    col("Device", "device", 18),
    col("Customer", "customer", 16),
    col("Status", "status", 12),
    col("Engineer", "engineer", 14),
    col("Rack/Slot", "rackSlot", 10),
    col("TAT", "tat", 8),
    col("Created", "createdAt", 10),
];

const RACK_COLUMNS: &[Column] = &[
    col("Rack", "rack", 10),
    col("Slot", "slot", 10),
    col("Status", "status", 14),
    col("Device", "deviceId", 22),
    col("Customer", "customer", 22),
    col("Engineer", "engineer", 22),
];

const TICKET_COLUMNS: &[Column] = &[
    col("Ticket", "ticketId", 12),
    col("Subject", "subject", 34),
    col("Customer", "customer", 18),
    col("Priority", "priority", 10),
    col("Status", "status", 12),
    col("Opened", "createdAt", 14),
];

/// Label/field pairs shown in the detail modal
const USER_DETAIL: &[(&str, &str)] = &[
    ("ID", "id"),
    ("Name", "name"),
    ("Email", "email"),
    ("Phone", "phone"),
    ("Role", "role"),
    ("Status", "status"),
    ("KYC", "kyc.status"),
    ("Wallet", "wallet.balance"),
    ("Joined", "createdAt"),
];

const REPAIR_DETAIL: &[(&str, &str)] = &[
    ("ID", "id"),
    ("Order", "orderId"),
    ("Device", "device"),
    ("Issue", "issue"),
    ("Customer", "customer"),
    ("Status", "status"),
    ("Engineer", "engineer"),
    ("Rack/Slot", "rackSlot"),
    ("TAT", "tat"),
    ("Created", "createdAt"),
];

const RACK_DETAIL: &[(&str, &str)] = &[
    ("ID", "id"),
    ("Rack", "rack"),
    ("Slot", "slot"),
    ("Status", "status"),
    ("Device", "deviceId"),
    ("Customer", "customer"),
    ("Engineer", "engineer"),
];

const TICKET_DETAIL: &[(&str, &str)] = &[
    ("ID", "id"),
    ("Ticket", "ticketId"),
    ("Subject", "subject"),
    ("Customer", "customer"),
    ("Priority", "priority"),
    ("Status", "status"),
    ("Description", "description"),
    ("Opened", "createdAt"),
];

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Users,
        PageKind::Repairs,
        PageKind::Racks,
        PageKind::Tickets,
    ];

    pub fn route(&self) -> Route {
        match self {
            PageKind::Users => Route::Users,
            PageKind::Repairs => Route::Repairs,
            PageKind::Racks => Route::RackAbc,
            PageKind::Tickets => Route::SupportTickets,
        }
    }

    pub fn from_route(route: Route) -> Option<PageKind> {
        PageKind::ALL.into_iter().find(|kind| kind.route() == route)
    }

    /// Plural noun for messages ("Failed to fetch users")
    pub fn noun(&self) -> &'static str {
        match self {
            PageKind::Users => "users",
            PageKind::Repairs => "repair orders",
            PageKind::Racks => "rack slots",
            PageKind::Tickets => "support tickets",
        }
    }

    pub fn search_fields(&self) -> &'static [&'static str] {
        match self {
            PageKind::Users => &["name", "email", "phone"],
            PageKind::Repairs => &["orderId", "device", "customer", "engineer", "rackSlot"],
            PageKind::Racks => &["rack", "slot", "deviceId", "customer", "engineer"],
            PageKind::Tickets => &["ticketId", "subject", "customer"],
        }
    }

    pub fn filters(&self) -> &'static [FilterSpec] {
        match self {
            PageKind::Users => USER_FILTERS,
            PageKind::Repairs => REPAIR_FILTERS,
            PageKind::Racks => RACK_FILTERS,
            PageKind::Tickets => TICKET_FILTERS,
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            PageKind::Users => USER_COLUMNS,
            PageKind::Repairs => REPAIR_COLUMNS,
            PageKind::Racks => RACK_COLUMNS,
            PageKind::Tickets => TICKET_COLUMNS,
        }
    }

    /// Statuses offered by the status picker, if the page supports updates
    pub fn status_options(&self) -> Option<&'static [&'static str]> {
        match self {
            PageKind::Repairs => Some(REPAIR_STATUSES),
            PageKind::Tickets => Some(TICKET_STATUSES),
            PageKind::Users | PageKind::Racks => None,
        }
    }

    pub fn detail_fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            PageKind::Users => USER_DETAIL,
            PageKind::Repairs => REPAIR_DETAIL,
            PageKind::Racks => RACK_DETAIL,
            PageKind::Tickets => TICKET_DETAIL,
        }
    }

    /// Singular noun for toasts ("Repair order updated")
    pub fn singular(&self) -> &'static str {
        match self {
            PageKind::Users => "User",
            PageKind::Repairs => "Repair order",
            PageKind::Racks => "Rack slot",
            PageKind::Tickets => "Support ticket",
        }
    }

    pub fn supports_create(&self) -> bool {
        matches!(self, PageKind::Users | PageKind::Racks)
    }

    pub fn supports_delete(&self) -> bool {
        matches!(self, PageKind::Users | PageKind::Racks)
    }

    /// Whether the detail modal fetches a fresh copy by id
    pub fn has_detail_endpoint(&self) -> bool {
        !matches!(self, PageKind::Racks)
    }
}

/// Render one table cell, resolving missing values to `N/A`
pub fn format_cell(field: &str, raw: Option<String>) -> String {
    match field {
        "wallet.balance" => format_currency(raw.and_then(|v| v.parse().ok()).unwrap_or(0.0)),
        "createdAt" => format_date(raw.as_deref()),
        "tat" => format_tat(raw.as_deref()),
        _ => or_na(raw.as_deref()).to_string(),
    }
}

/// Next option after `current`, wrapping back to `All`
///
/// # Examples
/// ```
/// use rackdesk::logic::pages::cycle_option;
///
/// let options = &["All", "Open", "Closed"];
/// assert_eq!(cycle_option(options, "All"), "Open");
/// assert_eq!(cycle_option(options, "Closed"), "All");
/// assert_eq!(cycle_option(options, "bogus"), "All");
/// ```
pub fn cycle_option(options: &[&'static str], current: &str) -> &'static str {
    match options.iter().position(|o| *o == current) {
        Some(i) => options[(i + 1) % options.len()],
        None => options.first().copied().unwrap_or(ALL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_roundtrip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_route(kind.route()), Some(kind));
        }
        assert_eq!(PageKind::from_route(Route::Dashboard), None);
    }

    #[test]
    fn test_filter_options_start_with_all() {
        for kind in PageKind::ALL {
            for spec in kind.filters() {
                assert_eq!(spec.options.first(), Some(&ALL), "{:?} {}", kind, spec.field);
            }
        }
    }

    #[test]
    fn test_column_widths_fill_table() {
        for kind in PageKind::ALL {
            let total: u16 = kind.columns().iter().map(|c| c.width).sum();
            assert_eq!(total, 100, "{:?}", kind);
        }
    }

    #[test]
    fn test_detail_fields_lead_with_id() {
        for kind in PageKind::ALL {
            assert_eq!(kind.detail_fields()[0], ("ID", "id"));
        }
    }

    #[test]
    fn test_format_cell_defaults() {
        assert_eq!(format_cell("wallet.balance", None), "₹0.00");
        assert_eq!(format_cell("engineer", None), "N/A");
        assert_eq!(format_cell("tat", Some("24".to_string())), "24h");
    }

    #[test]
    fn test_cycle_option_wraps() {
        let options = PageKind::Tickets.filters()[1].options;
        assert_eq!(cycle_option(options, "High"), "All");
    }
}
