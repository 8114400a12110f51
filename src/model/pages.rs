//! List Page Model
//!
//! Fetched collections for each list page, with the client-side filter
//! state and the table selection. Selection indexes into the *visible*
//! (filtered) rows, never into the raw records.

use std::collections::BTreeMap;

use crate::api::{RackSlot, RepairOrder, SupportTicket, User, UserPage};
use crate::logic::filter::{FilterState, Filterable};
use crate::logic::formatting::NOT_AVAILABLE;
use crate::logic::navigation::{clamp_selection, next_selection, prev_selection};
use crate::logic::pages::{format_cell, PageKind};

/// A row type that can be listed, filtered and addressed by id
pub trait Record: Filterable + Clone {
    fn record_id(&self) -> Option<&str>;
}

impl Record for User {
    fn record_id(&self) -> Option<&str> {
        User::record_id(self)
    }
}

impl Record for RepairOrder {
    fn record_id(&self) -> Option<&str> {
        RepairOrder::record_id(self)
    }
}

impl Record for RackSlot {
    fn record_id(&self) -> Option<&str> {
        RackSlot::record_id(self)
    }
}

impl Record for SupportTicket {
    fn record_id(&self) -> Option<&str> {
        SupportTicket::record_id(self)
    }
}

#[derive(Clone, Debug)]
pub struct ListPage<T> {
    pub kind: PageKind,
    pub records: Vec<T>,
    pub loading: bool,
    /// Message from the last failed fetch
    pub error: Option<String>,
    pub selected: Option<usize>,
    pub filter: FilterState,
    /// At least one fetch has completed
    pub loaded: bool,
}

impl<T: Record> ListPage<T> {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            loading: false,
            error: None,
            selected: None,
            filter: FilterState::new(),
            loaded: false,
        }
    }

    pub fn visible(&self) -> Vec<T> {
        self.filter.apply(&self.records, self.kind.search_fields())
    }

    pub fn selected_record(&self) -> Option<T> {
        let visible = self.visible();
        self.selected.and_then(|idx| visible.get(idx).cloned())
    }

    /// Replace the rows after a successful fetch
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.loading = false;
        self.loaded = true;
        self.error = None;
        self.refresh_selection();
    }
}

/// Page-kind-agnostic access used by the table, dashboard and handlers
pub trait ListView {
    fn kind(&self) -> PageKind;
    fn is_loading(&self) -> bool;
    /// At least one fetch has completed, successfully or not
    fn is_loaded(&self) -> bool;
    fn set_loading(&mut self, loading: bool);
    fn error(&self) -> Option<&str>;
    /// Record a failed fetch; rows from an earlier fetch stay visible
    fn set_error(&mut self, message: String);
    fn filter(&self) -> &FilterState;
    fn filter_mut(&mut self) -> &mut FilterState;
    fn selected(&self) -> Option<usize>;
    fn record_count(&self) -> usize;
    fn visible_count(&self) -> usize;
    /// Formatted cells for every visible row, in column order
    fn rows(&self) -> Vec<Vec<String>>;
    fn selected_id(&self) -> Option<String>;
    fn selected_field(&self, field: &str) -> Option<String>;
    /// Label/value pairs for the detail modal
    fn selected_detail(&self) -> Option<Vec<(String, String)>>;
    /// Row count per value of `field` across all records (unfiltered)
    fn counts_by(&self, field: &str) -> BTreeMap<String, usize>;
    fn select_next(&mut self);
    fn select_prev(&mut self);
    fn select_first(&mut self);
    fn select_last(&mut self);
    /// Keep the selection inside the visible rows after a filter change
    fn refresh_selection(&mut self);
}

impl<T: Record> ListView for ListPage<T> {
    fn kind(&self) -> PageKind {
        self.kind
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, message: String) {
        self.loading = false;
        self.loaded = true;
        self.error = Some(message);
    }

    fn filter(&self) -> &FilterState {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn visible_count(&self) -> usize {
        self.visible().len()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let columns = self.kind.columns();
        self.visible()
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|col| format_cell(col.field, record.field(col.field)))
                    .collect()
            })
            .collect()
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_record()
            .and_then(|r| r.record_id().map(str::to_string))
    }

    fn selected_field(&self, field: &str) -> Option<String> {
        self.selected_record().and_then(|r| r.field(field))
    }

    fn selected_detail(&self) -> Option<Vec<(String, String)>> {
        self.selected_record().map(|r| detail_lines(self.kind, &r))
    }

    fn counts_by(&self, field: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            let key = record
                .field(field)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    fn select_next(&mut self) {
        self.selected = next_selection(self.selected, self.visible_count());
    }

    fn select_prev(&mut self) {
        self.selected = prev_selection(self.selected, self.visible_count());
    }

    fn select_first(&mut self) {
        self.selected = if self.visible_count() > 0 { Some(0) } else { None };
    }

    fn select_last(&mut self) {
        self.selected = self.visible_count().checked_sub(1);
    }

    fn refresh_selection(&mut self) {
        self.selected = clamp_selection(self.selected, self.visible_count());
    }
}

/// Format a record's detail fields for display
pub fn detail_lines<T: Filterable + ?Sized>(kind: PageKind, record: &T) -> Vec<(String, String)> {
    kind.detail_fields()
        .iter()
        .map(|(label, field)| (label.to_string(), format_cell(field, record.field(field))))
        .collect()
}

/// Server-side paging and role filter for the users list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    /// 1-based
    pub page: u32,
    pub limit: u32,
    pub role: String,
    /// Reported by the server, if it reports one
    pub total: Option<u64>,
}

impl UserQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            role: crate::logic::filter::ALL.to_string(),
            total: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PagesModel {
    pub users: ListPage<User>,
    pub user_query: UserQuery,
    pub repairs: ListPage<RepairOrder>,
    pub racks: ListPage<RackSlot>,
    pub tickets: ListPage<SupportTicket>,
}

impl PagesModel {
    pub fn new(page_limit: u32) -> Self {
        Self {
            users: ListPage::new(PageKind::Users),
            user_query: UserQuery::new(page_limit),
            repairs: ListPage::new(PageKind::Repairs),
            racks: ListPage::new(PageKind::Racks),
            tickets: ListPage::new(PageKind::Tickets),
        }
    }

    pub fn page(&self, kind: PageKind) -> &dyn ListView {
        match kind {
            PageKind::Users => &self.users,
            PageKind::Repairs => &self.repairs,
            PageKind::Racks => &self.racks,
            PageKind::Tickets => &self.tickets,
        }
    }

    /// Show a fetched users page
    ///
    /// Responses can arrive out of order; the page number follows the rows
    /// actually shown so the status bar never labels them with another page.
    pub fn apply_users_page(&mut self, page: u32, result: UserPage) {
        self.user_query.page = page;
        self.user_query.total = result.total;
        self.users.set_records(result.users);
    }

    pub fn page_mut(&mut self, kind: PageKind) -> &mut dyn ListView {
        match kind {
            PageKind::Users => &mut self.users,
            PageKind::Repairs => &mut self.repairs,
            PageKind::Racks => &mut self.racks,
            PageKind::Tickets => &mut self.tickets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, status: &str) -> User {
        User {
            object_id: Some(id.to_string()),
            name: Some(name.to_string()),
            status: Some(status.to_string()),
            ..User::default()
        }
    }

    fn users_page() -> ListPage<User> {
        let mut page = ListPage::new(PageKind::Users);
        page.set_records(vec![
            user("u1", "Ravi", "Active"),
            user("u2", "Sunil", "Inactive"),
            user("u3", "Ravindra", "Active"),
        ]);
        page
    }

    #[test]
    fn test_set_records_selects_first_row() {
        let page = users_page();
        assert_eq!(page.selected, Some(0));
        assert!(page.loaded);
        assert!(!page.loading);
    }

    #[test]
    fn test_selection_follows_visible_rows() {
        let mut page = users_page();
        page.filter.query = "sunil".to_string();
        page.refresh_selection();

        assert_eq!(page.visible_count(), 1);
        assert_eq!(page.selected_id().as_deref(), Some("u2"));
    }

    #[test]
    fn test_selection_cleared_when_nothing_matches() {
        let mut page = users_page();
        page.filter.query = "nobody".to_string();
        page.refresh_selection();
        assert_eq!(page.selected, None);
        assert_eq!(page.selected_id(), None);
    }

    #[test]
    fn test_error_keeps_stale_rows() {
        let mut page = users_page();
        page.loading = true;
        page.set_error("HTTP 500 Internal Server Error".to_string());

        assert_eq!(page.record_count(), 3);
        assert!(!page.loading);
        assert!(page.error().is_some());
    }

    #[test]
    fn test_rows_follow_columns() {
        let page = users_page();
        let rows = page.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), PageKind::Users.columns().len());
        assert_eq!(rows[0][0], "Ravi");
        // no wallet on record
        assert_eq!(rows[0][5], "₹0.00");
    }

    #[test]
    fn test_counts_by_status() {
        let page = users_page();
        let counts = page.counts_by("status");
        assert_eq!(counts.get("Active"), Some(&2));
        assert_eq!(counts.get("Inactive"), Some(&1));
    }

    #[test]
    fn test_select_wraps() {
        let mut page = users_page();
        page.select_prev();
        assert_eq!(page.selected, Some(2));
        page.select_next();
        assert_eq!(page.selected, Some(0));
        page.select_last();
        assert_eq!(page.selected, Some(2));
    }

    #[test]
    fn test_page_dispatch() {
        let mut pages = PagesModel::new(10);
        pages.page_mut(PageKind::Racks).set_loading(true);
        assert!(pages.racks.loading);
        assert_eq!(pages.page(PageKind::Tickets).kind(), PageKind::Tickets);
    }

    #[test]
    fn test_late_users_page_updates_page_number() {
        let mut pages = PagesModel::new(10);
        pages.user_query.page = 3;

        pages.apply_users_page(
            2,
            UserPage {
                users: vec![user("u11", "Meena", "Active")],
                total: Some(25),
            },
        );

        assert_eq!(pages.user_query.page, 2);
        assert_eq!(pages.user_query.total, Some(25));
        assert_eq!(pages.users.records.len(), 1);
    }
}
