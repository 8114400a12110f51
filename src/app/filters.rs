//! Search and exact-filter input
//!
//! Both filters run in memory over the rows already fetched; every
//! keystroke re-filters immediately and the selection is kept inside the
//! visible rows.

use rackdesk::logic::pages::cycle_option;

use crate::App;

impl App {
    pub fn start_search(&mut self) {
        if self.model.current_page_kind().is_some() {
            self.model.ui.search_mode = true;
        }
    }

    /// Enter keeps the query and leaves the input
    pub fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
    }

    /// Esc while typing clears the query
    pub fn cancel_search(&mut self) {
        self.model.ui.search_mode = false;
        self.edit_query(|query| query.clear());
    }

    pub fn push_search_char(&mut self, c: char) {
        self.edit_query(|query| query.push(c));
    }

    pub fn pop_search_char(&mut self) {
        self.edit_query(|query| {
            query.pop();
        });
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(page) = self.model.current_page_mut() {
            edit(&mut page.filter_mut().query);
            page.refresh_selection();
        }
    }

    /// Advance the `index`-th exact filter of the current page
    pub fn cycle_exact_filter(&mut self, index: usize) {
        let Some(kind) = self.model.current_page_kind() else {
            return;
        };
        let specs = kind.filters();
        let Some(spec) = specs.get(index).or_else(|| specs.first()) else {
            return;
        };

        let page = self.model.pages.page_mut(kind);
        let next = cycle_option(spec.options, page.filter().exact_value(spec.field));
        page.filter_mut().set_exact(spec.field, next);
        page.refresh_selection();

        tracing::debug!(page = kind.noun(), field = spec.field, value = next, "exact filter changed");
    }

    pub fn clear_filters(&mut self) {
        if let Some(page) = self.model.current_page_mut() {
            page.filter_mut().clear();
            page.refresh_selection();
        }
    }
}
