//! Row actions
//!
//! Detail view, status changes, engineer assignment, create/edit forms and
//! deletes. Every write is followed by a refetch of the affected list.

use rackdesk::api::{RackSlotDraft, UserDraft};
use rackdesk::logic::errors::failure_toast;
use rackdesk::logic::forms::{FormField, FormState};
use rackdesk::logic::pages::PageKind;
use rackdesk::model::pages::detail_lines;
use rackdesk::model::{
    ConfirmDeleteState, ListView, DetailState, FormModal, FormPurpose, Modal, StatusPickerState,
};

use crate::services::api::{ApiRequest, DetailRecord, Mutation};
use crate::App;

impl App {
    fn selected_target(&self) -> Option<(PageKind, String)> {
        let kind = self.model.current_page_kind()?;
        let id = self.model.pages.page(kind).selected_id()?;
        Some((kind, id))
    }

    /// Open the detail modal for the highlighted row
    ///
    /// The row already on screen is shown straight away; pages with a
    /// find-by-id endpoint then replace it with a fresh copy.
    pub fn open_detail(&mut self) {
        let Some((kind, id)) = self.selected_target() else {
            return;
        };
        let lines = self.model.pages.page(kind).selected_detail().unwrap_or_default();
        let loading = kind.has_detail_endpoint();

        self.model.ui.modal = Some(Modal::Detail(DetailState {
            kind,
            id: id.clone(),
            title: format!("{} {}", kind.singular(), id),
            lines,
            loading,
            scroll: 0,
        }));

        if loading {
            self.send(ApiRequest::FetchDetail { kind, id });
        }
    }

    pub fn finish_detail(&mut self, kind: PageKind, id: &str, result: anyhow::Result<DetailRecord>) {
        let Some(Modal::Detail(detail)) = self.model.ui.modal.as_mut() else {
            return;
        };
        if detail.kind != kind || detail.id != id {
            return;
        }
        detail.loading = false;

        match result {
            Ok(record) => {
                detail.lines = match &record {
                    DetailRecord::User(user) => detail_lines(kind, user),
                    DetailRecord::Repair(order) => detail_lines(kind, order),
                    DetailRecord::Ticket(ticket) => detail_lines(kind, ticket),
                };
            }
            Err(e) => {
                let action = format!("Failed to fetch {}", kind.singular().to_lowercase());
                self.model.show_toast(failure_toast(&action, &e));
            }
        }
    }

    pub fn open_status_picker(&mut self) {
        let Some((kind, id)) = self.selected_target() else {
            return;
        };
        let Some(options) = kind.status_options() else {
            return;
        };
        let current = self.model.pages.page(kind).selected_field("status");
        let selected = current
            .and_then(|status| options.iter().position(|o| *o == status))
            .unwrap_or(0);

        self.model.ui.modal = Some(Modal::StatusPicker(StatusPickerState {
            kind,
            id,
            options,
            selected,
        }));
    }

    pub fn confirm_status(&mut self) {
        let Some(Modal::StatusPicker(picker)) = self.model.ui.modal.take() else {
            return;
        };
        let Some(status) = picker.current() else {
            return;
        };

        tracing::info!(page = picker.kind.noun(), id = %picker.id, status, "updating status");
        self.send(ApiRequest::UpdateStatus {
            kind: picker.kind,
            id: picker.id,
            status: status.to_string(),
        });
    }

    pub fn open_assign_engineer(&mut self) {
        let Some((kind, id)) = self.selected_target() else {
            return;
        };
        if kind != PageKind::Repairs {
            return;
        }
        let current = self.model.pages.repairs.selected_field("engineer").unwrap_or_default();

        let form = FormState::new(
            "Assign Engineer",
            vec![FormField::new("engineer", "Engineer").required().with_value(current)],
        );
        self.model.ui.modal = Some(Modal::Form(FormModal {
            purpose: FormPurpose::AssignEngineer { id },
            form,
        }));
    }

    pub fn open_create_form(&mut self) {
        let Some(kind) = self.model.current_page_kind() else {
            return;
        };

        let (purpose, form) = match kind {
            PageKind::Users => (
                FormPurpose::CreateUser,
                FormState::new(
                    "New User",
                    vec![
                        FormField::new("name", "Name").required(),
                        FormField::new("email", "Email").required(),
                        FormField::new("phone", "Phone"),
                        FormField::new("password", "Password").required().secret(),
                        FormField::new("role", "Role").with_value("customer"),
                    ],
                ),
            ),
            PageKind::Racks => (
                FormPurpose::CreateRackSlot,
                FormState::new(
                    "New Rack Slot",
                    vec![
                        FormField::new("rack", "Rack").required(),
                        FormField::new("slot", "Slot").required(),
                        FormField::new("status", "Status").with_value("Available"),
                    ],
                ),
            ),
            PageKind::Repairs | PageKind::Tickets => return,
        };

        self.model.ui.modal = Some(Modal::Form(FormModal { purpose, form }));
    }

    pub fn open_edit_form(&mut self) {
        let Some((kind, id)) = self.selected_target() else {
            return;
        };
        if kind != PageKind::Users {
            return;
        }
        let page = &self.model.pages.users;
        let value = |field: &str| page.selected_field(field).unwrap_or_default();

        let form = FormState::new(
            "Edit User",
            vec![
                FormField::new("name", "Name").required().with_value(value("name")),
                FormField::new("email", "Email").required().with_value(value("email")),
                FormField::new("phone", "Phone").with_value(value("phone")),
                FormField::new("role", "Role").with_value(value("role")),
            ],
        );
        self.model.ui.modal = Some(Modal::Form(FormModal {
            purpose: FormPurpose::EditUser { id },
            form,
        }));
    }

    pub fn open_delete_confirm(&mut self) {
        let Some((kind, id)) = self.selected_target() else {
            return;
        };
        if !kind.supports_delete() {
            return;
        }

        let label = match kind {
            PageKind::Racks => self.model.pages.racks.selected_record().map(|r| r.location()),
            _ => self.model.pages.page(kind).selected_field("name"),
        }
        .unwrap_or_else(|| id.clone());

        self.model.ui.modal = Some(Modal::ConfirmDelete(ConfirmDeleteState { kind, id, label }));
    }

    pub fn confirm_delete(&mut self) {
        let Some(Modal::ConfirmDelete(confirm)) = self.model.ui.modal.take() else {
            return;
        };

        tracing::info!(page = confirm.kind.noun(), id = %confirm.id, "deleting");
        let request = match confirm.kind {
            PageKind::Users => ApiRequest::DeleteUser { id: confirm.id },
            PageKind::Racks => ApiRequest::DeleteRackSlot { id: confirm.id },
            PageKind::Repairs | PageKind::Tickets => return,
        };
        self.send(request);
    }

    /// Validate the open form and send it; invalid forms stay open
    pub fn submit_form(&mut self) {
        let Some(Modal::Form(modal)) = self.model.ui.modal.as_mut() else {
            return;
        };
        if modal.form.submitting || modal.form.validate().is_err() {
            return;
        }

        let form = &modal.form;
        let request = match &modal.purpose {
            FormPurpose::CreateUser => ApiRequest::CreateUser(UserDraft {
                name: form.value("name"),
                email: form.value("email"),
                phone: form.value("phone"),
                password: form.value("password"),
                role: form.value("role"),
            }),
            FormPurpose::EditUser { id } => ApiRequest::UpdateUser {
                id: id.clone(),
                draft: UserDraft {
                    name: form.value("name"),
                    email: form.value("email"),
                    phone: form.value_or_empty("phone"),
                    password: None,
                    role: form.value_or_empty("role"),
                },
            },
            FormPurpose::CreateRackSlot => ApiRequest::CreateRackSlot(RackSlotDraft {
                rack: form.value("rack").unwrap_or_default(),
                slot: form.value("slot").unwrap_or_default(),
                status: form.value("status"),
            }),
            FormPurpose::AssignEngineer { id } => ApiRequest::AssignEngineer {
                id: id.clone(),
                engineer: form.value("engineer").unwrap_or_default(),
            },
        };

        modal.form.submitting = true;
        self.send(request);
    }

    /// Report a finished write and refetch the list it touched
    pub fn finish_mutation(&mut self, kind: PageKind, mutation: Mutation, result: anyhow::Result<()>) {
        match result {
            Ok(()) => {
                tracing::info!(page = kind.noun(), action = mutation.verb(), "write succeeded");
                let form_done = matches!(
                    &self.model.ui.modal,
                    Some(Modal::Form(modal)) if modal.purpose.kind() == kind
                );
                if form_done {
                    self.model.ui.modal = None;
                }
                self.model
                    .show_toast(format!("{} {}", kind.singular(), mutation.past_tense()));
                self.fetch_page(kind);
            }
            Err(e) => {
                tracing::warn!(page = kind.noun(), action = mutation.verb(), error = %e, "write failed");
                if let Some(Modal::Form(modal)) = self.model.ui.modal.as_mut() {
                    modal.form.submitting = false;
                }
                let action = format!(
                    "Failed to {} {}",
                    mutation.verb(),
                    kind.singular().to_lowercase()
                );
                self.model.show_toast(failure_toast(&action, &e));
            }
        }
    }
}
