//! Shared types for the Model
//!
//! Modal dialogs and the pieces of state they carry.

use crate::logic::forms::FormState;
use crate::logic::pages::PageKind;

/// What a submitted form does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPurpose {
    CreateUser,
    EditUser { id: String },
    CreateRackSlot,
    AssignEngineer { id: String },
}

impl FormPurpose {
    pub fn kind(&self) -> PageKind {
        match self {
            FormPurpose::CreateUser | FormPurpose::EditUser { .. } => PageKind::Users,
            FormPurpose::CreateRackSlot => PageKind::Racks,
            FormPurpose::AssignEngineer { .. } => PageKind::Repairs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormModal {
    pub purpose: FormPurpose,
    pub form: FormState,
}

/// Read-only view of one record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailState {
    pub kind: PageKind,
    pub id: String,
    pub title: String,
    /// (label, formatted value)
    pub lines: Vec<(String, String)>,
    /// A fresh copy has been requested and not yet arrived
    pub loading: bool,
    pub scroll: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusPickerState {
    pub kind: PageKind,
    pub id: String,
    pub options: &'static [&'static str],
    pub selected: usize,
}

impl StatusPickerState {
    pub fn current(&self) -> Option<&'static str> {
        self.options.get(self.selected).copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDeleteState {
    pub kind: PageKind,
    pub id: String,
    pub label: String,
}

/// At most one modal is open at a time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    Detail(DetailState),
    StatusPicker(StatusPickerState),
    ConfirmDelete(ConfirmDeleteState),
    Form(FormModal),
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG,
}
