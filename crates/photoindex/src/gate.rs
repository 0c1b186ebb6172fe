//! # Confirmation Gate
//!
//! Destructive actions go through a human first. The gate only answers
//! confirm or cancel; presenting the question is up to the UI. The index
//! itself never asks, and must never be called on the cancel path.

/// Fixed copy for the delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub header: &'static str,
    pub message: &'static str,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

impl Confirmation {
    pub const DELETE_PHOTO: Confirmation = Confirmation {
        header: "Delete photo",
        message: "Are you sure you want to delete this photo?",
        cancel_label: "Cancel",
        confirm_label: "Delete",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

pub trait ConfirmationGate {
    fn confirm(&mut self, request: &Confirmation) -> Decision;
}

/// Gate that answers every request the same way. Used for `--yes` and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(pub Decision);

impl ConfirmationGate for FixedGate {
    fn confirm(&mut self, _request: &Confirmation) -> Decision {
        self.0
    }
}
