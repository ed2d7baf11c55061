pub mod icon;
pub mod modal;
pub mod spinner;

pub use icon::{Icon, icons};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{InlineSpinner, LoadingButton, LoadingSpinner};
