mod form;
mod list;
mod modal;

pub use form::FormPageState;
pub use list::ListPageState;
pub use modal::{Modal, ModalState};
