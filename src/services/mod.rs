pub mod gate;
pub mod poller;
pub mod status;
pub mod validator;

pub use gate::NotificationGate;
pub use poller::{CycleReport, Delivery, StatusPoller};
pub use status::{NOT_TAKEN_MESSAGE, interpret, malfunction_message, render_status};
pub use validator::validate;
