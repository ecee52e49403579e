pub mod channels;
pub mod control;
pub mod notification;

pub use channels::{create_control_channel, create_notification_channel};
pub use control::Control;
pub use notification::Notification;
