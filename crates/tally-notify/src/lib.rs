pub mod error;
pub mod payload;
pub mod sink;

pub mod mock;

pub use error::DeliveryError;
pub use mock::MockSink;
pub use payload::{Block, ChatPayload, TextObject};
pub use sink::{NotificationSink, SlackConfig, SlackSink};
