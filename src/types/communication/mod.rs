mod channel;

pub use channel::{Channel, Sender, Receiver};
