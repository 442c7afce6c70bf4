pub mod responder;
pub mod session;
pub mod transcript;

pub use responder::{classify, respond, Topic};
pub use session::{Session, SessionStore};
pub use transcript::{Message, Role, Transcript, GREETING};
