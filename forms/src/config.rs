// Client configuration and signed-in session, passed down explicitly to whatever
// talks to the backend instead of living in process-wide state.
pub mod session;
pub mod settings;

pub use session::{ApiContext, MemorySessionStore, Session, SessionStore};
pub use settings::ClientConfig;
