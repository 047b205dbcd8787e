pub mod engine;
pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

pub use engine::{QuizPhase, QuizSession};

/// In-memory session store. Sessions live for the process lifetime; there
/// is no persistence or expiry.
pub type SessionMap = Arc<RwLock<HashMap<Uuid, QuizSession>>>;

pub fn new_session_map() -> SessionMap {
    Arc::new(RwLock::new(HashMap::new()))
}
