pub mod error;
pub mod gate;
pub mod storage;
pub mod store;
pub mod token;
pub mod validate;

pub use gate::{authorize, Decision, Guard, Redirect, RoutePaths};
pub use storage::{MemoryStorage, SessionStorage};
pub use store::SessionStore;
pub use validate::AuthValidator;
