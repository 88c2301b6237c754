pub mod proxy;
pub mod session;
pub mod user;

pub use proxy::{FetchError, HostFetcher, ResponseCache, FETCH_FAILED};
pub use session::SessionStore;
pub use user::{StaticUserRepository, UserRepository};

#[cfg(test)]
pub use proxy::{MockHostFetcher, MockResponseCache};
#[cfg(test)]
pub use session::MockSessionStore;
