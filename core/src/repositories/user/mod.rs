pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod static_repository;

pub use r#trait::UserRepository;
pub use static_repository::StaticUserRepository;
