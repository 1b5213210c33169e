pub mod error_boundary;
pub mod user_created;
pub mod user_deleted;
pub mod user_updated;

pub use user_created::handle_user_created;
pub use user_deleted::handle_user_deleted;
pub use user_updated::handle_user_updated;
