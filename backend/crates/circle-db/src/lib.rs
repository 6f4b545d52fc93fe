pub mod connection;
pub mod error;
pub mod repositories;


pub use connection::database::{Database, DatabaseOptions};
pub use error::{DbError, Result};
pub use repositories::friend_request_repository::FriendRequestRepository;
pub use repositories::user_repository::UserRepository;
