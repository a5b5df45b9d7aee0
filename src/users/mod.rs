pub mod model;
pub mod password;
pub mod store;

pub use model::{NewUser, User};
pub use store::{StoreOptions, UserStore};
