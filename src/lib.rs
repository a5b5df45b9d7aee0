//! Data access for the `users` table of the vaxtrack backend.
//!
//! Everything the web layer needs to read or mutate accounts goes through
//! [`UserStore`]: point lookups, creation, targeted field updates,
//! soft-delete, paginated admin listing and password reset. Each call is a
//! single parameterized statement against a pooled Postgres connection.

pub mod config;
pub mod db;
pub mod error;
pub mod users;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use users::model::{NewUser, User};
pub use users::password::{Argon2Scheme, PasswordScheme, PlainTextScheme};
pub use users::store::{StoreOptions, UserStore};
