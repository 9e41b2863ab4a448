//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle identifier generation,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Give the user access to a guild
//!     let membership = factory::create_user_guild(&db, &user.discord_id, "123").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::user::UserFactory;
//!
//! let user = UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .name("CustomUser")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `user_guild` - Create manageable-guild rows for a user
//! - `helpers` - Shared identifier generation

pub mod helpers;
pub mod user;
pub mod user_guild;

// Re-export commonly used factory functions for concise usage
pub use user::create_user;
pub use user_guild::create_user_guild;
