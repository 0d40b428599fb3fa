//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
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
//!     let lot = factory::parking_lot::create_lot(&db).await?;
//!
//!     // Create a lot with a spot in one call
//!     let (lot, spot) = factory::helpers::create_lot_with_spot(&db).await?;
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
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("resident1")
//!     .apartment_number("12B")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user accounts
//! - `user_group` - Create permission groups, grants, and memberships
//! - `car` - Create registered cars
//! - `parking_lot` - Create parking lots
//! - `parking_spot` - Create parking spots
//! - `payment` - Create payment rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod car;
pub mod helpers;
pub mod parking_lot;
pub mod parking_spot;
pub mod payment;
pub mod user;
pub mod user_group;

// Re-export commonly used factory functions for concise usage
pub use car::create_car;
pub use parking_lot::create_lot;
pub use parking_spot::create_spot;
pub use payment::create_payment;
pub use user::create_user;
pub use user_group::{add_member, create_group, grant_permission};
