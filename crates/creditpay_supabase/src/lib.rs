//! Supabase integration for creditpay
//!
//! Supabase exposes every table through PostgREST at `{url}/rest/v1/{table}`.
//! This crate wraps the two calls the checkout flow needs (filtered select
//! and insert) and implements [`creditpay_common::CreditStore`] on top of
//! them.
//!
//! # Example
//!
//! ```rust,no_run
//! use creditpay_common::{CreditStore, RecordId};
//! use creditpay_config::SupabaseConfig;
//! use creditpay_supabase::{SupabaseClient, SupabaseCreditStore};
//!
//! async fn lookup() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SupabaseConfig {
//!         url: "https://xyz.supabase.co".to_string(),
//!         service_role_key: "service-role-key".to_string(),
//!     };
//!     let store = SupabaseCreditStore::new(SupabaseClient::new(config));
//!     let package = store.find_credit_package(&RecordId::Number(7)).await?;
//!     println!("{:?}", package);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod repository;

pub use client::SupabaseClient;
pub use error::SupabaseError;
pub use repository::SupabaseCreditStore;
