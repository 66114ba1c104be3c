//! Items Domain
//!
//! CRUD over a single `Item { id, name, price }` resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and Postgres adapters
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, request DTOs, validated inputs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{InMemoryItemRepository, ItemUseCases, handlers};
//!
//! let use_cases = ItemUseCases::new(InMemoryItemRepository::new());
//! let router = handlers::router(use_cases);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod use_cases;
pub mod validation;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemChanges, NewItem, UpdateItem};
pub use postgres::PgItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetAllItemsUseCase, GetItemByIdUseCase, ItemUseCases,
    UpdateItemUseCase,
};
