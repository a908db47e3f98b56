//! # Repository Module
//!
//! Database repository implementations for Feira POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.   │
//! │                                                                         │
//! │  Mobile shell                                                           │
//! │       │                                                                 │
//! │       │  db.purchases().get_all()                                       │
//! │       ▼                                                                 │
//! │  PurchaseRepository                                                     │
//! │  ├── insert(&self, purchase)                                            │
//! │  ├── get_all(&self)                                                     │
//! │  ├── get_by_id(&self, id)                                               │
//! │  └── count(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                         │
//! │  • Easy to test against an in-memory database                           │
//! │  • Callers work with domain types, never rows                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod purchase;
