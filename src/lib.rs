//! # Listwise
//!
//! A library for building list-driven admin dashboards over a REST backend.
//!
//! Every list view in such a dashboard needs the same three behaviors:
//! free-text search over a whitelist of fields, tri-state column sorting,
//! and pagination. Instead of copy-pasting that pipeline into every feature
//! module, listwise provides it once, with precise semantics:
//!
//! - **ListQueryEngine**: the pure filter → sort → paginate pipeline
//! - **QueryState**: the sort-header state machine and page/search rules
//! - **ListView**: an owning controller per resource (fetch, refresh
//!   wholesale, recompute)
//! - **ResourceClient**: typed CRUD over a resource path, through an
//!   anonymous or bearer-authenticated client pair
//! - **DashboardConfig**: per-resource wiring (path, searchable fields,
//!   page size) as YAML data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use listwise::prelude::*;
//!
//! let clients = ApiClients::new("http://localhost:8080", Arc::new(NoToken));
//! let config = DashboardConfig::from_yaml_file("dashboard.yaml")?;
//! let resource = config.resource("illegal-vehicles")?;
//!
//! let mut view = resource.list_view();
//! let client = resource.client(&clients);
//!
//! view.set_records(client.list().await?);
//! view.search("kohima");
//! view.toggle_sort("seizure_date");
//!
//! let page = view.visible();
//! println!("Showing {} to {} of {}",
//!     page.meta.range_start, page.meta.range_end, page.meta.total_count);
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod engine;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ConfigError, ListwiseError, ListwiseResult},
        field::FieldValue,
        record::{DynRecord, Record},
    };

    // === Engine ===
    pub use crate::engine::{
        ListQueryEngine, PageMeta, PageView, QueryState, SortDirection,
    };

    // === View ===
    pub use crate::view::ListView;

    // === Client ===
    pub use crate::client::{
        ApiClient, ApiClients, NoToken, ResourceClient, StaticToken, TokenProvider,
    };

    // === Config ===
    pub use crate::config::{DashboardConfig, ResourceConfig};

    // === Macros ===
    pub use crate::impl_record;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
