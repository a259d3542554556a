pub mod analysis;
pub mod bitmap;
pub mod config;
pub mod error;
pub mod index;
pub mod kvtree;
pub mod models;
pub mod pool;
pub mod schema;
pub mod segment;

pub use analysis::Analyzer;
pub use bitmap::DeleteBitmap;
pub use config::{AnalyzerConfig, AnalyzerStage, IndexConfig, Language};
pub use error::{KestrelError, Result};
pub use index::{Index, DEFAULT_PRIMARY_KEY};
pub use kvtree::{BTreeStore, KeyValueTree};
pub use models::{DocIdNode, FilterKind, GatherRequest, SearchFilter, SearchQuery};
pub use pool::{DocIdPool, PooledDocIds};
pub use schema::{FieldInfo, FieldType, Schema};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
