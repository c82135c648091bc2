// Profile data submitted for export: model, normalization, metric display parsing.

pub mod metric;
pub mod snapshot;
pub mod store;

pub use metric::{parse_metric, MetricDisplay};
pub use snapshot::ProfileSnapshot;
pub use store::{normalize, ProfileError};
