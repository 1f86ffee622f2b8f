//! bit.ly API model types.

mod bundle;
mod link;
mod metrics;
mod search;

pub use bundle::*;
pub use link::*;
pub use metrics::*;
pub use search::*;
