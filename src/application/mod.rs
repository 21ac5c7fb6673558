// Application layer - the aggregation pass and the surfaces around it.
// `LedgerParser` reads an export, `aggregate` walks its rows once,
// `ParsingReport` shapes the result for serialization.

pub mod aggregator;
pub mod error;
pub mod report;
pub mod service;

pub use aggregator::*;
pub use error::*;
pub use report::*;
pub use service::*;
