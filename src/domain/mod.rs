mod account;
mod amount;
mod chart;
mod date;
mod ledger;
mod record;

pub use account::*;
pub use amount::*;
pub use chart::*;
pub use date::*;
pub use ledger::*;
pub use record::*;
