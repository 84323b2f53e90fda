//! runlist-match: auction run list matcher
//!
//! A library for downloading an auction run list, joining it against
//! per-VIN sale records and rendering the matched vehicles as a table.

pub mod config;
pub mod credentials;
pub mod lookup;
pub mod matching;
pub mod output;
pub mod runlist;
pub mod table;
pub mod time;
pub mod transport;
pub mod vehicle;
