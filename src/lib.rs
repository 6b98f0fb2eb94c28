//! In-memory banking simulator: accounts, transfers and phone top-ups behind
//! a text menu, a form front end and a CSV script runner.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod observability;
pub mod worker;
