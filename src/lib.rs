//! Terminal front-end for the iTunes Search endpoint: a query and category
//! filter become a single cancellable request whose outcome drives a
//! three-state result list.

pub mod controller;
pub mod logging;
pub mod model;
pub mod query;
pub mod transport;
pub mod view;
