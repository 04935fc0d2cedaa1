mod http_client;
pub use http_client::{build_client, error_chain};

pub mod logging;
