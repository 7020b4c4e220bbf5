pub mod endpoints;
pub mod http;
pub mod trait_def;

pub use endpoints::EndpointContract;
pub use http::HttpGameServer;
pub use trait_def::GameServer;
