//! Query service adapter — HTTP gateway and wire types.

mod http_gateway;
mod wire;

pub use http_gateway::HttpQueryGateway;
