//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod product_client;
pub mod sale_client;

pub use actor_framework::ActorClient;
pub use product_client::*;
pub use sale_client::*;
