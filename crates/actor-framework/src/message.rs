//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc messages for
/// every operation, requests are standardized around the lifecycle of a persisted resource:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize, persist and return a new resource.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Fetches every resource, in insertion order.
/// - **Delete**: Removes the resource. Deleting an unknown ID is not an error; the reply says
///   whether anything was removed.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
///
/// There is deliberately no generic update: resources change only through their actions.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
