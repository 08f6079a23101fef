use crate::domain::commands::MapCommand;
use async_trait::async_trait;
use std::fmt::Debug;

/// The tile-based interactive map. Implementations own marker rendering;
/// callers only issue commands.
#[async_trait]
pub trait MapSurface: Debug + Send + Sync {
    async fn apply(&self, command: MapCommand);
}
