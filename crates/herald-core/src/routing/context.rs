//! Dispatch context.
//!
//! The [`DispatchContext`] is the explicitly constructed, passed-down object
//! owning everything a dispatch needs: the immutable routing table and the
//! owner-lookup map from handler-set keys to live instances. There is no
//! process-wide registry; whoever assembles a bot builds one of these and
//! hands it to the [`Dispatcher`](super::dispatcher::Dispatcher).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::routing::descriptor::{HandlerDescriptor, HandlerSet, OwnerInstance};
use crate::routing::registry::{HandlerRegistry, RegistryState};

/// Read-only dispatch state for one bot: routing table plus owner lookup.
///
/// Built once at startup; both halves are immutable afterwards, so
/// concurrent dispatches read them without locking.
pub struct DispatchContext {
    registry: RegistryState,
    owners: HashMap<String, OwnerInstance>,
}

impl DispatchContext {
    /// Builds the context from handler-set instances: registers their
    /// declarations and retains each instance under its key for invocation.
    pub fn build(sets: Vec<Arc<dyn HandlerSet>>) -> Self {
        let registry = HandlerRegistry::register(&sets);

        let mut owners: HashMap<String, OwnerInstance> = HashMap::with_capacity(sets.len());
        for set in sets {
            let key = set.key().to_string();
            if owners.insert(key.clone(), set.as_any()).is_some() {
                warn!(
                    owner = %key,
                    "Duplicate handler-set key; the later instance replaces the earlier"
                );
            }
        }

        Self { registry, owners }
    }

    /// Assembles a context from pre-built parts. Useful for tests and for
    /// callers that manage owner instances themselves.
    pub fn from_parts(registry: RegistryState, owners: HashMap<String, OwnerInstance>) -> Self {
        Self { registry, owners }
    }

    /// The routing table.
    pub fn registry(&self) -> &RegistryState {
        &self.registry
    }

    /// Looks up the live owner instance for a descriptor.
    ///
    /// Absence is a non-fatal condition the dispatcher logs and skips.
    pub fn owner_of(&self, descriptor: &HandlerDescriptor) -> Option<OwnerInstance> {
        self.owners.get(descriptor.owner()).cloned()
    }
}

impl std::fmt::Debug for DispatchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchContext")
            .field("registry", &self.registry)
            .field("owners", &self.owners.len())
            .finish()
    }
}
