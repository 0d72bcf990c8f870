//! The single fact card actions read from the identity component: who is
//! acting right now.

use std::sync::{Arc, RwLock};

/// Source of the currently active actor's name
pub trait ActorSource: Send + Sync {
    /// Name of the acting user, or `None` when nobody is signed in
    fn current_actor_name(&self) -> Option<String>;
}

impl<F> ActorSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_actor_name(&self) -> Option<String> {
        self()
    }
}

/// Nobody is ever signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl ActorSource for Anonymous {
    fn current_actor_name(&self) -> Option<String> {
        None
    }
}

/// A fixed actor name
#[derive(Debug, Clone)]
pub struct NamedActor(String);

impl NamedActor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl ActorSource for NamedActor {
    fn current_actor_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Handle shared between the host's sign-in flow and the board.
///
/// Clones observe the same state, so signing in or out through one handle is
/// seen by every board holding another.
#[derive(Debug, Clone, Default)]
pub struct SharedActor {
    name: Arc<RwLock<Option<String>>>,
}

impl SharedActor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, name: impl Into<String>) {
        *self.name.write().unwrap_or_else(|e| e.into_inner()) = Some(name.into());
    }

    pub fn sign_out(&self) {
        *self.name.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl ActorSource for SharedActor {
    fn current_actor_name(&self) -> Option<String> {
        self.name.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Resolves the acting name, falling back when it is absent or empty
pub(crate) fn resolve_actor(source: &dyn ActorSource, fallback: &str) -> String {
    source
        .current_actor_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
