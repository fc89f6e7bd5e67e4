//! Handler sets, declarations, and descriptors.
//!
//! A [`HandlerSet`] is an externally-owned object exposing handler methods
//! to the routing engine. Instead of discovering methods at runtime, a set
//! declares them explicitly: each [`HandlerDecl`] bundles a name, a
//! [`MatchRule`], a parameter plan, and a typed closure invoked with the
//! owning instance and a resolved [`CallFrame`].
//!
//! # Declaring handlers
//!
//! ```rust,ignore
//! struct PingTasks;
//!
//! impl HandlerSet for PingTasks {
//!     fn key(&self) -> &str {
//!         "ping_tasks"
//!     }
//!
//!     fn handlers(&self) -> Vec<HandlerDecl> {
//!         vec![
//!             HandlerDecl::new("ping", SlashCommandRule::named("ping"))
//!                 .param(ParamSpec::event())
//!                 .handler(|_this: Arc<PingTasks>, frame| async move {
//!                     // reply via the gateway...
//!                     Ok(())
//!                 }),
//!         ]
//!     }
//! }
//! ```
//!
//! The closure's first parameter pins the concrete set type; at invocation
//! the engine looks the live instance up by `key()` and downcasts it back.

use std::any::Any;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::{HandlerError, HandlerResult};
use crate::routing::frame::CallFrame;
use crate::routing::param::ParamSpec;
use crate::routing::rule::MatchRule;

/// A type-erased owner instance, downcast inside the handler closure.
pub type OwnerInstance = Arc<dyn Any + Send + Sync>;

/// A type-erased handler callable.
pub type HandlerFn =
    Arc<dyn Fn(OwnerInstance, CallFrame) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// An externally-owned object exposing handler methods to the engine.
///
/// Instances are shared and may be mutable inside; the engine never
/// serializes access to them. A set with zero declarations simply
/// contributes nothing to the routing table.
pub trait HandlerSet: Send + Sync + 'static {
    /// Opaque identity used to look the live instance up at invocation time.
    fn key(&self) -> &str;

    /// The explicit registration table for this set.
    fn handlers(&self) -> Vec<HandlerDecl>;

    /// Upcast for owner-instance storage and later downcasting.
    fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// One declared handler: name, match rule, parameter plan, and callable.
#[derive(Clone)]
pub struct HandlerDecl {
    name: String,
    rule: MatchRule,
    params: Vec<ParamSpec>,
    callable: Option<HandlerFn>,
}

impl HandlerDecl {
    /// Starts a declaration with a handler name and its match rule.
    ///
    /// The name doubles as the fallback command identifier for slash rules
    /// declared without a command.
    pub fn new(name: impl Into<String>, rule: impl Into<MatchRule>) -> Self {
        Self {
            name: name.into(),
            rule: rule.into(),
            params: Vec::new(),
            callable: None,
        }
    }

    /// Appends a parameter to the resolution plan.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Attaches the handler body.
    ///
    /// `S` is the concrete handler-set type; the engine downcasts the live
    /// owner instance to it before calling `f`. A declaration without a
    /// body is dropped at registration with a warning.
    pub fn handler<S, F, Fut>(mut self, f: F) -> Self
    where
        S: HandlerSet,
        F: Fn(Arc<S>, CallFrame) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.callable = Some(Arc::new(
            move |owner: OwnerInstance, frame: CallFrame| -> BoxFuture<'static, HandlerResult> {
                match owner.downcast::<S>() {
                    Ok(this) => Box::pin(f(this, frame)),
                    Err(_) => Box::pin(std::future::ready(Err(HandlerError::msg(format!(
                        "owner instance is not a {}",
                        std::any::type_name::<S>()
                    ))))),
                }
            },
        ));
        self
    }

    /// The declared handler name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared match rule.
    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// Whether a handler body was attached.
    pub fn has_callable(&self) -> bool {
        self.callable.is_some()
    }

    pub(crate) fn into_parts(self) -> (String, MatchRule, Vec<ParamSpec>, Option<HandlerFn>) {
        (self.name, self.rule, self.params, self.callable)
    }
}

impl std::fmt::Debug for HandlerDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerDecl")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .field("params", &self.params)
            .field("has_callable", &self.callable.is_some())
            .finish()
    }
}

/// An immutable, registered handler: the unit the routing table holds.
///
/// Descriptors are produced once at registration and never change; the
/// parameter plan is fixed here and not re-derived per call.
#[derive(Clone)]
pub struct HandlerDescriptor {
    owner: String,
    name: String,
    rule: MatchRule,
    params: Vec<ParamSpec>,
    callable: HandlerFn,
}

impl HandlerDescriptor {
    pub(crate) fn new(
        owner: String,
        name: String,
        rule: MatchRule,
        params: Vec<ParamSpec>,
        callable: HandlerFn,
    ) -> Self {
        Self {
            owner,
            name,
            rule,
            params,
            callable,
        }
    }

    /// Key of the handler set that declared this handler.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The handler's declared name (and fallback command identifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The match rule this handler was registered with.
    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// The fixed parameter plan.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// The type-erased callable.
    pub fn callable(&self) -> &HandlerFn {
        &self.callable
    }
}

impl std::fmt::Debug for HandlerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerDescriptor")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("rule", &self.rule)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
