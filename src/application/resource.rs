/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Resources, actions and the name → resource registry
//!
//! A [`Resource`] describes one REST resource: a base path and a set of named
//! [`Action`]s. Resources are registered under a name in a
//! [`ResourceRegistry`] before the client is built and never change afterwards.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// One named operation of a resource
///
/// `path` is relative to the resource base URI and may contain positional
/// placeholders (`{0}`, `{1}`, ...) filled from the call arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Action name used by callers
    pub name: String,
    /// HTTP method
    pub method: Method,
    /// Path template
    pub path: String,
}

impl Action {
    /// Creates an action
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
        }
    }

    /// `GET` action
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::GET, path)
    }

    /// `POST` action
    pub fn post(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::POST, path)
    }

    /// `PUT` action
    pub fn put(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::PUT, path)
    }

    /// `PATCH` action
    pub fn patch(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::PATCH, path)
    }

    /// `DELETE` action
    pub fn delete(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::DELETE, path)
    }

    /// Substitutes the positional placeholders of the path with `args`
    ///
    /// Extra arguments are ignored.
    ///
    /// # Errors
    /// `AppError::InvalidInput` if a placeholder has no matching argument
    pub fn expand_path(&self, args: &[&str]) -> Result<String, AppError> {
        let mut expanded = String::with_capacity(self.path.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.path) {
            let (Some(whole), Some(index)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let index: usize = index.as_str().parse().map_err(|_| {
                AppError::InvalidInput(format!("invalid placeholder in \"{}\"", self.path))
            })?;
            let arg = args.get(index).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "missing argument {index} for action \"{}\"",
                    self.name
                ))
            })?;
            expanded.push_str(&self.path[last..whole.start()]);
            expanded.push_str(arg);
            last = whole.end();
        }

        expanded.push_str(&self.path[last..]);
        Ok(expanded)
    }
}

/// A REST resource handler
///
/// # Example
///
/// ```ignore
/// struct PokemonResource;
///
/// impl Resource for PokemonResource {
///     fn base_uri(&self) -> &str {
///         "/pokemon"
///     }
///
///     fn actions(&self) -> Vec<Action> {
///         vec![Action::get("all", "/"), Action::get("get", "/{0}")]
///     }
/// }
/// ```
pub trait Resource: Send + Sync {
    /// Path prefix shared by every action
    fn base_uri(&self) -> &str;

    /// Actions exposed by this resource
    fn actions(&self) -> Vec<Action>;

    /// Looks up an action by name
    fn action(&self, name: &str) -> Option<Action> {
        self.actions().into_iter().find(|action| action.name == name)
    }
}

/// Joins a resource base URI and an action path
pub(crate) fn join_path(base_uri: &str, path: &str) -> String {
    let base = base_uri.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (base.is_empty(), path.is_empty()) {
        (true, _) => format!("/{path}"),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{path}"),
    }
}

/// A registered resource, kept both as a trait object and as `Any` so callers
/// can get the concrete handler back
#[derive(Clone)]
pub struct RegisteredResource {
    handler: Arc<dyn Resource>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl RegisteredResource {
    fn new<R: Resource + 'static>(resource: R) -> Self {
        let resource = Arc::new(resource);
        Self {
            handler: resource.clone(),
            instance: resource,
        }
    }

    /// Handler as a trait object
    pub fn handler(&self) -> &dyn Resource {
        self.handler.as_ref()
    }

    /// Concrete handler, if it is an `R`
    pub fn downcast<R: Resource + 'static>(&self) -> Option<&R> {
        self.instance.downcast_ref::<R>()
    }
}

/// Immutable mapping from resource name to handler
#[derive(Clone, Default)]
pub struct ResourceRegistry {
    resources: HashMap<String, RegisteredResource>,
}

impl ResourceRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resource` under `name`, replacing any previous entry
    #[must_use]
    pub fn register<R: Resource + 'static>(mut self, name: impl Into<String>, resource: R) -> Self {
        let name = name.into();
        if self
            .resources
            .insert(name.clone(), RegisteredResource::new(resource))
            .is_some()
        {
            warn!("Resource \"{}\" registered twice, keeping the last one", name);
        }
        self
    }

    /// Looks up a resource
    ///
    /// # Errors
    /// `AppError::ResourceNotImplemented` naming the missing resource
    pub fn get(&self, name: &str) -> Result<&RegisteredResource, AppError> {
        self.resources
            .get(name)
            .ok_or_else(|| AppError::ResourceNotImplemented(name.to_string()))
    }

    /// Returns true if `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl std::fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("resources", &self.names())
            .finish()
    }
}
