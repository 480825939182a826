/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Resource-oriented REST client
//!
//! This module provides the entry point of the crate:
//! - Registry of named resources, fixed at construction
//! - A single shared HTTP client, default, custom or factory built
//! - Pluggable authentication through default headers
//!
//! # Example
//! ```ignore
//! use snorlax::prelude::*;
//!
//! let client = RestClient::builder()
//!     .config(Config::new())
//!     .resource("pokemons", PokemonResource)
//!     .build()?;
//!
//! client.set_authorization(&BearerAuth::new("token"))?;
//! let pokemon = client
//!     .resource("pokemons")?
//!     .call("get", &["25"], RequestParams::default())
//!     .await?;
//! ```

use crate::application::auth::Authorization;
use crate::application::config::Config;
use crate::application::factory::ClientSource;
use crate::application::resource::{RegisteredResource, Resource, ResourceRegistry, join_path};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, RequestParams};
use crate::model::responses::ApiResponse;
use reqwest::header::{HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Builder for a [`RestClient`]
#[derive(Debug, Default)]
pub struct RestClientBuilder {
    config: Option<Config>,
    source: ClientSource,
    resources: ResourceRegistry,
}

impl RestClientBuilder {
    /// Sets the configuration, `Config::default()` otherwise
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets where the HTTP client comes from
    #[must_use]
    pub fn client(mut self, source: ClientSource) -> Self {
        self.source = source;
        self
    }

    /// Uses this client instance unchanged
    #[must_use]
    pub fn custom_client(self, client: Arc<dyn HttpClient>) -> Self {
        self.client(ClientSource::Instance(client))
    }

    /// Builds the client by calling `factory` once with the configuration
    #[must_use]
    pub fn client_factory<F>(self, factory: F) -> Self
    where
        F: FnOnce(&Config) -> Result<Arc<dyn HttpClient>, AppError> + Send + 'static,
    {
        self.client(ClientSource::factory(factory))
    }

    /// Registers a resource under `name`
    #[must_use]
    pub fn resource<R: Resource + 'static>(mut self, name: impl Into<String>, resource: R) -> Self {
        self.resources = self.resources.register(name, resource);
        self
    }

    /// Replaces the whole registry
    #[must_use]
    pub fn resources(mut self, resources: ResourceRegistry) -> Self {
        self.resources = resources;
        self
    }

    /// Builds the [`RestClient`]
    ///
    /// # Errors
    /// Whatever the client source returns when producing the HTTP client
    pub fn build(self) -> Result<RestClient, AppError> {
        let config = Arc::new(self.config.unwrap_or_default());
        let client = self.source.build(&config)?;
        info!(
            "REST client ready with {} resource(s): {:?}",
            self.resources.len(),
            self.resources.names()
        );
        Ok(RestClient {
            config,
            client,
            resources: self.resources,
            last_response: Mutex::new(None),
        })
    }
}

/// REST client exposing registered resources by name
pub struct RestClient {
    config: Arc<Config>,
    client: Arc<dyn HttpClient>,
    resources: ResourceRegistry,
    last_response: Mutex<Option<ApiResponse>>,
}

impl RestClient {
    /// Creates a builder
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::default()
    }

    /// Creates a client with the default HTTP client
    ///
    /// # Errors
    /// `AppError::Network` or `AppError::InvalidHeader` if the HTTP client
    /// cannot be built from `config`
    pub fn new(config: Config, resources: ResourceRegistry) -> Result<Self, AppError> {
        Self::builder().config(config).resources(resources).build()
    }

    /// Returns the resource registered under `name`
    ///
    /// # Errors
    /// `AppError::ResourceNotImplemented` if nothing is registered under `name`
    pub fn resource<'a>(&'a self, name: &'a str) -> Result<ResourceHandle<'a>, AppError> {
        let resource = self.resources.get(name)?;
        Ok(ResourceHandle {
            name,
            resource,
            client: self,
        })
    }

    /// Returns the concrete handler registered under `name`
    ///
    /// # Errors
    /// * `AppError::ResourceNotImplemented` if nothing is registered under `name`
    /// * `AppError::InvalidInput` if the handler is not an `R`
    pub fn get_resource<R: Resource + 'static>(&self, name: &str) -> Result<&R, AppError> {
        self.resources.get(name)?.downcast::<R>().ok_or_else(|| {
            AppError::InvalidInput(format!(
                "resource \"{name}\" is not a {}",
                std::any::type_name::<R>()
            ))
        })
    }

    /// Registered resources
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// The HTTP client every resource sends through
    pub fn original_client(&self) -> Arc<dyn HttpClient> {
        self.client.clone()
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Applies an authentication method to every following request
    ///
    /// The header is written once into the HTTP client's defaults, replacing
    /// any previous value under the same name.
    ///
    /// # Errors
    /// `AppError::InvalidHeader` if the method yields an invalid header
    pub fn set_authorization(&self, auth: &dyn Authorization) -> Result<(), AppError> {
        let name = HeaderName::from_bytes(auth.header_name().as_bytes())?;
        let mut value = HeaderValue::from_str(&auth.header_value())?;
        value.set_sensitive(true);
        debug!("Setting {} authorization on header {}", auth.auth_type(), name);
        self.client.set_default_header(name, value);
        Ok(())
    }

    /// Most recent response received by any resource of this client
    pub fn last_response(&self) -> Option<ApiResponse> {
        self.last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let response = self.client.execute(request).await?;
        *self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(response.clone());
        response.error_for_status()
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_uri", &self.config.base_uri)
            .field("resources", &self.resources)
            .field("middleware", &self.client.middleware_names())
            .finish()
    }
}

/// A resource bound to the client it was looked up from
pub struct ResourceHandle<'a> {
    name: &'a str,
    resource: &'a RegisteredResource,
    client: &'a RestClient,
}

impl ResourceHandle<'_> {
    /// Name the resource is registered under
    pub fn name(&self) -> &str {
        self.name
    }

    /// Handler as a trait object
    pub fn handler(&self) -> &dyn Resource {
        self.resource.handler()
    }

    /// Concrete handler, if it is an `R`
    pub fn downcast<R: Resource + 'static>(&self) -> Option<&R> {
        self.resource.downcast::<R>()
    }

    /// Returns true if the handler is an `R`
    pub fn is<R: Resource + 'static>(&self) -> bool {
        self.downcast::<R>().is_some()
    }

    /// Builds the request for `action` without sending it
    ///
    /// # Errors
    /// * `AppError::ActionNotImplemented` if the resource has no such action
    /// * `AppError::InvalidInput` if a path placeholder has no argument
    pub fn request(
        &self,
        action: &str,
        args: &[&str],
        params: RequestParams,
    ) -> Result<ApiRequest, AppError> {
        let handler = self.handler();
        let definition =
            handler
                .action(action)
                .ok_or_else(|| AppError::ActionNotImplemented {
                    resource: self.name.to_string(),
                    action: action.to_string(),
                })?;
        let path = join_path(handler.base_uri(), &definition.expand_path(args)?);
        Ok(ApiRequest::new(definition.method, path).with_params(params))
    }

    /// Calls `action` and decodes the response body as JSON
    ///
    /// # Errors
    /// * Any error from [`ResourceHandle::request`]
    /// * Transport errors, passed through unmodified
    /// * Status errors for non-success responses
    /// * `AppError::Json` if the body is not JSON
    pub async fn call(
        &self,
        action: &str,
        args: &[&str],
        params: RequestParams,
    ) -> Result<Value, AppError> {
        let request = self.request(action, args, params)?;
        debug!("{}.{} -> {} {}", self.name, action, request.method, request.path);
        self.client.send(request).await?.json_value()
    }

    /// Calls `action` and decodes the response body into `T`
    ///
    /// # Errors
    /// Same as [`ResourceHandle::call`]
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        action: &str,
        args: &[&str],
        params: RequestParams,
    ) -> Result<T, AppError> {
        let request = self.request(action, args, params)?;
        debug!("{}.{} -> {} {}", self.name, action, request.method, request.path);
        self.client.send(request).await?.json()
    }
}

impl std::fmt::Debug for ResourceHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("name", &self.name)
            .field("base_uri", &self.handler().base_uri())
            .finish()
    }
}
