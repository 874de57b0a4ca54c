//! AMap navigation integration for WalkNav
//!
//! Resolves free-form addresses to coordinates via the AMap geocoding API and
//! retrieves walking routes via the AMap v5 directions API, then renders a
//! route as numbered step-by-step instructions.
//!
//! # Architecture
//!
//! [`NavigationClient`] defines the interface for geocoding and route
//! retrieval, implemented by [`AmapNavigationClient`]. Both operations return
//! a [`NavigationError`] instead of panicking or printing; the caller decides
//! how to surface it. Rendering lives in [`render`] and only depends on the
//! response models.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Address;
//! use integration_amap::{AmapConfig, AmapNavigationClient, NavigationClient, render_route};
//!
//! let client = AmapNavigationClient::new(&AmapConfig::with_api_key(key))?;
//!
//! let origin = client.geocode(&Address::new("北京西站")?).await?;
//! let destination = client.geocode(&Address::new("天安门")?).await?;
//! let route = client.fetch_walking_route(&origin, &destination).await?;
//!
//! render_route(Some(&route), &mut std::io::stdout())?;
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod render;

pub use client::{AmapNavigationClient, NavigationClient};
pub use config::AmapConfig;
pub use error::{FailureKind, NavigationError};
pub use models::{
    Cost, Geocode, GeocodeResponse, Navi, Path, Route, STATUS_OK, Step, WalkingRouteResponse,
};
pub use render::{NO_ROUTE, UNNAMED_ROAD, format_route, render_route};
