//! Geocode-then-route flow
//!
//! Runs the two lookups and the route fetch in order, stopping at the first
//! failure with a user-facing message.

use std::io::{self, Write};
use std::process::ExitCode;

use domain::{Address, Coordinate};
use integration_amap::{NavigationClient, NavigationError, render_route};
use tracing::info;

/// Result of one navigation run
#[derive(Debug)]
pub enum FlowOutcome {
    /// A route was fetched and rendered
    Rendered,
    /// The origin address could not be resolved
    OriginUnresolved(NavigationError),
    /// The destination address could not be resolved
    DestinationUnresolved(NavigationError),
    /// Both addresses resolved but no route could be fetched
    RouteUnavailable(NavigationError),
}

impl FlowOutcome {
    /// Process exit code for this outcome
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Rendered => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }
}

/// Resolve both addresses, fetch the walking route, and render it to `out`
///
/// # Errors
///
/// Only I/O errors from `out` are returned; service failures are reported
/// through [`FlowOutcome`].
pub async fn run_navigation<W: Write>(
    client: &dyn NavigationClient,
    origin: &Address,
    destination: &Address,
    out: &mut W,
) -> io::Result<FlowOutcome> {
    writeln!(out, "\nResolving addresses to coordinates...")?;

    let origin_location = match client.geocode(origin).await {
        Ok(location) => location,
        Err(e) => {
            report_failure(out, &e)?;
            writeln!(out, "Origin address could not be resolved, exiting.")?;
            return Ok(FlowOutcome::OriginUnresolved(e));
        },
    };

    let destination_location = match client.geocode(destination).await {
        Ok(location) => location,
        Err(e) => {
            report_failure(out, &e)?;
            writeln!(out, "Destination address could not be resolved, exiting.")?;
            return Ok(FlowOutcome::DestinationUnresolved(e));
        },
    };

    print_coordinates(out, &origin_location, &destination_location)?;

    writeln!(out, "\nFetching walking route...")?;
    match client
        .fetch_walking_route(&origin_location, &destination_location)
        .await
    {
        Ok(route) => {
            info!("Rendering walking route");
            writeln!(out)?;
            render_route(Some(&route), out)?;
            Ok(FlowOutcome::Rendered)
        },
        Err(e) => {
            report_failure(out, &e)?;
            writeln!(
                out,
                "Failed to fetch a walking route, please check the network connection and the API key."
            )?;
            Ok(FlowOutcome::RouteUnavailable(e))
        },
    }
}

fn print_coordinates<W: Write>(
    out: &mut W,
    origin: &Coordinate,
    destination: &Coordinate,
) -> io::Result<()> {
    writeln!(out, "Origin coordinates: {}", describe_coordinate(origin))?;
    writeln!(
        out,
        "Destination coordinates: {}",
        describe_coordinate(destination)
    )
}

/// Coordinate text followed by its longitude and latitude halves when present
fn describe_coordinate(coordinate: &Coordinate) -> String {
    match (coordinate.longitude(), coordinate.latitude()) {
        (Some(lon), Some(lat)) => format!("{coordinate} (longitude {lon}, latitude {lat})"),
        _ => coordinate.to_string(),
    }
}

fn report_failure<W: Write>(out: &mut W, error: &NavigationError) -> io::Result<()> {
    match error {
        NavigationError::GeocodingFailed { address, info, .. } => {
            writeln!(out, "Geocoding failed for \"{address}\": {info}")
        },
        NavigationError::GeocodingException { address, reason } => {
            writeln!(out, "Geocoding error for \"{address}\": {reason}")
        },
        NavigationError::RouteFetchFailed { info, .. } => {
            writeln!(out, "Walking route request failed: {info}")
        },
        NavigationError::RouteFetchException { reason } => {
            writeln!(out, "Walking route error: {reason}")
        },
        NavigationError::Configuration(msg) => writeln!(out, "Configuration error: {msg}"),
    }
}
