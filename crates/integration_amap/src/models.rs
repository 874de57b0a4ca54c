//! AMap response models
//!
//! Typed representations of the geocoding (`/v3/geocode/geo`) and walking
//! directions (`/v5/direction/walking`) responses.
//!
//! AMap encodes numbers as JSON strings and absent text as an empty array
//! (`"city": []`). The decoders below accept both spellings so that optional
//! detail never causes a whole response to be rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status value AMap uses for a successful call
pub const STATUS_OK: &str = "1";

/// Geocoding response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeocodeResponse {
    /// `"1"` on success, `"0"` on failure
    #[serde(default, deserialize_with = "text_or_default")]
    pub status: String,
    /// Human-readable status, e.g. `OK` or `INVALID_USER_KEY`
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Numeric status code as text, e.g. `10000`
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub infocode: Option<String>,
    /// Number of results as text
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    /// Matched places, best match first
    #[serde(default)]
    pub geocodes: Vec<Geocode>,
}

impl GeocodeResponse {
    /// Whether the service reported success and at least one match
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK && self.count.as_deref() != Some("0")
    }

    /// Location text of the best match, if any
    #[must_use]
    pub fn first_location(&self) -> Option<&str> {
        self.geocodes
            .first()
            .and_then(|g| g.location.as_deref())
            .filter(|loc| !loc.trim().is_empty())
    }

    /// Service-provided reason, falling back to the status code
    #[must_use]
    pub fn reason(&self) -> String {
        self.info.clone().unwrap_or_else(|| format!("status {}", self.status))
    }
}

/// A single geocoding match
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Geocode {
    /// `"longitude,latitude"` text
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Normalized address of the match
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    /// Match granularity, e.g. `门牌号` or `兴趣点`
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Walking directions response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalkingRouteResponse {
    /// `"1"` on success, `"0"` on failure
    #[serde(default, deserialize_with = "text_or_default")]
    pub status: String,
    /// Human-readable status
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Numeric status code as text
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub infocode: Option<String>,
    /// Number of paths as text
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    /// Route block (absent on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

impl WalkingRouteResponse {
    /// Whether the service reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The first candidate path, which is the one presented to the user
    #[must_use]
    pub fn first_path(&self) -> Option<&Path> {
        self.route.as_ref().and_then(|r| r.paths.first())
    }

    /// Service-provided reason, falling back to the status code
    #[must_use]
    pub fn reason(&self) -> String {
        self.info.clone().unwrap_or_else(|| format!("status {}", self.status))
    }
}

/// Route block holding the candidate paths
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    /// Origin coordinate echoed by the service
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Destination coordinate echoed by the service
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Candidate walking paths
    #[serde(default)]
    pub paths: Vec<Path>,
}

/// One candidate walking itinerary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Path {
    /// Total distance in meters
    #[serde(default, deserialize_with = "optional_integer", skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
    /// Cost block (present when `show_fields` contains `cost`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    /// Ordered steps
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Path {
    /// Estimated duration in seconds, if the cost block carries one
    #[must_use]
    pub fn duration_secs(&self) -> Option<u64> {
        self.cost.as_ref().and_then(|c| c.duration)
    }
}

/// Cost block of a path or step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cost {
    /// Duration in seconds
    #[serde(default, deserialize_with = "optional_integer", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// One instruction unit within a path
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Instruction text, e.g. "向东步行50米右转"
    #[serde(default, deserialize_with = "text_or_default")]
    pub instruction: String,
    /// Heading, e.g. "东"
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    /// Road name; AMap omits it for unnamed paths
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub road_name: Option<String>,
    /// Step length in meters
    #[serde(
        rename = "step_distance",
        default,
        deserialize_with = "optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<u64>,
    /// Step cost block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    /// Navigation action block (present when `show_fields` contains `navi`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navi: Option<Navi>,
    /// Encoded polyline (`lon,lat;lon,lat;...`)
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
}

impl Step {
    /// Road name if the service gave a non-empty one
    #[must_use]
    pub fn road_name(&self) -> Option<&str> {
        self.road_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Navigation action if the service gave a non-empty one
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.navi
            .as_ref()
            .and_then(|n| n.action.as_deref())
            .filter(|action| !action.is_empty())
    }
}

/// Navigation action block of a step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navi {
    /// Main action, e.g. "左转"
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Auxiliary action, e.g. "到达目的地"
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub assistant_action: Option<String>,
}

/// Decode a text field, treating `[]`, `null`, and objects as absent
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}

/// Decode a textual or numeric non-negative integer
fn optional_integer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
