//! Terminal rendering of walking routes
//!
//! Only the first path of a response is shown. Missing optional detail is
//! replaced by placeholder text or left out; rendering never fails on the
//! content of a route.

use std::io::{self, Write};

use crate::models::{Path, Step, WalkingRouteResponse};

/// Line printed when there is nothing to render
pub const NO_ROUTE: &str = "no route available";

/// Placeholder for steps without a road name
pub const UNNAMED_ROAD: &str = "unnamed road";

/// Write the human-readable rendering of `route` to `out`
///
/// `None`, a response without a `route` block, or a route without paths all
/// produce the single [`NO_ROUTE`] line.
///
/// # Errors
///
/// Only I/O errors from `out` are returned.
pub fn render_route<W: Write>(route: Option<&WalkingRouteResponse>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", format_route(route))
}

/// Render `route` into a string (without trailing newline)
#[must_use]
pub fn format_route(route: Option<&WalkingRouteResponse>) -> String {
    match route.and_then(WalkingRouteResponse::first_path) {
        Some(path) => format_path(path),
        None => NO_ROUTE.to_string(),
    }
}

fn format_path(path: &Path) -> String {
    let mut lines = vec![String::from("=== Walking route ===")];

    let distance = path
        .distance
        .map_or_else(|| "unknown".to_string(), |m| format!("{} km", tenths(m, 1000)));
    lines.push(format!("Total distance: {distance}"));

    if let Some(secs) = path.duration_secs() {
        lines.push(format!("Estimated time: {} min", tenths(secs, 60)));
    }

    lines.push(String::new());
    lines.push(String::from("=== Directions ==="));

    for (i, step) in path.steps.iter().enumerate() {
        lines.push(String::new());
        lines.extend(format_step(i + 1, step));
    }

    lines.join("\n")
}

fn format_step(number: usize, step: &Step) -> Vec<String> {
    let mut lines = vec![
        format!("Step {number}: {}", step.instruction),
        format!("  Road: {}", step.road_name().unwrap_or(UNNAMED_ROAD)),
        match step.distance {
            Some(m) => format!("  Distance: {m} m"),
            None => String::from("  Distance: unknown"),
        },
    ];

    if let Some(action) = step.action() {
        lines.push(format!("  action: {action}"));
    }

    lines
}

/// `value / divisor` with one decimal, rounded half-up
///
/// Integer arithmetic keeps ties exact (1250 / 1000 is "1.3").
fn tenths(value: u64, divisor: u64) -> String {
    let value = u128::from(value);
    let divisor = u128::from(divisor.max(1));
    let scaled = (value * 20 + divisor) / (divisor * 2);
    format!("{}.{}", scaled / 10, scaled % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cost, Navi, Route};

    fn response_with(path: Path) -> WalkingRouteResponse {
        WalkingRouteResponse {
            status: "1".to_string(),
            route: Some(Route {
                paths: vec![path],
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn step(instruction: &str, road: Option<&str>, distance: u64) -> Step {
        Step {
            instruction: instruction.to_string(),
            road_name: road.map(str::to_string),
            distance: Some(distance),
            ..Default::default()
        }
    }

    #[test]
    fn test_tenths_rounding() {
        assert_eq!(tenths(1000, 1000), "1.0");
        assert_eq!(tenths(90, 60), "1.5");
        assert_eq!(tenths(3600, 60), "60.0");
        assert_eq!(tenths(1250, 1000), "1.3");
        assert_eq!(tenths(1249, 1000), "1.2");
        assert_eq!(tenths(0, 1000), "0.0");
        assert_eq!(tenths(45, 1000), "0.1");
    }

    #[test]
    fn test_none_renders_single_line() {
        assert_eq!(format_route(None), NO_ROUTE);
    }

    #[test]
    fn test_missing_route_renders_single_line() {
        let resp = WalkingRouteResponse {
            status: "1".to_string(),
            ..Default::default()
        };
        assert_eq!(format_route(Some(&resp)), NO_ROUTE);
    }

    #[test]
    fn test_empty_paths_renders_single_line() {
        let resp = WalkingRouteResponse {
            status: "1".to_string(),
            route: Some(Route::default()),
            ..Default::default()
        };
        assert_eq!(format_route(Some(&resp)), NO_ROUTE);
    }

    #[test]
    fn test_distance_only_path() {
        let resp = response_with(Path {
            distance: Some(1000),
            ..Default::default()
        });
        let text = format_route(Some(&resp));
        assert!(text.contains("Total distance: 1.0 km"));
        assert!(!text.contains("Estimated time"));
        assert!(!text.contains("Step "));
    }

    #[test]
    fn test_duration_in_minutes() {
        let resp = response_with(Path {
            distance: Some(200),
            cost: Some(Cost { duration: Some(90) }),
            ..Default::default()
        });
        assert!(format_route(Some(&resp)).contains("Estimated time: 1.5 min"));
    }

    #[test]
    fn test_cost_without_duration_is_skipped() {
        let resp = response_with(Path {
            distance: Some(200),
            cost: Some(Cost { duration: None }),
            ..Default::default()
        });
        assert!(!format_route(Some(&resp)).contains("Estimated time"));
    }

    #[test]
    fn test_unknown_distance() {
        let resp = response_with(Path::default());
        assert!(format_route(Some(&resp)).contains("Total distance: unknown"));
    }

    #[test]
    fn test_unnamed_road_fallback() {
        let resp = response_with(Path {
            distance: Some(80),
            steps: vec![step("Walk north", None, 80)],
            ..Default::default()
        });
        let text = format_route(Some(&resp));
        assert!(text.contains("Step 1: Walk north"));
        assert!(text.contains("  Road: unnamed road"));
        assert!(text.contains("  Distance: 80 m"));
    }

    #[test]
    fn test_action_line_only_when_present() {
        let mut with_action = step("Turn", Some("Main St"), 10);
        with_action.navi = Some(Navi {
            action: Some("左转".to_string()),
            assistant_action: None,
        });
        let mut empty_action = step("Go on", Some("Main St"), 20);
        empty_action.navi = Some(Navi {
            action: Some(String::new()),
            assistant_action: Some("到达目的地".to_string()),
        });

        let resp = response_with(Path {
            distance: Some(30),
            steps: vec![with_action, empty_action],
            ..Default::default()
        });
        let text = format_route(Some(&resp));
        assert_eq!(text.matches("action:").count(), 1);
        assert!(text.contains("  action: 左转"));
    }

    #[test]
    fn test_steps_numbered_in_order() {
        let resp = response_with(Path {
            distance: Some(5000),
            cost: Some(Cost { duration: Some(3600) }),
            steps: vec![
                step("First", Some("A Road"), 100),
                step("Second", Some("B Road"), 4900),
            ],
        });
        let text = format_route(Some(&resp));
        assert!(text.contains("Total distance: 5.0 km"));
        assert!(text.contains("Estimated time: 60.0 min"));

        let first = text.find("Step 1: First").unwrap();
        let second = text.find("Step 2: Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_only_first_path_is_rendered() {
        let mut resp = response_with(Path {
            distance: Some(1000),
            ..Default::default()
        });
        if let Some(route) = resp.route.as_mut() {
            route.paths.push(Path {
                distance: Some(9000),
                ..Default::default()
            });
        }
        let text = format_route(Some(&resp));
        assert!(text.contains("1.0 km"));
        assert!(!text.contains("9.0 km"));
    }

    #[test]
    fn test_render_route_writes_newline_terminated_output() {
        let mut out = Vec::new();
        render_route(None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "no route available\n");
    }
}
