//! Endpoint wrappers, one file per resource group.
//!
//! Every method is a fixed (verb, path template, request, response) tuple
//! over `CoolifyClient::execute`. Paths are bare resource paths; the API
//! prefix comes from the base address.

mod api;
mod applications;
mod databases;
mod deployments;
mod destinations;
mod private_keys;
mod projects;
mod resources;
mod servers;
mod services;
mod teams;

use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::types::EnvironmentVariable;

/// Check an identifier before it is interpolated into a path.
///
/// URL resolution collapses `.` and `..` (also when written as `%2e`) and
/// treats `\\` like `/`, so any of those would retarget the request at a
/// parent resource.
fn segment(id: &str) -> Result<&str> {
    if id.is_empty() {
        return Err(ApiError::construction(id, "identifier is empty"));
    }
    if id == "." || id == ".." {
        return Err(ApiError::construction(id, "identifier must not be a dot segment"));
    }
    if id.contains(['/', '\\', '?', '#', '%']) {
        return Err(ApiError::construction(
            id,
            "identifier must not contain '/', '\\', '?', '#' or '%'",
        ));
    }
    Ok(id)
}

/// Check a value that only travels in the query string.
fn query_value(value: &str) -> Result<&str> {
    if value.is_empty() {
        return Err(ApiError::construction(value, "query value is empty"));
    }
    Ok(value)
}

/// Append `pairs` to `path` as an encoded query string.
fn with_query<'a>(path: String, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

/// Boolean flags as literal `true`/`false` query values.
fn flags<'a>(pairs: &'a [(&'static str, bool)]) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    pairs
        .iter()
        .map(|(key, value)| (*key, if *value { "true" } else { "false" }))
}

#[derive(Serialize)]
struct CommandRequest<'a> {
    command: &'a str,
}

#[derive(Serialize)]
struct BulkEnvRequest<'a> {
    data: &'a [EnvironmentVariable],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_rejects_empty_and_path_characters() {
        assert_eq!(segment("og888os").unwrap(), "og888os");
        assert_eq!(segment("a.b").unwrap(), "a.b");
        assert_eq!(segment("...").unwrap(), "...");
        for bad in ["", "a/b", "a?x=1", "a#frag", ".", "..", "%2e%2e", ".%2E", "a\\b"] {
            assert!(matches!(
                segment(bad),
                Err(ApiError::RequestConstruction { .. })
            ));
        }
    }

    #[test]
    fn flags_always_render_both_values() {
        let path = with_query(
            "/applications/a1".to_string(),
            flags(&[("delete_volumes", true), ("docker_cleanup", false)]),
        );
        assert_eq!(path, "/applications/a1?delete_volumes=true&docker_cleanup=false");
    }

    #[test]
    fn query_value_only_rejects_empty() {
        assert_eq!(query_value("blue?force=true#x").unwrap(), "blue?force=true#x");
        assert!(matches!(
            query_value(""),
            Err(ApiError::RequestConstruction { .. })
        ));
    }

    #[test]
    fn query_values_are_encoded() {
        let path = with_query("/deploy".to_string(), [("tag", "blue green&co")]);
        assert_eq!(path, "/deploy?tag=blue+green%26co");
    }

    #[test]
    fn empty_query_leaves_path_alone() {
        assert_eq!(with_query("/x".to_string(), []), "/x");
    }
}
