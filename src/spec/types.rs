use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Annotation naming the handler package folder for a route or group
pub const GROUP_PROPERTY: &str = "group";
/// Group annotation naming the config field that holds the JWT secret
pub const JWT_PROPERTY: &str = "jwt";
/// Group annotation enabling request signature verification
pub const SIGNATURE_PROPERTY: &str = "signature";
/// Group annotation listing comma-separated middleware names
pub const MIDDLEWARE_PROPERTY: &str = "middleware";

/// HTTP methods a route may be registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    Delete,
    Get,
    Head,
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 6] = [
        HttpMethod::Delete,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
    ];

    /// Upper-case method token, e.g. `GET`
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// The `net/http` constant the generated Go code refers to
    pub fn go_constant(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "http.MethodDelete",
            HttpMethod::Get => "http.MethodGet",
            HttpMethod::Head => "http.MethodHead",
            HttpMethod::Post => "http.MethodPost",
            HttpMethod::Put => "http.MethodPut",
            HttpMethod::Patch => "http.MethodPatch",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a method token is outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method '{0}' (expected one of DELETE, GET, HEAD, POST, PUT, PATCH)")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = UnknownMethod;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

/// String-keyed, string-valued properties attached to a group or route.
///
/// An empty value is indistinguishable from a missing one: both resolve to
/// "absent" through [`Annotations::get`] and to `""` through
/// [`Annotations::value`]. Scalar values are read as their text, so
/// `signature: true` and `"signature": true` both yield `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, String>);

/// Annotation value as it appears in a document; maps and lists are rejected
#[derive(Deserialize)]
#[serde(untagged)]
enum AnnotationValue {
    Text(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Null(()),
}

impl From<AnnotationValue> for String {
    fn from(value: AnnotationValue) -> Self {
        match value {
            AnnotationValue::Text(s) => s,
            AnnotationValue::Bool(b) => b.to_string(),
            AnnotationValue::Int(n) => n.to_string(),
            AnnotationValue::UInt(n) => n.to_string(),
            AnnotationValue::Float(n) => n.to_string(),
            AnnotationValue::Null(()) => String::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Annotations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, AnnotationValue>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Non-empty value of `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value of `name`, or `""` when absent
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single route of the API description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    /// Bare handler name as written in the API description (e.g. `getUser`)
    pub handler: String,
    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
}

impl Route {
    pub fn new(method: HttpMethod, path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            handler: handler.into(),
            annotations: Annotations::new(),
        }
    }

    pub fn with_annotation(mut self, name: &str, value: &str) -> Self {
        self.annotations.insert(name, value);
        self
    }

    pub fn annotation(&self, name: &str) -> &str {
        self.annotations.value(name)
    }
}

/// An ordered set of routes sharing annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Group {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            annotations: Annotations::new(),
            routes,
        }
    }

    pub fn with_annotation(mut self, name: &str, value: &str) -> Self {
        self.annotations.insert(name, value);
        self
    }

    pub fn annotation(&self, name: &str) -> &str {
        self.annotations.value(name)
    }
}

/// A resolved API service: the ordered groups to register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Service {
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            name: String::new(),
            groups,
        }
    }
}

/// Resolve the grouping folder for `route`, falling back to `group`.
///
/// The route's own annotation always wins; the group is consulted only when
/// the route has no (or an empty) value.
pub fn resolve_folder<'a>(route: &'a Route, group: &'a Group) -> Option<&'a str> {
    route
        .annotations
        .get(GROUP_PROPERTY)
        .or_else(|| group.annotations.get(GROUP_PROPERTY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_missing_is_empty() {
        let route = Route::new(HttpMethod::Get, "/a", "a");
        assert_eq!(route.annotation("jwt"), "");
        assert_eq!(route.annotations.get("jwt"), None);
    }

    #[test]
    fn test_empty_annotation_is_absent() {
        let route = Route::new(HttpMethod::Get, "/a", "a").with_annotation(GROUP_PROPERTY, "");
        let group = Group::new(vec![]).with_annotation(GROUP_PROPERTY, "b");
        assert_eq!(resolve_folder(&route, &group), Some("b"));
    }

    #[test]
    fn test_route_folder_wins_over_group() {
        let route = Route::new(HttpMethod::Get, "/a", "a").with_annotation(GROUP_PROPERTY, "a");
        let group = Group::new(vec![]).with_annotation(GROUP_PROPERTY, "b");
        assert_eq!(resolve_folder(&route, &group), Some("a"));

        let bare = Route::new(HttpMethod::Get, "/a", "a");
        assert_eq!(resolve_folder(&bare, &group), Some("b"));
        assert_eq!(resolve_folder(&bare, &Group::default()), None);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        let err = "OPTIONS".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, UnknownMethod("OPTIONS".to_string()));
    }

    #[test]
    fn test_method_go_constants() {
        let constants: Vec<_> = HttpMethod::ALL.iter().map(HttpMethod::go_constant).collect();
        assert_eq!(
            constants,
            vec![
                "http.MethodDelete",
                "http.MethodGet",
                "http.MethodHead",
                "http.MethodPost",
                "http.MethodPut",
                "http.MethodPatch",
            ]
        );
    }
}
