use serde::Serialize;
use tracing::debug;

use super::naming::qualified_handler;
use crate::spec::{HttpMethod, Service, JWT_PROPERTY, MIDDLEWARE_PROPERTY, SIGNATURE_PROPERTY};

/// One route triple ready for the routes template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutput {
    pub method: HttpMethod,
    /// `net/http` constant for `method`
    pub method_const: &'static str,
    pub path: String,
    /// Qualified handler identifier, e.g. `user.GetUser`
    pub handler: String,
}

/// A group of routes registered together with shared options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupOutput {
    pub routes: Vec<RouteOutput>,
    pub jwt_enabled: bool,
    pub signature_enabled: bool,
    /// Config field holding the JWT secret; meaningful only when `jwt_enabled`
    pub auth_name: String,
    pub middleware_enabled: bool,
    pub middlewares: Vec<String>,
}

/// Turn the service's groups into template-ready records.
///
/// Groups and routes keep their input order. Auth, signature and middleware
/// are read from the group annotations only.
pub fn build_groups(service: &Service) -> Vec<GroupOutput> {
    let mut groups = Vec::with_capacity(service.groups.len());

    for (index, g) in service.groups.iter().enumerate() {
        let mut grouped = GroupOutput::default();

        for r in &g.routes {
            let handler = qualified_handler(r, g);
            debug!(group = index, method = %r.method, path = %r.path, %handler, "resolved route");
            grouped.routes.push(RouteOutput {
                method: r.method,
                method_const: r.method.go_constant(),
                path: r.path.clone(),
                handler,
            });
        }

        if let Some(jwt) = g.annotations.get(JWT_PROPERTY) {
            grouped.auth_name = jwt.to_string();
            grouped.jwt_enabled = true;
        }

        // Literal match only: "True" or "1" leave signatures off.
        if g.annotation(SIGNATURE_PROPERTY) == "true" {
            grouped.signature_enabled = true;
        }

        if let Some(middleware) = g.annotations.get(MIDDLEWARE_PROPERTY) {
            grouped.middlewares = middleware.split(',').map(str::to_string).collect();
            grouped.middleware_enabled = true;
        }

        debug!(
            group = index,
            routes = grouped.routes.len(),
            jwt = grouped.jwt_enabled,
            signature = grouped.signature_enabled,
            middlewares = grouped.middlewares.len(),
            "built route group"
        );
        groups.push(grouped);
    }

    groups
}

/// Human-readable listing of the groups, one route per line
pub fn describe_groups(groups: &[GroupOutput]) -> String {
    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        out.push_str(&format!("group {index}"));
        if group.jwt_enabled {
            out.push_str(&format!(" [jwt: {}]", group.auth_name));
        }
        if group.signature_enabled {
            out.push_str(" [signature]");
        }
        if group.middleware_enabled {
            out.push_str(&format!(" [middleware: {}]", group.middlewares.join(",")));
        }
        out.push('\n');
        for route in &group.routes {
            out.push_str(&format!(
                "  {:<6} {} → {}\n",
                route.method.as_str(),
                route.path,
                route.handler
            ));
        }
    }
    out
}
