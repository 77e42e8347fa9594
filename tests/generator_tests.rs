#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixtures::{fixture, SHOP_ROOT};
use routegen::generator::{build_groups, build_imports, generate_routes, GenerateOptions, PackageLayout};
use routegen::spec::load_service;
use std::fs;

#[test]
fn test_shop_groups() {
    let service = load_service(&fixture("shop.yaml")).unwrap();
    let groups = build_groups(&service);
    assert_eq!(groups.len(), 3);

    let handlers: Vec<Vec<&str>> = groups
        .iter()
        .map(|g| g.routes.iter().map(|r| r.handler.as_str()).collect())
        .collect();
    assert_eq!(
        handlers,
        vec![
            vec!["order.List", "order.Create", "orderadmin.Detail"],
            vec!["ping"],
            vec!["user.RemoveUser", "user.UpdateUser"],
        ]
    );

    assert!(groups[0].jwt_enabled);
    assert_eq!(groups[0].auth_name, "Auth");
    assert!(groups[0].signature_enabled);

    assert!(!groups[1].jwt_enabled);
    assert_eq!(groups[1].middlewares, vec!["Trace", "Metrics"]);

    // "True" is not the literal "true"
    assert!(!groups[2].signature_enabled);
}

#[test]
fn test_shop_imports() {
    let service = load_service(&fixture("shop.yaml")).unwrap();
    let imports = build_imports(&service, SHOP_ROOT, &PackageLayout::default());
    assert_eq!(
        imports,
        [
            "\"github.com/acme/shop/internal/svc\"",
            "order \"github.com/acme/shop/internal/handler/order\"",
            "orderadmin \"github.com/acme/shop/internal/handler/order/admin\"",
            "user \"github.com/acme/shop/internal/handler/user\"",
        ]
        .join("\n\t")
            + "\n\n\t\"github.com/zeromicro/go-zero/rest\""
    );
}

#[test]
fn test_shop_routes_file() {
    let service = load_service(&fixture("shop.yaml")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = generate_routes(&service, &GenerateOptions::new(dir.path(), SHOP_ROOT)).unwrap();
    let content = fs::read_to_string(path).unwrap();

    // Groups are registered in input order
    let order = content.find("order.List(serverCtx)").unwrap();
    let ping = content.find("ping(serverCtx)").unwrap();
    let user = content.find("user.RemoveUser(serverCtx)").unwrap();
    assert!(order < ping && ping < user);

    // Routes keep their order inside a group
    let create = content.find("order.Create(serverCtx)").unwrap();
    let detail = content.find("orderadmin.Detail(serverCtx)").unwrap();
    assert!(order < create && create < detail);

    assert_eq!(content.matches("engine.AddRoutes(").count(), 3);
    assert_eq!(content.matches("rest.WithJwt(serverCtx.Config.Auth.AccessSecret)").count(), 1);
    assert_eq!(content.matches("rest.WithSignature(serverCtx.Config.Signature)").count(), 1);
    assert!(content.contains("[]rest.Middleware{serverCtx.Trace, serverCtx.Metrics},"));
    assert!(content.contains("Method:  http.MethodDelete,"));
    assert!(content.contains("Method:  http.MethodPatch,"));
    assert!(content.contains("Path:    \"/users/:id\","));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let service = load_service(&fixture("shop.yaml")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions::new(dir.path(), SHOP_ROOT);

    let path = generate_routes(&service, &options).unwrap();
    let first = fs::read(&path).unwrap();
    let again = generate_routes(&service, &options).unwrap();
    assert_eq!(path, again);
    assert_eq!(first, fs::read(&again).unwrap());
}
