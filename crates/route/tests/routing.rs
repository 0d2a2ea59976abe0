//! End-to-end routing properties exercised through the public API only.

use wren_route::{ResolveError, RoutePattern, Router, MAX_ROUTE_PARAMS};

#[test]
fn untagged_patterns_compile_to_themselves() {
    for pattern in ["/", "/a", "/hello", "/deeply/nested/path"] {
        let route = RoutePattern::compile(pattern).unwrap();
        assert_eq!(route.params().len(), 0);
        assert_eq!(route.derived(), format!("^{pattern}$"));
    }
}

#[test]
fn bound_names_follow_tag_occurrences() {
    let cases: [(&str, &[&str]); 4] = [
        ("/hello/:name", &["name"]),
        ("/hello/:name/:surname", &["name", "surname"]),
        ("/hello/:name/:surname/aka/:nickname", &["name", "surname", "nickname"]),
        ("/:a/:b/:c/:d", &["a", "b", "c", "d"]),
    ];
    for (pattern, expected) in cases {
        let route = RoutePattern::compile(pattern).unwrap();
        assert_eq!(route.params(), expected, "params mismatch for {pattern}");
    }
}

#[test]
fn single_param_round_trip() {
    let mut router = Router::new();
    router.register("/hello/:name", "greeter").unwrap();

    let matched = router.resolve("/hello/world").unwrap();
    let collected: Vec<_> = matched.args().iter().collect();
    assert_eq!(collected, [("name", "world")]);
}

#[test]
fn two_param_round_trip() {
    let mut router = Router::new();
    router.register("/hello/:name/:surname", ()).unwrap();

    let matched = router.resolve("/hello/John/Doe").unwrap();
    let collected: Vec<_> = matched.args().iter().collect();
    assert_eq!(collected, [("name", "John"), ("surname", "Doe")]);
}

#[test]
fn three_param_round_trip_with_literal_infix() {
    let mut router = Router::new();
    router.register("/hello/:name/:surname/aka/:nickname", ()).unwrap();

    let matched = router.resolve("/hello/Ann/Lee/aka/Ace").unwrap();
    assert_eq!(matched.args().len(), 3);
    assert_eq!(matched.args().get("name"), Some("Ann"));
    assert_eq!(matched.args().get("surname"), Some("Lee"));
    assert_eq!(matched.args().get("nickname"), Some("Ace"));
}

#[test]
fn literal_routes_match_exactly_once() {
    for pattern in ["/", "/a", "/hello"] {
        let mut router = Router::new();
        router.register(pattern, ()).unwrap();

        let matched = router.resolve(pattern).unwrap();
        assert_eq!(matched.args().len(), 0, "expected zero args for {pattern}");

        for other in ["/x", "/hello/more", "", "/hell"] {
            if other == pattern {
                continue;
            }
            assert!(matches!(router.resolve(other), Err(ResolveError::NotFound)), "{pattern} matched {other}");
        }
    }
}

#[test]
fn registration_order_disambiguates_overlaps() {
    let router = Router::builder().route("/item/:id", "param").route("/item/new", "literal").build().unwrap();

    // Expected behavior, not a bug: the wildcard registered first shadows
    // the literal route.
    let matched = router.resolve("/item/new").unwrap();
    assert_eq!(*matched.payload(), "param");
    assert_eq!(matched.args().get("id"), Some("new"));
}

#[test]
fn unregistered_path_is_a_miss_not_an_error() {
    let router = Router::builder().route("/present", ()).build().unwrap();
    match router.resolve("/absent") {
        Err(ResolveError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|m| m.args().len())),
    }
}

#[test]
fn lookup_misses_return_none() {
    let mut router = Router::new();
    router.register("/hello/:name", ()).unwrap();

    let matched = router.resolve("/hello/world").unwrap();
    assert_eq!(matched.args().get("surname"), None);
    assert_eq!(matched.args().get_index(1), None);
    assert_eq!(matched.args().get_index(usize::MAX), None);
}

#[test]
fn param_capacity_is_enforced_at_registration() {
    let over: String = (0..=MAX_ROUTE_PARAMS).map(|i| format!("/:p{i}")).collect();
    let mut router = Router::new();
    assert!(router.register(&over, ()).is_err());
    assert!(router.is_empty());
}
