use super::*;
use crate::KEY_SESSION_TOKEN;
use crate::mock::{MemoryStore, RecordingNavigator};
use crate::session::SessionHolder;
use std::collections::HashSet;

// =========================================================
// 辅助函数
// =========================================================

fn session(authenticated: bool) -> Session {
    let store = if authenticated {
        MemoryStore::with(&[(KEY_SESSION_TOKEN, "abc123")])
    } else {
        MemoryStore::new()
    };
    let navigator = RecordingNavigator::new();
    SessionHolder::new(&store, &navigator).initialize()
}

// =========================================================
// 路由表
// =========================================================

#[test]
fn test_table_paths_are_unique() {
    let paths: HashSet<_> = ROUTE_TABLE.iter().map(|entry| entry.path).collect();
    assert_eq!(paths.len(), ROUTE_TABLE.len());
}

#[test]
fn test_view_path_matches_table() {
    for entry in ROUTE_TABLE {
        assert_eq!(entry.view.path(), entry.path);
        assert_eq!(entry.view.to_string(), entry.path);
    }
}

#[test]
fn test_only_login_and_register_are_open() {
    let open: Vec<_> = ROUTE_TABLE
        .iter()
        .filter(|entry| !entry.requires_auth)
        .map(|entry| entry.view)
        .collect();
    assert_eq!(open, vec![View::Login, View::Register]);
}

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path("/word-cloud"), "/word-cloud");
    assert_eq!(normalize_path("/word-cloud/"), "/word-cloud");
    assert_eq!(normalize_path("/word-cloud?x=1#top"), "/word-cloud");
    assert_eq!(normalize_path("/#section"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("//"), "/");
}

// =========================================================
// 守卫判定
// =========================================================

#[test]
fn test_anonymous_is_redirected_from_every_protected_route() {
    let anon = session(false);
    for entry in ROUTE_TABLE.iter().filter(|entry| entry.requires_auth) {
        assert_eq!(
            resolve(entry.path, &anon),
            Ok(RenderDecision::Redirect("/login")),
            "{} should be protected",
            entry.path
        );
    }
}

#[test]
fn test_anonymous_can_open_public_routes() {
    let anon = session(false);
    assert_eq!(
        resolve("/login", &anon),
        Ok(RenderDecision::Render(View::Login))
    );
    assert_eq!(
        resolve("/register", &anon),
        Ok(RenderDecision::Render(View::Register))
    );
}

#[test]
fn test_authenticated_renders_every_route() {
    let authed = session(true);
    for entry in ROUTE_TABLE {
        assert_eq!(
            resolve(entry.path, &authed),
            Ok(RenderDecision::Render(entry.view))
        );
    }
}

#[test]
fn test_unknown_route_is_reported() {
    let authed = session(true);
    assert_eq!(
        resolve("/no-such-chart", &authed),
        Err(GateError::UnknownRoute("/no-such-chart".to_string()))
    );
}

#[test]
fn test_resolve_is_deterministic() {
    let anon = session(false);
    let first = resolve("/books-by-year", &anon);
    for _ in 0..3 {
        assert_eq!(resolve("/books-by-year", &anon), first);
    }
}

#[test]
fn test_resolve_ignores_query_and_trailing_slash() {
    let authed = session(true);
    assert_eq!(
        resolve("/books-by-publisher/?page=2", &authed),
        Ok(RenderDecision::Render(View::BooksByPublisherChart))
    );
}

#[test]
fn test_decision_location() {
    assert_eq!(
        RenderDecision::Render(View::WordCloud).location("/word-cloud"),
        "/word-cloud"
    );
    assert_eq!(
        RenderDecision::Redirect("/login").location("/word-cloud"),
        "/login"
    );
    assert!(RenderDecision::Redirect("/login").is_redirect());
    assert!(!RenderDecision::Render(View::Books).is_redirect());
}

// =========================================================
// 场景
// =========================================================

#[test]
fn test_no_token_redirects_home_to_login() {
    let anon = session(false);
    assert_eq!(anon.state(), crate::SessionState::Anonymous);
    assert_eq!(resolve("/", &anon), Ok(RenderDecision::Redirect("/login")));
}

#[test]
fn test_token_renders_word_cloud() {
    let authed = session(true);
    assert_eq!(authed.state(), crate::SessionState::Authenticated);
    assert_eq!(
        resolve("/word-cloud", &authed),
        Ok(RenderDecision::Render(View::WordCloud))
    );
}

#[test]
fn test_login_re_resolves_same_path_to_render() {
    let store = MemoryStore::new();
    let navigator = RecordingNavigator::new();
    let holder = SessionHolder::new(&store, &navigator);
    let mut session = holder.initialize();

    assert_eq!(
        resolve("/dialogue", &session),
        Ok(RenderDecision::Redirect("/login"))
    );

    holder.mark_authenticated(&mut session);

    assert_eq!(
        resolve("/dialogue", &session),
        Ok(RenderDecision::Render(View::Dialogue))
    );
    // 软切换，不触发整页跳转
    assert!(navigator.visits().is_empty());
}
