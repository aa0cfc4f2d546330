//! The client route table and navigation guards.
//!
//! Routes are declarative: a path, a name, and the access flags the guard
//! evaluates against the current [`AuthState`] before navigation. The guard
//! itself has no opinion about how a denial is presented; it just answers
//! with a redirect target.

/// Where unauthenticated navigation is sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated navigation lands by default.
pub const HOME_PATH: &str = "/dashboard";

/// Access requirements attached to a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Route requires a signed-in session.
    pub requires_auth: bool,
    /// Route is only for signed-out visitors (login, register).
    pub requires_guest: bool,
    /// Route additionally requires the admin role.
    pub requires_admin: bool,
}

impl RouteMeta {
    pub const NONE: RouteMeta = RouteMeta {
        requires_auth: false,
        requires_guest: false,
        requires_admin: false,
    };
    pub const GUEST: RouteMeta = RouteMeta {
        requires_auth: false,
        requires_guest: true,
        requires_admin: false,
    };
    pub const AUTH: RouteMeta = RouteMeta {
        requires_auth: true,
        requires_guest: false,
        requires_admin: false,
    };
    pub const ADMIN: RouteMeta = RouteMeta {
        requires_auth: true,
        requires_guest: false,
        requires_admin: true,
    };
}

/// One entry in the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path pattern; `:segment` matches any single segment.
    pub path: &'static str,
    pub name: &'static str,
    /// Unconditional redirect, evaluated before the meta flags.
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
}

/// The application route table.
pub static ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Root",
        redirect: Some(HOME_PATH),
        meta: RouteMeta::NONE,
    },
    Route {
        path: "/login",
        name: "Login",
        redirect: None,
        meta: RouteMeta::GUEST,
    },
    Route {
        path: "/register",
        name: "Register",
        redirect: None,
        meta: RouteMeta::GUEST,
    },
    Route {
        path: "/activate",
        name: "Activate",
        redirect: None,
        meta: RouteMeta::GUEST,
    },
    Route {
        path: "/dashboard",
        name: "Dashboard",
        redirect: None,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/documents",
        name: "Documents",
        redirect: None,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/upload",
        name: "Upload",
        redirect: None,
        meta: RouteMeta::ADMIN,
    },
    Route {
        path: "/users",
        name: "Users",
        redirect: None,
        meta: RouteMeta::ADMIN,
    },
    Route {
        path: "/my-signed",
        name: "MySigned",
        redirect: None,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/sign/:id",
        name: "Sign",
        redirect: None,
        meta: RouteMeta::AUTH,
    },
];

/// The authentication view the guard consults. Implemented by
/// [`Session`](crate::session::Session).
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
    fn is_admin(&self) -> bool;
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Evaluates a route's access flags against the session.
pub fn evaluate(meta: RouteMeta, auth: &dyn AuthState) -> GuardDecision {
    if meta.requires_auth && !auth.is_authenticated() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if meta.requires_guest && auth.is_authenticated() {
        return GuardDecision::Redirect(HOME_PATH);
    }
    if meta.requires_admin && !auth.is_admin() {
        return GuardDecision::Redirect(HOME_PATH);
    }
    GuardDecision::Allow
}

/// Guards a navigation to `path`: resolves the route, follows declarative
/// redirects, then evaluates access. Unknown paths are allowed through so
/// the navigation layer can render its own not-found view.
pub fn guard(path: &str, auth: &dyn AuthState) -> GuardDecision {
    match find(path) {
        Some(route) => match route.redirect {
            Some(target) => GuardDecision::Redirect(target),
            None => evaluate(route.meta, auth),
        },
        None => GuardDecision::Allow,
    }
}

/// Finds the route matching a concrete path, honoring `:param` segments.
pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| matches_path(route.path, path))
}

fn matches_path(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    if pattern == "/" {
        return path == "/";
    }

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if !expected.starts_with(':') && expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAuth {
        authenticated: bool,
        admin: bool,
    }

    impl AuthState for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.authenticated
        }
        fn is_admin(&self) -> bool {
            self.admin
        }
    }

    const GUEST: FakeAuth = FakeAuth {
        authenticated: false,
        admin: false,
    };
    const MEMBER: FakeAuth = FakeAuth {
        authenticated: true,
        admin: false,
    };
    const ADMIN: FakeAuth = FakeAuth {
        authenticated: true,
        admin: true,
    };

    #[test]
    fn test_auth_required_redirects_guests_to_login() {
        assert_eq!(
            guard("/dashboard", &GUEST),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(guard("/dashboard", &MEMBER), GuardDecision::Allow);
    }

    #[test]
    fn test_guest_routes_redirect_signed_in_users_home() {
        assert_eq!(guard("/login", &MEMBER), GuardDecision::Redirect(HOME_PATH));
        assert_eq!(guard("/login", &GUEST), GuardDecision::Allow);
        assert_eq!(guard("/register", &GUEST), GuardDecision::Allow);
    }

    #[test]
    fn test_admin_routes_require_role() {
        assert_eq!(guard("/users", &ADMIN), GuardDecision::Allow);
        assert_eq!(guard("/users", &MEMBER), GuardDecision::Redirect(HOME_PATH));
        // Authentication is checked before the role.
        assert_eq!(guard("/upload", &GUEST), GuardDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_root_redirects_home() {
        assert_eq!(guard("/", &GUEST), GuardDecision::Redirect(HOME_PATH));
    }

    #[test]
    fn test_parameterized_path_matches() {
        let route = find("/sign/6507f1f77bcf86cd799439011").unwrap();
        assert_eq!(route.name, "Sign");
        assert_eq!(
            guard("/sign/abc", &GUEST),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(guard("/sign/abc", &MEMBER), GuardDecision::Allow);
    }

    #[test]
    fn test_param_segment_does_not_match_extra_depth() {
        assert!(find("/sign").is_none());
        assert!(find("/sign/a/b").is_none());
    }

    #[test]
    fn test_unknown_paths_are_allowed_through() {
        assert_eq!(guard("/no-such-page", &GUEST), GuardDecision::Allow);
    }
}
