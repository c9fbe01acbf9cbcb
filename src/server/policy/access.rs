//! Route gate decisions.
//!
//! The gate protects the admin and seller consoles and keeps logged in callers away from
//! the login page. Prefixes match whole path segments only, so `/admin/orders` is
//! protected while `/administrator` is not.

use entity::sea_orm_active_enums::Role;

/// Where anonymous callers are sent
pub const LOGIN_PATH: &str = "/login";
/// Where callers without the required role are sent
pub const ACCESS_DENIED_PATH: &str = "/access-denied";
/// Landing route for admins
pub const ADMIN_HOME: &str = "/admin";
/// Landing route for sellers
pub const SELLER_HOME: &str = "/seller";
/// Landing route for customers and delivery staff
pub const USER_HOME: &str = "/";

/// Identity of the caller as far as the gate is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// No user in session
    Anonymous,
    /// Logged in user with their current role
    Authenticated(Role),
}

/// Outcome of running a request path through the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through
    Allow,
    /// Send the caller to the given route instead
    Redirect(&'static str),
}

/// Landing route for a role after login
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME,
        Role::Seller => SELLER_HOME,
        Role::User | Role::Delivery => USER_HOME,
    }
}

/// Whether `path` is `prefix` itself or nested below it
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Decides whether `caller` may proceed to `path`.
///
/// | Path | Caller | Decision |
/// |---|---|---|
/// | `/admin`, `/admin/*` | anonymous | redirect to `/login` |
/// | `/admin`, `/admin/*` | not admin | redirect to `/access-denied` |
/// | `/seller`, `/seller/*` | anonymous | redirect to `/login` |
/// | `/seller`, `/seller/*` | not seller | redirect to `/access-denied` |
/// | `/login`, `/login/*` | authenticated | redirect to the role home |
/// | anything else | anyone | allow |
pub fn guard_route(path: &str, caller: Caller) -> GateDecision {
    if matches_prefix(path, ADMIN_HOME) {
        return require_role(caller, Role::Admin);
    }

    if matches_prefix(path, SELLER_HOME) {
        return require_role(caller, Role::Seller);
    }

    if matches_prefix(path, LOGIN_PATH) {
        if let Caller::Authenticated(role) = caller {
            return GateDecision::Redirect(role_home(role));
        }
    }

    GateDecision::Allow
}

fn require_role(caller: Caller, required: Role) -> GateDecision {
    match caller {
        Caller::Anonymous => GateDecision::Redirect(LOGIN_PATH),
        Caller::Authenticated(role) if role == required => GateDecision::Allow,
        Caller::Authenticated(_) => GateDecision::Redirect(ACCESS_DENIED_PATH),
    }
}
