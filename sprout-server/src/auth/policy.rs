//! Route authorization policy
//!
//! A declarative, ordered rule table mapping HTTP verb + URL pattern
//! to an access requirement. Evaluation is first-match-wins; requests
//! matching no rule require an authenticated context.
//!
//! Pattern grammar: literal segments, `*` matches exactly one
//! segment, a trailing `/**` matches any suffix (including none).

use http::Method;
use shared::models::Role;

use crate::auth::CurrentUser;
use crate::utils::AppError;

/// Access requirement for a matched route
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// No authentication required
    Public,
    /// Any authenticated principal
    Authenticated,
    /// Exactly this role
    Role(Role),
    /// Any of these roles
    AnyRole(&'static [Role]),
}

/// One policy rule. `method: None` matches every verb.
#[derive(Debug, Clone)]
pub struct Rule {
    pub method: Option<Method>,
    pub pattern: &'static str,
    pub access: Access,
}

impl Rule {
    fn new(method: Option<Method>, pattern: &'static str, access: Access) -> Self {
        Self {
            method,
            pattern,
            access,
        }
    }
}

/// Ordered authorization rule table
#[derive(Debug, Clone)]
pub struct AuthorizationPolicy {
    rules: Vec<Rule>,
}

impl AuthorizationPolicy {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The platform's route policy.
    ///
    /// The public allow-list covers registration, login, course
    /// browsing, the API docs prefixes and the health probe; course
    /// mutation is admin-only, cart mutation belongs to customers,
    /// and everything else under `/api` requires a login.
    pub fn default_rules() -> Self {
        use Access::{AnyRole, Authenticated, Public};
        use Method as M;

        const USER_OR_ADMIN: &[Role] = &[Role::User, Role::Admin];
        let admin_only = Access::Role(Role::Admin);
        let user_only = Access::Role(Role::User);

        Self::new(vec![
            // Public allow-list
            Rule::new(Some(M::POST), "/api/user/login", Public),
            Rule::new(Some(M::POST), "/api/user/register", Public),
            Rule::new(Some(M::GET), "/api/course", Public),
            Rule::new(None, "/v3/api-docs/**", Public),
            Rule::new(None, "/swagger-ui/**", Public),
            Rule::new(None, "/swagger-ui.html", Public),
            Rule::new(Some(M::GET), "/health", Public),
            // Course mutation is admin-only
            Rule::new(Some(M::POST), "/api/course", admin_only.clone()),
            Rule::new(Some(M::PUT), "/api/course/*", admin_only.clone()),
            Rule::new(Some(M::DELETE), "/api/course/*", admin_only.clone()),
            // Review moderation
            Rule::new(Some(M::GET), "/api/review", admin_only),
            // Cart ownership routes
            Rule::new(Some(M::PUT), "/api/cart/*", user_only.clone()),
            Rule::new(Some(M::GET), "/api/cart/user/*", user_only.clone()),
            Rule::new(Some(M::DELETE), "/api/cart/clear/*", user_only.clone()),
            Rule::new(Some(M::POST), "/api/cart", AnyRole(USER_OR_ADMIN)),
            Rule::new(Some(M::GET), "/api/cart", AnyRole(USER_OR_ADMIN)),
            Rule::new(
                Some(M::DELETE),
                "/api/cart/*/course/*",
                AnyRole(USER_OR_ADMIN),
            ),
            // Customer lookup by user id
            Rule::new(Some(M::GET), "/api/customer/user/*", user_only),
            // Everything else under /api needs a login
            Rule::new(None, "/api/**", Authenticated),
        ])
    }

    /// Access requirement for a request line. Falls back to
    /// `Authenticated` when no rule matches.
    pub fn required_access(&self, method: &Method, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| {
                rule.method.as_ref().is_none_or(|m| m == method)
                    && pattern_matches(rule.pattern, path)
            })
            .map(|rule| &rule.access)
            .unwrap_or(&Access::Authenticated)
    }

    /// Evaluate the table against an (optionally) authenticated
    /// context. No context on a protected route is `Unauthorized`;
    /// a context lacking the required role is `Forbidden`.
    pub fn check(
        &self,
        method: &Method,
        path: &str,
        user: Option<&CurrentUser>,
    ) -> Result<(), AppError> {
        match self.required_access(method, path) {
            Access::Public => Ok(()),
            Access::Authenticated => match user {
                Some(_) => Ok(()),
                None => Err(AppError::unauthorized()),
            },
            Access::Role(role) => match user {
                Some(u) if u.has_role(*role) => Ok(()),
                Some(_) => Err(AppError::forbidden(format!(
                    "Requires role: {}",
                    role.as_str()
                ))),
                None => Err(AppError::unauthorized()),
            },
            Access::AnyRole(roles) => match user {
                Some(u) if roles.iter().any(|r| u.has_role(*r)) => Ok(()),
                Some(_) => Err(AppError::forbidden(format!(
                    "Requires one of: {}",
                    roles
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))),
                None => Err(AppError::unauthorized()),
            },
        }
    }
}

/// Segment-wise pattern match with `*` and trailing `/**` wildcards
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segs = pattern.trim_start_matches('/').split('/');
    let mut path_segs = path.trim_start_matches('/').split('/').peekable();

    loop {
        match pattern_segs.next() {
            // Trailing /** swallows whatever is left
            Some("**") => return true,
            Some("*") => {
                if path_segs.next().is_none() {
                    return false;
                }
            }
            Some(literal) => match path_segs.next() {
                Some(seg) if seg == literal => {}
                _ => return false,
            },
            None => return path_segs.peek().is_none(),
        }
    }
}
