//! Hostname-based request routing.
//!
//! Classifies a request by its `Host` header and computes the rewritten
//! internal path. The whole module is pure: the boundary middleware feeds it
//! the host, path, query, and session presence, and applies the returned
//! [`RoutingDecision`].
//!
//! Hostname-to-path rewriting lets a single path-based application serve
//! unlimited custom domains and subdomains without per-tenant routing
//! configuration. The session check for the app subdomain is inlined in the
//! decision so unauthenticated users never reach app-internal paths.

/// Directory holding static font assets; requests under it bypass routing.
const STATIC_FONT_DIR: &str = "/_static/fonts/";

/// Font file extensions excluded from routing regardless of location.
const FONT_EXTENSIONS: [&str; 5] = [".ttf", ".woff", ".woff2", ".eot", ".otf"];

/// Internal path prefix serving the authenticated application tree.
pub const APP_SECTION: &str = "/app";

/// Internal path prefix serving the root/marketing tree.
pub const HOME_SECTION: &str = "/home";

/// Hostname classification rules, resolved once at process start.
#[derive(Debug, Clone)]
pub struct RouterRules {
    /// Base domain under which tenant subdomains are issued.
    pub root_domain: String,
    /// Port used for `*.localhost:<port>` local subdomain testing.
    pub dev_port: u16,
}

impl RouterRules {
    pub fn new(root_domain: impl Into<String>, dev_port: u16) -> Self {
        Self {
            root_domain: root_domain.into(),
            dev_port,
        }
    }

    /// The fixed subdomain hosting the authenticated application.
    fn app_host(&self) -> String {
        format!("app.{}", self.root_domain)
    }

    /// Local development suffix substituted with the root domain.
    fn dev_suffix(&self) -> String {
        format!(".localhost:{}", self.dev_port)
    }

    /// Bare localhost host treated like the root domain.
    fn dev_host(&self) -> String {
        format!("localhost:{}", self.dev_port)
    }
}

/// The single outcome of routing one request.
///
/// Exactly one decision is produced per request; redirect and rewrite are
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve the request untouched.
    PassThrough,
    /// Instruct the client to navigate to a different URL.
    Redirect(String),
    /// Serve a different internal path for the same externally visible URL.
    Rewrite(String),
}

/// Which logical site a hostname belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostClass {
    /// `app.<root-domain>`, gated by a session check.
    App,
    /// The root domain or bare localhost.
    Root,
    /// A tenant subdomain or custom domain.
    Tenant(String),
}

/// Returns true for font asset paths that bypass routing entirely.
///
/// Checked before hostname classification so font requests never pay the
/// session-lookup cost.
pub fn is_font_asset(pathname: &str) -> bool {
    pathname.contains(STATIC_FONT_DIR)
        || FONT_EXTENSIONS.iter().any(|ext| pathname.ends_with(ext))
}

/// Derives the effective hostname, mapping `.localhost:<port>` subdomains
/// onto the production root domain for local multi-subdomain testing.
pub fn effective_hostname(rules: &RouterRules, host: &str) -> String {
    host.replace(&rules.dev_suffix(), &format!(".{}", rules.root_domain))
}

/// Classifies an effective hostname into its logical site.
pub fn classify_hostname(rules: &RouterRules, hostname: &str) -> HostClass {
    if hostname == rules.app_host() {
        HostClass::App
    } else if hostname == rules.root_domain || hostname == rules.dev_host() {
        HostClass::Root
    } else {
        HostClass::Tenant(hostname.to_string())
    }
}

/// Reconstructs the logical path: `<pathname>` plus `?<query>` only when a
/// non-empty query string is present, preserved byte-for-byte.
fn logical_path(pathname: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{pathname}?{q}"),
        _ => pathname.to_string(),
    }
}

/// Prefixes a logical path with a section, avoiding a trailing slash when the
/// path is exactly `/` (`/app`, not `/app/`).
fn section_path(section: &str, path: &str) -> String {
    if path == "/" {
        section.to_string()
    } else {
        format!("{section}{path}")
    }
}

/// Produces exactly one [`RoutingDecision`] for a request.
///
/// `has_session` reflects the session-read capability for the app subdomain
/// branch; a failed session read is folded into `false` by the caller (fail
/// closed toward requiring login). Note that the `/login` comparisons run
/// against the full logical path, so `/login?error=x` is not `/login`.
pub fn decide(
    rules: &RouterRules,
    host: &str,
    pathname: &str,
    query: Option<&str>,
    has_session: bool,
) -> RoutingDecision {
    if is_font_asset(pathname) {
        return RoutingDecision::PassThrough;
    }

    let hostname = effective_hostname(rules, host);
    let path = logical_path(pathname, query);

    match classify_hostname(rules, &hostname) {
        HostClass::App => {
            if !has_session && path != "/login" {
                RoutingDecision::Redirect("/login".to_string())
            } else if has_session && path == "/login" {
                RoutingDecision::Redirect("/".to_string())
            } else {
                RoutingDecision::Rewrite(section_path(APP_SECTION, &path))
            }
        }
        HostClass::Root => RoutingDecision::Rewrite(section_path(HOME_SECTION, &path)),
        HostClass::Tenant(hostname) => RoutingDecision::Rewrite(format!("/{hostname}{path}")),
    }
}
