//! HTML pages: landing page (issues the token cookie) and stats page

use axum::{response::Html, routing::get, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::http::extractors::{RequestToken, TOKEN_KEY};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const STATS_HTML: &str = include_str!("../../../static/stats.html");

/// Token cookie lifetime (one year)
const TOKEN_COOKIE_DAYS: i64 = 365;

/// GET / - landing page, persists the resolved token as a cookie
async fn index(
    RequestToken(token): RequestToken,
    jar: CookieJar,
) -> (CookieJar, Html<&'static str>) {
    let cookie = Cookie::build((TOKEN_KEY, token.into_string()))
        .max_age(time::Duration::days(TOKEN_COOKIE_DAYS))
        .path("/");

    (jar.add(cookie), Html(INDEX_HTML))
}

/// GET /stats
async fn stats() -> Html<&'static str> {
    Html(STATS_HTML)
}

/// Page routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/stats", get(stats))
}
