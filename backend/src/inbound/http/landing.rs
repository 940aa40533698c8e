//! Landing page and its stylesheet, compiled into the binary.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const STYLE_CSS: &str = include_str!("../../../static/style.css");

/// Serve the HTML landing page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Serve the landing page stylesheet.
#[get("/style.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLE_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use rstest::rstest;

    #[rstest]
    #[case("/", "text/html; charset=utf-8", "<form action=\"/api/users\"")]
    #[case("/style.css", "text/css; charset=utf-8", "input[type=\"submit\"]")]
    #[actix_web::test]
    async fn serves_static_assets(
        #[case] uri: &str,
        #[case] content_type: &str,
        #[case] snippet: &str,
    ) {
        let app = test::init_service(App::new().service(index).service(stylesheet)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some(content_type)
        );
        let body = test::read_body(res).await;
        assert!(std::str::from_utf8(&body).expect("utf8").contains(snippet));
    }
}
