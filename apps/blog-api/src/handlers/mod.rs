//! HTTP handlers and route configuration.
//!
//! Routing is one table of (method, path shape) entries, registered under
//! every accepted collection path.

mod health;
mod posts;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Route, web};

use crate::middleware::error::{AppError, AppResult};

/// Collection paths accepted for every operation.
pub const COLLECTIONS: [&str; 2] = ["/posts", "/blog"];

/// Whether a route addresses the collection or one post in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Collection,
    Item,
}

impl Shape {
    fn suffix(self) -> &'static str {
        match self {
            Shape::Collection => "",
            Shape::Item => "/{id}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// The routing table.
pub const ROUTES: [(Method, Shape, Operation); 5] = [
    (Method::GET, Shape::Collection, Operation::List),
    (Method::POST, Shape::Collection, Operation::Create),
    (Method::GET, Shape::Item, Operation::Get),
    (Method::PUT, Shape::Item, Operation::Update),
    (Method::DELETE, Shape::Item, Operation::Delete),
];

impl Operation {
    fn route(self, method: Method) -> Route {
        let route = web::method(method);
        match self {
            Operation::List => route.to(posts::list_posts),
            Operation::Get => route.to(posts::get_post),
            Operation::Create => route.to(posts::create_post),
            Operation::Update => route.to(posts::update_post),
            Operation::Delete => route.to(posts::delete_post),
        }
    }
}

/// Configure all application routes, optionally also under a deployment stage prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig, stage_prefix: Option<&str>) {
    cfg.route("/health", web::get().to(health::health_check));

    let prefixes = std::iter::once("").chain(stage_prefix);
    for prefix in prefixes {
        for collection in COLLECTIONS {
            for shape in [Shape::Collection, Shape::Item] {
                let path = format!("{prefix}{collection}{}", shape.suffix());
                let resource = ROUTES
                    .iter()
                    .filter(|(_, s, _)| *s == shape)
                    .fold(web::resource(path), |resource, (method, _, op)| {
                        resource.route(op.route(method.clone()))
                    });

                cfg.service(resource.default_service(web::to(fallback)));
            }
        }
    }
}

/// Everything the routing table does not match.
///
/// OPTIONS short-circuits with an empty 200; other known methods get a 404,
/// unknown methods a 405.
pub async fn fallback(req: HttpRequest) -> AppResult<HttpResponse> {
    let method = req.method();

    if method == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    let known = ROUTES.iter().any(|(m, _, _)| m == method);
    if known {
        tracing::debug!(%method, path = %req.path(), "No route");
        Err(AppError::RouteNotFound)
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::middleware::NormalizePath;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use blog_core::domain::Post;
    use blog_infra::InMemoryPostRepository;

    use crate::middleware::cors::{ALLOWED_METHODS, cors_headers};
    use crate::state::{AppState, MISSING_TABLE};

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .wrap(cors_headers())
                    .wrap(NormalizePath::trim())
                    .app_data(web::Data::new($state))
                    .configure(|cfg| configure_routes(cfg, Some("/prod")))
                    .default_service(web::to(fallback)),
            )
            .await
        };
    }

    fn memory_state() -> AppState {
        AppState::with_repository(Arc::new(InMemoryPostRepository::new("blog-posts")), "memory")
    }

    fn assert_cors<B>(resp: &actix_web::dev::ServiceResponse<B>) {
        let headers = resp.headers();
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            ALLOWED_METHODS
        );
    }

    #[actix_web::test]
    async fn test_create_get_delete_scenario() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_payload(r#"{"title":"Hello","content":"World"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_cors(&resp);
        let created: Value = test::read_body_json(resp).await;

        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created["author"], "Anonymous");
        assert_eq!(created["tags"], json!([]));
        assert_eq!(created["createdAt"], created["updatedAt"]);

        let req = test::TestRequest::get().uri(&format!("/posts/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::delete().uri(&format!("/posts/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_cors(&resp);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get().uri(&format!("/posts/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Post not found"}));

        let req = test::TestRequest::delete().uri(&format!("/posts/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_create_round_trip_keeps_fields() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({
                "title": "Rust",
                "content": "Ownership",
                "author": "Ferris",
                "tags": ["lang", "systems"]
            }))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", created.id))
            .to_request();
        let fetched: Post = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched.title, "Rust");
        assert_eq!(fetched.content, "Ownership");
        assert_eq!(fetched.author, "Ferris");
        assert_eq!(fetched.tags, vec!["lang".to_string(), "systems".to_string()]);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[actix_web::test]
    async fn test_create_coerces_malformed_body() {
        let app = init_app!(memory_state());

        for payload in ["", "not json", r#"{"title": 5, "tags": "x"}"#] {
            let req = test::TestRequest::post()
                .uri("/posts")
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let post: Post = test::read_body_json(resp).await;
            assert_eq!(post.title, "Untitled");
            assert_eq!(post.content, "");
            assert_eq!(post.author, "Anonymous");
            assert!(post.tags.is_empty());
        }
    }

    #[actix_web::test]
    async fn test_update_preserves_identity() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "Old", "content": "Body", "author": "Ada", "tags": ["a"]}))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/posts/{}", created.id))
            .set_json(json!({"title": "New", "content": "Other", "tags": ["b", "c"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Post = test::read_body_json(resp).await;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "Other");
        assert_eq!(updated.author, "Anonymous");
        assert_eq!(updated.tags, vec!["b".to_string(), "c".to_string()]);

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", created.id))
            .to_request();
        let fetched: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);
    }

    #[actix_web::test]
    async fn test_update_missing_post_is_not_found() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::put()
            .uri("/posts/missing")
            .set_json(json!({"title": "New", "content": "Other"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post not found");

        let req = test::TestRequest::get().uri("/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_list_contains_created_posts_on_every_alias() {
        let app = init_app!(memory_state());

        let mut ids = Vec::new();
        for (i, path) in ["/posts", "/blog", "/posts/", "/prod/posts"].iter().enumerate() {
            let req = test::TestRequest::post()
                .uri(path)
                .set_json(json!({"title": format!("Post {i}"), "content": "x"}))
                .to_request();
            let post: Post = test::call_and_read_body_json(&app, req).await;
            ids.push(post.id);
        }

        for path in ["/posts", "/blog", "/blog/", "/prod/blog"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
            let posts: Vec<Post> = test::read_body_json(resp).await;
            for id in &ids {
                assert!(posts.iter().any(|p| &p.id == id), "{path} is missing {id}");
            }
        }
    }

    #[actix_web::test]
    async fn test_get_unknown_id_on_blog_alias() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::get().uri("/blog/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_cors(&resp);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Post not found"}));
    }

    #[actix_web::test]
    async fn test_options_short_circuits_on_any_path() {
        let app = init_app!(memory_state());

        for path in ["/posts", "/posts/abc", "/anything/else"] {
            let req = test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri(path)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "OPTIONS {path}");
            assert_cors(&resp);
            assert!(test::read_body(resp).await.is_empty());
        }
    }

    #[actix_web::test]
    async fn test_unknown_method_is_not_allowed() {
        let app = init_app!(memory_state());

        for path in ["/posts", "/posts/abc", "/elsewhere"] {
            let req = test::TestRequest::default()
                .method(Method::PATCH)
                .uri(path)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "PATCH {path}");
            assert_cors(&resp);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"error": "Method not allowed"}));
        }
    }

    #[actix_web::test]
    async fn test_unmatched_route_is_not_found() {
        let app = init_app!(memory_state());

        let cases = [
            (Method::GET, "/comments"),
            (Method::POST, "/posts/abc"),
            (Method::PUT, "/posts"),
            (Method::DELETE, "/blog"),
        ];
        for (method, path) in cases {
            let req = test::TestRequest::default()
                .method(method.clone())
                .uri(path)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method} {path}");
            assert_cors(&resp);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"error": "Not found"}));
        }
    }

    #[actix_web::test]
    async fn test_missing_table_fails_every_store_request() {
        let app = init_app!(AppState::unconfigured(MISSING_TABLE));

        let requests = [
            test::TestRequest::get().uri("/posts").to_request(),
            test::TestRequest::get().uri("/posts/abc").to_request(),
            test::TestRequest::post()
                .uri("/posts")
                .set_payload("{}")
                .to_request(),
            test::TestRequest::put().uri("/posts/abc").to_request(),
            test::TestRequest::delete().uri("/posts/abc").to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_cors(&resp);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Internal server error");
            assert!(body["details"].as_str().unwrap().contains(MISSING_TABLE));
        }

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/posts")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_reports_backend() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "memory");
        assert_eq!(body["tableConfigured"], true);
    }
}
