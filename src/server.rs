use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

/// Folders under the site root holding project and tool images.
pub const IMAGE_DIRS: [&str; 2] = ["projects", "icons"];

/// One week. Images only change on redeploy.
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=604800";

/// Serves each of `IMAGE_DIRS` under `site_root` with a long-lived Cache-Control header.
pub fn image_routes<S>(site_root: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    IMAGE_DIRS.iter().fold(Router::new(), |router, dir| {
        let service = ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                header::CACHE_CONTROL,
                HeaderValue::from_static(IMAGE_CACHE_CONTROL),
            ))
            .service(ServeDir::new(format!("{site_root}/{dir}")));
        router.nest_service(&format!("/{dir}"), service)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_images_are_served_cacheable() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("projects")).unwrap();
        std::fs::create_dir(root.path().join("icons")).unwrap();
        std::fs::write(root.path().join("projects/project1.jpg"), b"jpeg").unwrap();
        std::fs::write(root.path().join("icons/blender.png"), b"png").unwrap();
        let app: Router = image_routes(root.path().to_str().unwrap());

        for uri in ["/projects/project1.jpg", "/icons/blender.png"] {
            let res = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
            assert_eq!(res.headers()[header::CACHE_CONTROL], IMAGE_CACHE_CONTROL);
        }

        let res = app.oneshot(get("/projects/missing.jpg")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_content_images_live_in_image_dirs() {
        use crate::content::{load, ProjectTarget, Variant};

        for variant in Variant::ALL {
            let content = load(variant).unwrap();
            let mut paths = content
                .tools
                .iter()
                .map(|t| t.icon.as_str())
                .collect::<Vec<_>>();
            for project in &content.projects {
                paths.push(&project.image);
                if let ProjectTarget::Gallery(gallery) = &project.target {
                    let len = gallery.len().get();
                    paths.extend((0..len).map(|i| gallery.image(i)));
                }
            }
            for path in paths {
                assert!(
                    IMAGE_DIRS.iter().any(|d| path.starts_with(&format!("/{d}/"))),
                    "{variant:?}: {path}"
                );
            }
        }
    }
}
