use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, middleware::Logger, web};
use env_logger::Env;
use log::info;

mod config;

use config::SiteConfig;

/// Static routes for the Trunk bundle. Unknown paths get `index.html` so
/// anchors and reloads on any path land on the page.
fn routes(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.index_file();

    cfg.service(Files::new("/assets", &site.assets_dir))
        .service(
            Files::new("/", &site.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(index).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let site = SiteConfig::from_env()?;
    info!(
        "serving {} (assets {}) on http://{}:{}",
        site.dist_dir.display(),
        site.assets_dir.display(),
        site.host,
        site.port
    );

    let bind = (site.host.clone(), site.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes(cfg, &site))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
