use super::*;
use crate::SWEEP_INTERVAL;
use crate::config::Config;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let preload = config.preload()?.moves().to_vec();
        let arcade =
            Arcade::from((config.order, preload)).limit(config.max_sessions, config.ttl());
        let arcade = web::Data::new(arcade);
        log::info!(
            "starting hosting server on {} (order {}, at most {} sessions, {}s ttl)",
            config.bind,
            config.order,
            config.max_sessions,
            config.session_ttl
        );
        Self::reap(arcade.clone());
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(arcade.clone())
                .configure(Self::routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await?;
        Ok(())
    }

    /// Periodically drops idle sessions so abandoned ones do not pile up
    /// between starts.
    fn reap(arcade: web::Data<Arcade>) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                arcade.sweep().await;
            }
        });
    }

    #[rustfmt::skip]
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .service(
                web::scope("/session")
                    .route("/start",       web::post().to(start))
                    .route("/{id}/play",   web::post().to(play))
                    .route("/{id}/upload", web::post().to(upload))
                    .route("/{id}/import", web::post().to(import))
                    .route("/{id}/stats",  web::get().to(stats))
                    .route("/{id}/table",  web::get().to(table))
                    .route("/{id}/close",  web::post().to(close)),
            );
    }
}
