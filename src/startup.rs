use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::{
    create_screen, delete_flower, draw_plant, flower_detail, garden, rename_flower, save_flower,
};
use crate::store::FlowerStore;
use crate::trefle::TrefleClient;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let trefle_client = configuration.trefle.client();

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, connection_pool, trefle_client).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(configuration.connect_options())
}

async fn run(
    listener: TcpListener,
    db_pool: PgPool,
    trefle_client: TrefleClient,
) -> Result<Server, anyhow::Error> {
    let store = Data::new(FlowerStore::new(db_pool));
    let trefle_client = Data::new(trefle_client);
    let server = HttpServer::new(move || {
        App::new()
            .route("/", web::get().to(create_screen))
            .route("/draw", web::post().to(draw_plant))
            .route("/home", web::get().to(garden))
            .route("/flower", web::post().to(save_flower))
            .route("/flower/{flower_id}", web::get().to(flower_detail))
            .route("/flower/{flower_id}/name", web::post().to(rename_flower))
            .route("/flower/{flower_id}/delete", web::post().to(delete_flower))
            .app_data(store.clone())
            .app_data(trefle_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
