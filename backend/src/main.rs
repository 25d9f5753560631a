mod greeting;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let server_port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| String::from("3000"))
        .parse::<u16>()
        .expect("Port must be a u16");

    log::info!("Listening on port {server_port}");

    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .route("/hello/{name}", actix_web::web::get().to(greeting::hello))
            .route("/hello", actix_web::web::get().to(greeting::hello_missing))
    })
    .bind(("0.0.0.0", server_port))?
    .run()
    .await
}
