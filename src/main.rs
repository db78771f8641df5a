#[actix_web::main]
async fn main() -> std::io::Result<()> {
    daemon_mcp_server::run().await
}
