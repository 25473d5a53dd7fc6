#[tokio::main]
async fn main() -> anyhow::Result<()> {
    studygen_backend::run().await
}
