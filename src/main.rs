#[tokio::main]
async fn main() -> anyhow::Result<()> {
    slackedit::cli::run().await
}
