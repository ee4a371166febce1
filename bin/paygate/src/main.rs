#[tokio::main]
async fn main() -> eyre::Result<()> {
    paygate::run().await
}
