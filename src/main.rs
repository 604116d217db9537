#[tokio::main]
async fn main() -> anyhow::Result<()> {
    opbridge::run::start(std::env::args()).await
}
