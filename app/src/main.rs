#[tokio::main]
async fn main() -> anyhow::Result<()> {
  charta_lib::run().await
}
