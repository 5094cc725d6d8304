use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cefr_cli::main_entry().await
}
