use anyhow::Result;
use job_scout::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logger::init(&config.log_level);

    // 初始化并运行应用
    let _postings = App::initialize(config).await?.run().await?;

    Ok(())
}
