use anyhow::Result;
use textru_bulk_check::utils::logging;
use textru_bulk_check::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let summary = App::initialize(config)?.run().await?;

    if summary.failed > 0 {
        tracing::warn!("有 {} 篇文章检测失败，详见报告中的\"错误\"列", summary.failed);
    }

    Ok(())
}
