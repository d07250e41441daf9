//! 滚动加载服务 - 业务能力层
//!
//! 反复滚动到底部，让页面加载更多结果，直到数量够了或高度不再变化

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::infrastructure::DriverSession;
use crate::models::catalog::RESULT_PROBE;

/// 滚动停止的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStop {
    /// 已加载的结果数达到目标
    TargetReached { loaded: usize },
    /// 两次测量的内容高度相同
    HeightStable { loaded: usize },
    /// 达到最大轮数
    RoundLimit { loaded: usize },
    /// 驱动出错，提前结束
    Aborted,
}

/// 滚动加载器
pub struct ScrollLoader {
    settle_interval: Duration,
    max_rounds: usize,
    result_probe: String,
}

impl ScrollLoader {
    /// # 参数
    /// - `settle_interval`: 每次滚动后等待渲染的时间
    /// - `max_rounds`: 最大滚动轮数，高度一直变化时也能结束
    pub fn new(settle_interval: Duration, max_rounds: usize) -> Self {
        Self {
            settle_interval,
            max_rounds,
            result_probe: RESULT_PROBE.to_string(),
        }
    }

    /// 使用自定义的结果计数选择器
    pub fn with_probe(mut self, probe: impl Into<String>) -> Self {
        self.result_probe = probe.into();
        self
    }

    /// 滚动直到加载了 `max_results` 条结果或页面高度稳定
    ///
    /// 出错时只记录日志，调用方照常重新查询页面
    pub async fn load_more<D: DriverSession>(&self, driver: &D, max_results: usize) -> ScrollStop {
        match self.scroll_rounds(driver, max_results).await {
            Ok(stop) => {
                debug!("滚动加载结束: {:?}", stop);
                stop
            }
            Err(e) => {
                warn!("滚动加载时出错: {}", e);
                ScrollStop::Aborted
            }
        }
    }

    async fn scroll_rounds<D: DriverSession>(
        &self,
        driver: &D,
        max_results: usize,
    ) -> crate::error::DriverResult<ScrollStop> {
        let mut last_height = driver.content_height().await?;
        let mut loaded = 0;

        for round in 0..self.max_rounds {
            if loaded >= max_results {
                return Ok(ScrollStop::TargetReached { loaded });
            }

            driver.scroll_to_bottom().await?;
            sleep(self.settle_interval).await;

            loaded = driver.count(&self.result_probe).await?;
            let new_height = driver.content_height().await?;
            debug!(
                "第 {} 轮滚动: 结果 {} 条, 高度 {} -> {}",
                round + 1,
                loaded,
                last_height,
                new_height
            );

            if new_height == last_height {
                return Ok(ScrollStop::HeightStable { loaded });
            }
            last_height = new_height;
        }

        if loaded >= max_results {
            Ok(ScrollStop::TargetReached { loaded })
        } else {
            Ok(ScrollStop::RoundLimit { loaded })
        }
    }
}
