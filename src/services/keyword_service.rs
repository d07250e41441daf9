//! 关键词服务 - 业务能力层
//!
//! 读取简历全文，请 LLM 给出 4 个用于搜索职位的关键词。
//! 与抓取流程没有共享状态。
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 兼容 OpenAI API 的服务（如本地 Ollama 的 `/v1` 接口）

use std::path::Path;

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use regex::Regex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::services::document_reader::read_document_text;

const KEYWORD_REQUEST: &str = "Please give me 4 keywords to search in a job application portal for this CV. Please only return the 4 keywords, separated by a comma.";

/// 系统消息：把简历全文嵌入进去
pub fn system_prompt(cv_text: &str) -> String {
    format!(
        "You are my assistant. The following text is a CV  \n {}. \n\n          I will require some help",
        cv_text
    )
}

/// 关键词服务
pub struct KeywordService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl KeywordService {
    /// 创建新的关键词服务
    pub fn new(config: &Config) -> Self {
        Self::with_model(config, config.llm_model_name.clone())
    }

    /// 使用指定模型
    pub fn with_model(config: &Config, model_name: impl Into<String>) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: model_name.into(),
        }
    }

    /// 从简历中提取关键词
    ///
    /// 返回 LLM 的原始回复（不校验是否真的是 4 个关键词）
    pub async fn suggest_keywords(&self, cv_path: &Path) -> Result<String> {
        let cv_text = read_document_text(cv_path)?;
        debug!("简历文本长度: {} 字符", cv_text.chars().count());

        self.send_to_llm(KEYWORD_REQUEST, &system_prompt(&cv_text)).await
    }

    /// 发送 system + user 两条消息，返回回复文本
    async fn send_to_llm(&self, user_message: &str, system_message: &str) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}

/// 把 LLM 回复拆成关键词列表
///
/// 支持逗号、分号、换行分隔，去掉编号和引号
pub fn split_keywords(raw: &str) -> Result<Vec<String>> {
    let separator = Regex::new(r"[,;\n，；]+")?;
    let numbering = Regex::new(r#"^\s*(?:\d+[.)]\s*|[-*•]\s*)?["'`]?|["'`.]\s*$"#)?;

    let mut keywords: Vec<String> = Vec::new();
    for part in separator.split(raw) {
        let keyword = numbering.replace_all(part.trim(), "").trim().to_string();
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    Ok(keywords)
}
