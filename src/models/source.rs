/// 招聘网站枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Source {
    /// LinkedIn
    LinkedIn,
    /// Indeed
    Indeed,
    /// BuscoJobs 乌拉圭站
    BuscoJobsUY,
    /// 通过选择器配置接入的任意网站
    Generic,
}

impl Source {
    /// 内置的三个招聘网站（不含 Generic）
    pub const BUILT_IN: [Source; 3] = [Source::LinkedIn, Source::Indeed, Source::BuscoJobsUY];

    /// 获取展示名称
    pub fn name(self) -> &'static str {
        match self {
            Source::LinkedIn => "LinkedIn",
            Source::Indeed => "Indeed",
            Source::BuscoJobsUY => "BuscoJobs Uruguay",
            Source::Generic => "Generic",
        }
    }

    /// 从配置中的名称解析（大小写不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Some(Source::LinkedIn),
            "indeed" => Some(Source::Indeed),
            "buscojobs" | "buscojobsuy" | "buscojobs_uy" => Some(Source::BuscoJobsUY),
            "generic" => Some(Source::Generic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
