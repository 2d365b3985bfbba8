use serde::{Deserialize, Serialize};

/// 抓取到的岗位快照，由上游抓取层创建，过滤流水线只读消费
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub salary_text: String,
    /// HR活跃时间文本，页面读取失败时为 None
    #[serde(default)]
    pub recruiter_activity_text: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, salary_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            salary_text: salary_text.into(),
            recruiter_activity_text: None,
            company_name: None,
        }
    }

    pub fn with_recruiter_activity(mut self, text: impl Into<String>) -> Self {
        self.recruiter_activity_text = Some(text.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }
}
