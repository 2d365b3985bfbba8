//! 岗位准入判定
//! 各阶段按代价与选择性排序，任一阶段失败即短路返回

use crate::codec::FontDigitTable;
use crate::core::{Evaluation, JobPosting, KeywordMatch, RejectReason};
use crate::matcher::{KeywordMatcher, MatchTables};
use crate::recruiter::RecruiterActivityFilter;
use crate::salary::SalaryFilter;
use crate::utils::log_format::preview_compact;

use super::profile::FilterProfile;

const LOG_PREVIEW_CHARS: usize = 40;

/// 岗位准入流水线
/// 只持有构造时注入的只读词表，可被多个工作线程共享调用
#[derive(Debug, Clone, Default)]
pub struct JobAdmissibilityPipeline {
    keyword: KeywordMatcher,
    salary: SalaryFilter,
    recruiter: RecruiterActivityFilter,
}

impl JobAdmissibilityPipeline {
    pub fn new(tables: MatchTables, digits: FontDigitTable) -> Self {
        Self {
            keyword: KeywordMatcher::new(tables),
            salary: SalaryFilter::new(digits),
            recruiter: RecruiterActivityFilter,
        }
    }

    pub fn keyword_matcher(&self) -> &KeywordMatcher {
        &self.keyword
    }

    pub fn salary_filter(&self) -> &SalaryFilter {
        &self.salary
    }

    /// 判定单个岗位是否可投递，并给出关键词匹配度供下游记录
    pub fn evaluate(&self, posting: &JobPosting, profile: &FilterProfile) -> Evaluation {
        let title = posting.title.as_str();
        let matched = self.keyword.match_any(title, profile.keywords(), profile.schemes());
        if !matched.result.is_matched() {
            return self.rejected(posting, matched, RejectReason::KeywordMismatch);
        }
        log::debug!(
            "[pipeline] keyword matched: title='{}' keyword={:?} score={:.1}% scheme={}",
            preview_compact(title, LOG_PREVIEW_CHARS),
            matched.keyword,
            matched.result.score() * 100.0,
            matched.result.scheme()
        );

        if let Some(threshold) = profile.min_match_score() {
            if matched.result.score() < threshold {
                return self.rejected(posting, matched, RejectReason::ScoreBelowThreshold);
            }
        }

        if let Some(word) = profile.blacklist().blocked_position(title) {
            log::debug!("[pipeline] position blacklist hit '{}'", word);
            return self.rejected(posting, matched, RejectReason::PositionBlacklisted);
        }

        if self.salary.is_out_of_expected_range(&posting.salary_text, profile.salary()) {
            return self.rejected(posting, matched, RejectReason::SalaryOutOfRange);
        }

        if self
            .recruiter
            .is_dead_recruiter(posting.recruiter_activity_text.as_deref(), profile.dead_status())
        {
            return self.rejected(posting, matched, RejectReason::DeadRecruiter);
        }

        if let Some(word) = profile.blacklist().blocked_company(posting.company_name.as_deref()) {
            log::debug!("[pipeline] company blacklist hit '{}'", word);
            return self.rejected(posting, matched, RejectReason::CompanyBlacklisted);
        }

        log::info!(
            "[pipeline] admissible: title='{}' salary='{}' score={:.1}%",
            preview_compact(title, LOG_PREVIEW_CHARS),
            posting.salary_text,
            matched.result.score() * 100.0
        );
        Evaluation::accept(matched)
    }

    /// 批量判定，结果与输入顺序一致
    pub fn evaluate_all(&self, postings: &[JobPosting], profile: &FilterProfile) -> Vec<Evaluation> {
        postings.iter().map(|p| self.evaluate(p, profile)).collect()
    }

    /// 仅保留可投递的岗位
    pub fn admissible<'p>(
        &self,
        postings: &'p [JobPosting],
        profile: &FilterProfile,
    ) -> Vec<(&'p JobPosting, Evaluation)> {
        postings
            .iter()
            .map(|p| (p, self.evaluate(p, profile)))
            .filter(|(_, eval)| eval.admissible)
            .collect()
    }

    fn rejected(&self, posting: &JobPosting, matched: KeywordMatch, reason: RejectReason) -> Evaluation {
        log::info!(
            "[pipeline] skip: {} title='{}' salary='{}'",
            reason,
            preview_compact(&posting.title, LOG_PREVIEW_CHARS),
            posting.salary_text
        );
        Evaluation::reject(matched, reason)
    }
}
