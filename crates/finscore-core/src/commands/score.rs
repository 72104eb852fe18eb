use crate::ScoreResult;
use crate::commands::common::{analysis_data, statement_summary};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ScoreData;
use crate::scoring::analyze;
use crate::scoring::policy::SCORING_POLICY_VERSION;
use crate::statement::date::{build_filter, format_iso_date};
use crate::statement::input::resolve_source;
use crate::statement::normalize::normalize_rows;
use crate::statement::parse::parse_source;
use crate::statement::types::{StatementFilter, StatementRecord};

#[derive(Debug, Default)]
pub struct ScoreRunOptions {
    pub path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>, from: Option<&str>, to: Option<&str>) -> ScoreResult<SuccessEnvelope> {
    run_with_options(ScoreRunOptions {
        path,
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ScoreRunOptions) -> ScoreResult<SuccessEnvelope> {
    let filter = build_filter(options.from.as_deref(), options.to.as_deref(), "score")?;
    let source = resolve_source(options.path, options.stdin_override)?;
    let rows = parse_source(&source.content)?;
    let records = normalize_rows(&rows)?;
    let scoped = apply_filter(records, &filter);
    let analysis = analyze(&scoped);

    let data = ScoreData {
        policy_version: SCORING_POLICY_VERSION.to_string(),
        source: source.source_ref,
        from: filter.from.as_ref().map(format_iso_date),
        to: filter.to.as_ref().map(format_iso_date),
        summary: statement_summary(&scoped),
        analysis: analysis_data(&analysis),
    };

    success("score", data)
}

fn apply_filter(records: Vec<StatementRecord>, filter: &StatementFilter) -> Vec<StatementRecord> {
    records
        .into_iter()
        .filter(|record| {
            if let Some(from) = filter.from
                && record.date < from
            {
                return false;
            }
            if let Some(to) = filter.to
                && record.date > to
            {
                return false;
            }
            true
        })
        .collect()
}
