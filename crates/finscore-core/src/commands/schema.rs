use crate::ScoreResult;
use crate::commands::common::{category_rule_specs, column_specs, decision_band_specs};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SchemaData;

pub fn run() -> ScoreResult<SuccessEnvelope> {
    let data = SchemaData {
        columns: column_specs(),
        category_rules: category_rule_specs(),
        decision_bands: decision_band_specs(),
    };
    success("schema", data)
}
