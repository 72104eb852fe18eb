use finscore_core::commands;
use finscore_core::{ScoreResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ScoreResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Score {
            from,
            to,
            json: _,
            path,
        } => {
            let from_value = from.as_ref().map(|value| value.as_str());
            let to_value = to.as_ref().map(|value| value.as_str());
            commands::score::run(path.clone(), from_value, to_value)
        }
        Commands::Demo { .. } => commands::demo::run(),
        Commands::Schema => commands::schema::run(),
    }
}
