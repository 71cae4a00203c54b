use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;
use crate::utils::format::short_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = store::open(cfg)?;

        // Resolve first so the prompt names the real record.
        let session = SessionLogic::resolve(store.as_mut(), id)?;

        if !yes {
            let prompt = format!(
                "Delete session {} ({})? This action is irreversible.",
                short_id(&session.id),
                session.charged_at
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        SessionLogic::delete(store.as_mut(), &session.id)?;
    }

    Ok(())
}
