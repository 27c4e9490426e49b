use std::io::Write;

use lexis_core::session::NO_TRANSLATION_MESSAGE;
use tokio::io::AsyncBufRead;

use super::Flow;
use crate::io::Console;
use crate::state::AppState;

pub async fn handle_translate<R, W>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if !state.session.has_translator() {
        console.say("Translation is disabled. Set TRANSLATOR_ENABLED=true or pass --translate.")?;
        return Ok(Flow::Continue);
    }

    let Some(term) = console.ask("Term to translate: ").await? else {
        return Ok(Flow::Exit);
    };

    match state.session.translate(&term).await {
        Some(translation) => console.say(format!("{} -> {}", term, translation))?,
        None => console.say(NO_TRANSLATION_MESSAGE)?,
    }
    Ok(Flow::Continue)
}
