use std::io::Write;

use lexis_core::session::NO_TRANSLATION_MESSAGE;
use tokio::io::AsyncBufRead;

use super::{Flow, report};
use crate::io::Console;
use crate::state::AppState;

pub async fn handle_add_word<R, W>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(term) = console.ask("Word in the original language: ").await? else {
        return Ok(Flow::Exit);
    };
    if term.is_empty() {
        console.say("A word is required.")?;
        return Ok(Flow::Continue);
    }

    let prompt = if state.session.has_translator() {
        "Translation (empty to look it up): "
    } else {
        "Translation: "
    };
    let Some(mut translation) = console.ask(prompt).await? else {
        return Ok(Flow::Exit);
    };

    if translation.is_empty() {
        if !state.session.has_translator() {
            console.say("A translation is required.")?;
            return Ok(Flow::Continue);
        }

        let Some(suggested) = state.session.translate(&term).await else {
            console.say(NO_TRANSLATION_MESSAGE)?;
            console.say("Word not added.")?;
            return Ok(Flow::Continue);
        };

        match console.confirm(&format!("Use '{}'?", suggested), true).await? {
            None => return Ok(Flow::Exit),
            Some(false) => {
                console.say("Word not added.")?;
                return Ok(Flow::Continue);
            }
            Some(true) => translation = suggested,
        }
    }

    let Some(category) = console.ask("Category: ").await? else {
        return Ok(Flow::Exit);
    };

    match state
        .session
        .add_word(&state.user, &term, &translation, &category)
    {
        Ok(()) => console.say("Word added.")?,
        Err(e) => report(console, &e)?,
    }
    Ok(Flow::Continue)
}
