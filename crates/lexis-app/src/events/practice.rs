use std::io::Write;

use lexis_core::{PracticeOutcome, PracticeRound};
use tokio::io::AsyncBufRead;

use super::{Flow, report};
use crate::io::Console;
use crate::state::AppState;

/// One question, one answer
pub async fn handle_practice<R, W>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let round = state.session.start_practice(&state.user, &mut rand::rng());

    let prompt = match round {
        Ok(PracticeRound::AwaitingAnswer(prompt)) => prompt,
        Ok(PracticeRound::NoWordsAvailable) => {
            console.say("No words to practice.")?;
            return Ok(Flow::Continue);
        }
        Err(e) => {
            report(console, &e)?;
            return Ok(Flow::Continue);
        }
    };

    let question = format!("What is the translation of '{}'? ", prompt.term);
    let Some(answer) = console.ask(&question).await? else {
        return Ok(Flow::Exit);
    };

    match state.session.answer_practice(&state.user, &prompt, &answer) {
        Ok(PracticeOutcome::Correct) => console.say("Correct!")?,
        Ok(PracticeOutcome::Incorrect { expected }) => {
            console.say(format!("Incorrect. The correct answer is '{}'.", expected))?
        }
        Err(e) => report(console, &e)?,
    }
    Ok(Flow::Continue)
}
