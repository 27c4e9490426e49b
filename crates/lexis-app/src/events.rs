use std::io::{self, Write};

use lexis_core::VocabError;
use lexis_core::user::NO_WORDS_MESSAGE;
use tokio::io::AsyncBufRead;

use crate::io::Console;
use crate::menu::{self, MenuAction};
use crate::state::AppState;

mod add_word;
mod global;
mod practice;
mod translate;

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Main menu loop. Ends on Exit or end of input.
pub async fn event_loop<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    greet(state, console)?;

    loop {
        let (learned, total) = state.progress();
        console.say(menu::render(&state.user, learned, total))?;

        let Some(choice) = console.ask("Choose an option: ").await? else {
            break;
        };

        let Some(action) = MenuAction::parse(&choice) else {
            console.say(format!(
                "Invalid option. Please choose 1-{}.",
                MenuAction::ALL.len()
            ))?;
            continue;
        };

        tracing::debug!("Menu action {:?} for {}", action, state.user);
        if handle_action(action, state, console).await? == Flow::Exit {
            break;
        }
    }

    console.say("Goodbye!")?;
    Ok(())
}

async fn handle_action<R, W>(
    action: MenuAction,
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match action {
        MenuAction::AddWord => add_word::handle_add_word(state, console).await,
        MenuAction::ListWords => {
            list_words(state, console)?;
            Ok(Flow::Continue)
        }
        MenuAction::Practice => practice::handle_practice(state, console).await,
        MenuAction::ListLearned => {
            list_learned(state, console)?;
            Ok(Flow::Continue)
        }
        MenuAction::ListGlobal => {
            global::list_global(state, console)?;
            Ok(Flow::Continue)
        }
        MenuAction::ListGlobalByCategory => {
            global::list_global_by_category(state, console)?;
            Ok(Flow::Continue)
        }
        MenuAction::CopyGlobal => {
            global::copy_global(state, console)?;
            Ok(Flow::Continue)
        }
        MenuAction::RemoveWord => remove_word(state, console).await,
        MenuAction::ClearWords => clear_words(state, console).await,
        MenuAction::Translate => translate::handle_translate(state, console).await,
        MenuAction::SwitchUser => switch_user(state, console).await,
        MenuAction::Exit => Ok(Flow::Exit),
    }
}

/// Ask until a non-empty name is given. `None` at end of input.
pub async fn ask_user_name<R, W>(console: &mut Console<R, W>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let Some(name) = console.ask("User name: ").await? else {
            return Ok(None);
        };

        if !name.is_empty() {
            return Ok(Some(name));
        }
        console.say("A user name is required.")?;
    }
}

/// Turn a core failure into a line for the user
pub(crate) fn report<R, W>(console: &mut Console<R, W>, err: &VocabError) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let message = match err {
        VocabError::DuplicateEntry { term } => {
            format!("'{}' already exists in your vocabulary.", term)
        }
        VocabError::NotFound { term } => format!("'{}' is not in your vocabulary.", term),
        VocabError::Persistence(e) => format!("Done, but it could not be saved: {}", e),
        VocabError::UnknownUser(name) => format!("Unknown user '{}'.", name),
    };
    console.say(message)
}

fn greet<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (learned, total) = state.progress();
    console.say(format!(
        "Hello, {}! You have {} words, {} learned.",
        state.user, total, learned
    ))
}

fn list_words<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match state.session.list_words(&state.user) {
        Ok(lines) if lines.is_empty() => console.say(NO_WORDS_MESSAGE),
        Ok(lines) => {
            console.say("Vocabulary:")?;
            lines.iter().try_for_each(|line| console.say(line))
        }
        Err(e) => report(console, &e),
    }
}

fn list_learned<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match state.session.learned_words(&state.user) {
        Ok(lines) if lines.is_empty() => console.say("No learned words yet."),
        Ok(lines) => lines.iter().try_for_each(|line| console.say(line)),
        Err(e) => report(console, &e),
    }
}

async fn remove_word<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(term) = console.ask("Word to remove: ").await? else {
        return Ok(Flow::Exit);
    };

    match state.session.remove_word(&state.user, &term) {
        Ok(()) => console.say(format!("Removed '{}'.", term))?,
        Err(e) => report(console, &e)?,
    }
    Ok(Flow::Continue)
}

async fn clear_words<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(confirmed) = console.confirm("Delete all your words?", false).await? else {
        return Ok(Flow::Exit);
    };

    if !confirmed {
        console.say("Nothing was deleted.")?;
        return Ok(Flow::Continue);
    }

    match state.session.clear(&state.user) {
        Ok(()) => console.say("Your vocabulary is empty now.")?,
        Err(e) => report(console, &e)?,
    }
    Ok(Flow::Continue)
}

async fn switch_user<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(user) = ask_user_name(console).await? else {
        return Ok(Flow::Exit);
    };

    state.switch_user(user);
    greet(state, console)?;
    Ok(Flow::Continue)
}
