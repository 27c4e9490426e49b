use std::io::{self, Write};

use tokio::io::AsyncBufRead;

use super::report;
use crate::io::Console;
use crate::state::AppState;

pub fn list_global<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let lines = state.session.list_global();
    if lines.is_empty() {
        return console.say("The global pool is empty.");
    }

    console.say("Global vocabulary:")?;
    lines.iter().try_for_each(|line| console.say(line))
}

pub fn list_global_by_category<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let groups = state.session.list_global_by_category();
    if groups.is_empty() {
        return console.say("The global pool is empty.");
    }

    for group in groups {
        console.say(format!("[{}]", group.category))?;
        for record in group.records {
            console.say(format!("  {} - {}", record.term, record.translation))?;
        }
    }
    Ok(())
}

/// Every copied word gets its own line
pub fn copy_global<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match state.session.copy_global_to(&state.user) {
        Ok(copied) if copied.is_empty() => console.say("Nothing new to copy."),
        Ok(copied) => {
            for term in &copied {
                console.say(format!("Copied '{}'.", term))?;
            }
            console.say(format!("{} words copied.", copied.len()))
        }
        Err(e) => report(console, &e),
    }
}
