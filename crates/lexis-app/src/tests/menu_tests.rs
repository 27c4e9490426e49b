//! Drive the menu loop with scripted input over a temporary data directory

use lexis_core::{Store, VocabularySession};
use tempfile::TempDir;

use crate::events::event_loop;
use crate::io::Console;
use crate::state::AppState;

async fn run_script(dir: &TempDir, user: &str, script: &str) -> String {
    let session = VocabularySession::open(Store::new(dir.path()));
    let mut state = AppState::new(session, user.to_string());
    let mut console = Console::new(script.as_bytes(), Vec::new());

    event_loop(&mut state, &mut console).await.unwrap();

    String::from_utf8(console.into_output()).unwrap()
}

#[tokio::test]
async fn add_list_and_practice() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "1\nperro\ndog\nanimals\n2\n3\nDOG\n12\n").await;

    assert!(output.contains("Hello, ana! You have 0 words, 0 learned."));
    assert!(output.contains("Word added."));
    assert!(output.contains("perro - dog (Not learned)"));
    assert!(output.contains("What is the translation of 'perro'? Correct!"));
    assert!(output.contains("---- Main menu (ana, 1/1 learned) ----"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn wrong_answer_shows_the_translation() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "1\ngato\ncat\nanimals\n3\ndog\n12\n").await;

    assert!(output.contains("Incorrect. The correct answer is 'cat'."));
    assert!(output.contains("(ana, 0/1 learned)"));
}

#[tokio::test]
async fn invalid_choices_reprompt() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "99\nabc\n12\n").await;

    assert_eq!(output.matches("Invalid option. Please choose 1-12.").count(), 2);
    assert_eq!(output.matches("---- Main menu").count(), 3);
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "1\nperro\n").await;

    assert!(output.ends_with("Goodbye!\n"));
    assert!(!output.contains("Word added."));
}

#[tokio::test]
async fn empty_lists_and_practice_have_messages() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "2\n3\n4\n5\n6\n7\n12\n").await;

    assert!(output.contains("No words yet."));
    assert!(output.contains("No words to practice."));
    assert!(output.contains("No learned words yet."));
    assert_eq!(output.matches("The global pool is empty.").count(), 2);
    assert!(output.contains("Nothing new to copy."));
}

#[tokio::test]
async fn duplicate_add_is_reported() {
    let dir = TempDir::new().unwrap();

    let output = run_script(
        &dir,
        "ana",
        "1\nperro\ndog\nanimals\n1\nPERRO\nhound\npets\n2\n12\n",
    )
    .await;

    assert!(output.contains("'PERRO' already exists in your vocabulary."));
    assert!(!output.contains("hound"));
}

#[tokio::test]
async fn missing_translation_without_provider_is_refused() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "1\nperro\n\n2\n12\n").await;

    assert!(output.contains("A translation is required."));
    assert!(output.contains("No words yet."));
}

#[tokio::test]
async fn switch_user_and_copy_from_pool() {
    let dir = TempDir::new().unwrap();

    let output = run_script(
        &dir,
        "ana",
        "1\nperro\ndog\nanimals\n1\nrojo\nred\ncolors\n11\n\nben\n7\n2\n12\n",
    )
    .await;

    assert!(output.contains("A user name is required."));
    assert!(output.contains("Hello, ben! You have 0 words, 0 learned."));
    assert!(output.contains("Copied 'perro'.\nCopied 'rojo'.\n2 words copied."));
    assert!(output.contains("(ben, 0/2 learned)"));
}

#[tokio::test]
async fn global_pool_grouped_by_category() {
    let dir = TempDir::new().unwrap();

    let output = run_script(
        &dir,
        "ana",
        "1\nrojo\nred\ncolors\n1\nperro\ndog\nanimals\n1\ngato\ncat\nanimals\n6\n12\n",
    )
    .await;

    assert!(output.contains("[animals]\n  gato - cat\n  perro - dog\n[colors]\n  rojo - red\n"));
}

#[tokio::test]
async fn remove_and_clear() {
    let dir = TempDir::new().unwrap();

    let output = run_script(
        &dir,
        "ana",
        "1\nperro\ndog\nanimals\n1\ngato\ncat\nanimals\n8\nPerro\n8\nperro\n9\nn\n9\ny\n2\n12\n",
    )
    .await;

    assert!(output.contains("Removed 'Perro'."));
    assert!(output.contains("'perro' is not in your vocabulary."));
    assert!(output.contains("Nothing was deleted."));
    assert!(output.contains("Your vocabulary is empty now."));
    assert!(output.contains("No words yet."));
}

#[tokio::test]
async fn translate_needs_a_provider() {
    let dir = TempDir::new().unwrap();

    let output = run_script(&dir, "ana", "10\n12\n").await;

    assert!(output.contains("Translation is disabled."));
}

#[tokio::test]
async fn words_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    run_script(&dir, "ana", "1\nperro\ndog\nanimals\n3\ndog\n12\n").await;

    let output = run_script(&dir, "ana", "2\n12\n").await;

    assert!(output.contains("Hello, ana! You have 1 words, 1 learned."));
    assert!(output.contains("perro - dog (Learned)"));
}
