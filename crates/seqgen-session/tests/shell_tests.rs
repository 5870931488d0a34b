use seqgen_core::{FixedIndex, MappingId};
use seqgen_session::view::EMPTY_STATE;
use seqgen_session::{
    Command, CommandError, MemoryClipboard, Session, SessionConfig, SessionError, Shell,
};
use seqgen_test_utils::{first_index_session, scripted_session, UnavailableClipboard};
use std::time::Duration;

async fn run(shell: &mut Shell<MemoryClipboard, FixedIndex>, line: &str) -> String {
    let command: Command = line.parse().unwrap();
    shell.execute(command).await.unwrap().output
}

#[tokio::test]
async fn typed_session_end_to_end() {
    let mut shell = Shell::new(first_index_session(), MemoryClipboard::new());

    let listing = run(&mut shell, "list").await;
    assert!(listing.starts_with("4 Items\n"));

    let after_add = run(&mut shell, "add").await;
    assert!(after_add.starts_with("5 Items\n"));
    assert!(after_add.contains("#5  Src 5  →  Out "));

    run(&mut shell, "set 1 target ninety").await;
    run(&mut shell, "length 3").await;

    let generated = run(&mut shell, "generate").await;
    assert!(generated.contains("Sequence (3):\nninety, ninety, ninety\n"));
    assert!(generated.contains("3 (100.0%)"));

    let copied = run(&mut shell, "copy").await;
    assert_eq!(copied, "Copied! ninety, ninety, ninety\n");
    assert_eq!(shell.clipboard().contents(), Some("ninety, ninety, ninety"));

    let after_reset = run(&mut shell, "reset").await;
    assert!(after_reset.starts_with(EMPTY_STATE));
    assert!(after_reset.contains("4 Items\n"));
    assert!(shell.session().result().is_none());
}

#[tokio::test]
async fn removing_everything_makes_generate_a_noop() {
    let mut shell = Shell::new(first_index_session(), MemoryClipboard::new());
    for id in 1..=4 {
        shell
            .execute(Command::Remove { id: MappingId(id) })
            .await
            .unwrap();
    }

    let reply = shell.execute(Command::Generate).await.unwrap();
    assert!(reply.output.starts_with("No mappings"));
    assert!(shell.session().result().is_none());
}

#[tokio::test]
async fn copy_without_result_is_an_error() {
    let mut shell = Shell::new(first_index_session(), MemoryClipboard::new());

    let err = shell.execute(Command::Copy).await.unwrap_err();
    assert!(matches!(err, SessionError::NoResult));
}

#[tokio::test]
async fn failing_clipboard_keeps_shell_usable() {
    let mut shell = Shell::new(scripted_session(&[1]), UnavailableClipboard);
    shell.execute(Command::Generate).await.unwrap();

    let err = shell.execute(Command::Copy).await.unwrap_err();
    assert!(matches!(err, SessionError::Clipboard(_)));

    let shown = shell.execute(Command::Show).await.unwrap();
    assert!(shown.output.contains("10 (100.0%)"));
}

#[test]
fn overflowing_length_is_rejected_at_parse() {
    let err = "length 99999999999999999999999".parse::<Command>().unwrap_err();
    assert!(matches!(err, CommandError::InvalidLength(_)));
}

#[tokio::test]
async fn unallocatable_length_reports_error_and_shell_continues() {
    let mut shell = Shell::new(first_index_session(), MemoryClipboard::new());
    shell.execute(Command::Generate).await.unwrap();
    shell
        .execute(Command::Length { length: usize::MAX })
        .await
        .unwrap();

    let err = shell.execute(Command::Generate).await.unwrap_err();
    assert!(matches!(err, SessionError::Capacity(_)));
    assert_eq!(shell.session().result().unwrap().len(), 10);

    run(&mut shell, "length 3").await;
    let generated = run(&mut shell, "generate").await;
    assert!(generated.contains("Sequence (3):\n45, 45, 45\n"));
}

#[tokio::test]
async fn quit_stops_the_shell() {
    let mut shell = Shell::new(first_index_session(), MemoryClipboard::new());

    let reply = shell.execute(Command::Quit).await.unwrap();
    assert!(reply.quit);
    assert!(reply.output.is_empty());
}

#[tokio::test(start_paused = true)]
async fn generation_waits_for_configured_delay() {
    let config = SessionConfig::new().with_generation_delay(Duration::from_millis(400));
    let session = Session::with_source(config, FixedIndex::new(0));
    let mut shell = Shell::new(session, MemoryClipboard::new());

    let started = tokio::time::Instant::now();
    shell.execute(Command::Generate).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(400));
    assert_eq!(shell.session().result().unwrap().len(), 10);
}

#[tokio::test(start_paused = true)]
async fn zero_delay_returns_immediately() {
    let mut shell = Shell::new(first_index_session(), MemoryClipboard::new());

    let started = tokio::time::Instant::now();
    shell.execute(Command::Generate).await.unwrap();

    assert_eq!(started.elapsed(), Duration::ZERO);
}
