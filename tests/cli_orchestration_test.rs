use commit_msg_hook::cli::orchestration::{resolve_match_mode, run_hook, HookArgs, HookOutcome};
use commit_msg_hook::MatchMode;

fn args(message: &str, match_mode: Option<MatchMode>) -> HookArgs {
    HookArgs {
        message: message.to_string(),
        match_mode,
        config_path: None,
    }
}

#[test]
fn test_spec_scenarios() {
    let cases = vec![
        ("feat: add login page", Some("feat"), 0),
        ("fix-123: patch bug", None, 1),
        ("WIP", None, 1),
        ("a1: x", Some("a1"), 0),
        ("", None, 1),
    ];

    for (message, title, exit_code) in cases {
        let outcome = run_hook(args(message, None)).unwrap();
        assert_eq!(
            outcome,
            HookOutcome {
                title: title.map(str::to_string),
                exit_code,
            },
            "unexpected outcome for {:?}",
            message
        );
    }
}

#[test]
fn test_body_depends_on_mode() {
    let message = "feat: summary\n\nBody text";

    let whole = run_hook(args(message, Some(MatchMode::WholeMessage))).unwrap();
    assert_eq!(whole.exit_code, 1);
    assert!(!whole.is_valid());

    let first_line = run_hook(args(message, Some(MatchMode::FirstLine))).unwrap();
    assert_eq!(first_line.exit_code, 0);
    assert_eq!(first_line.title, Some("feat".to_string()));
}

#[test]
fn test_exit_codes_are_binary() {
    let messages = ["ok: fine", "nope", ":", "x:", "\n", "feat: a\nb"];
    for message in messages {
        for mode in [MatchMode::FirstLine, MatchMode::WholeMessage] {
            let outcome = run_hook(args(message, Some(mode))).unwrap();
            assert!(outcome.exit_code == 0 || outcome.exit_code == 1);
        }
    }
}

#[test]
fn test_resolve_defaults_to_whole_message() {
    assert_eq!(
        resolve_match_mode(&args("feat: x", None)).unwrap(),
        MatchMode::WholeMessage
    );
}
