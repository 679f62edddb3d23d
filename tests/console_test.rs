/// Console behavior through the public API, driven like a front end would
use redshift_site::render::RenderTarget;
use redshift_site::{Block, Console, ConsoleEvent, ConsoleState, Effect, HtmlRenderer, TextRenderer, update};

fn send(state: ConsoleState, event: ConsoleEvent) -> (ConsoleState, Vec<Effect>) {
    update(state, event)
}

fn typed(value: &str) -> ConsoleEvent {
    ConsoleEvent::Edit { value: value.to_string(), caret: value.chars().count() }
}

#[test]
fn test_each_command_adds_echo_and_one_response() {
    for command in ["help", "about", "skills", "contact", "motto", "echo hi", "whoami"] {
        let (state, _) = send(ConsoleState::new(), typed(command));
        let before = state.output().len();
        let (state, effects) = send(state, ConsoleEvent::Submit);

        assert_eq!(state.output().len(), before + 2, "command {:?}", command);
        assert_eq!(state.output()[before], Block::Prompt(command.to_string()));

        let appended = effects.iter().filter(|e| matches!(e, Effect::Append(_))).count();
        assert_eq!(appended, 2, "command {:?}", command);
        assert_eq!(effects.last(), Some(&Effect::ScrollToEnd));
    }
}

#[test]
fn test_submit_trims_and_records_history() {
    let (state, _) = send(ConsoleState::new(), typed("   help   "));
    let (state, _) = send(state, ConsoleEvent::Submit);

    assert_eq!(state.output().last(), Some(&Block::Help));
    assert_eq!(state.history().entries(), &["help"]);
    assert!(state.input().is_empty());
}

#[test]
fn test_command_names_are_case_sensitive() {
    let (state, _) = send(ConsoleState::new(), typed("HELP"));
    let (state, _) = send(state, ConsoleEvent::Submit);
    assert_eq!(state.output().last(), Some(&Block::NotFound("HELP".to_string())));
}

#[test]
fn test_history_stays_in_bounds() {
    let mut state = ConsoleState::new();
    for command in ["one", "two"] {
        state = send(state, typed(command)).0;
        state = send(state, ConsoleEvent::Submit).0;
    }

    for _ in 0..5 {
        state = send(state, ConsoleEvent::RecallPrevious).0;
        assert!(state.history().index() <= state.history().len());
    }
    assert_eq!(state.input().text(), "one");
    assert_eq!(state.input().caret(), 3);

    for _ in 0..5 {
        state = send(state, ConsoleEvent::RecallNext).0;
        assert!(state.history().index() <= state.history().len());
    }
    assert_eq!(state.input().text(), "");
}

#[test]
fn test_recall_on_empty_history_is_noop() {
    let (state, _) = send(ConsoleState::new(), typed("draft"));
    let (state, effects) = send(state, ConsoleEvent::RecallPrevious);

    assert!(effects.is_empty());
    assert_eq!(state.input().text(), "draft");
}

#[test]
fn test_text_console_transcript() {
    let mut console = Console::new(TextRenderer::new());
    console.run_line("echo first");
    console.run_line("contact");

    let text = console.target().to_text();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Welcome to Leo Cai's terminal."));
    assert_eq!(lines[1], "leo@redshift $ echo first");
    assert_eq!(lines[2], "first");
    assert_eq!(lines[3], "leo@redshift $ contact");
    assert!(text.contains("github"));
}

#[test]
fn test_clear_then_continue() {
    let mut console = Console::new(TextRenderer::new());
    console.run_line("skills");
    console.run_line("clear");
    assert!(console.target().lines().is_empty());
    assert!(console.state().output().is_empty());

    console.run_line("echo again");
    assert_eq!(console.target().lines(), ["leo@redshift $ echo again", "again"]);
}

#[test]
fn test_blog_navigates() {
    let mut console = Console::new(HtmlRenderer::new());
    console.run_line("blog");

    assert_eq!(console.target().navigation(), Some("/blog"));
    assert_eq!(console.state().output().last(), Some(&Block::Prompt("blog".to_string())));
}

#[test]
fn test_html_never_contains_raw_user_markup() {
    let mut console = Console::new(HtmlRenderer::new());
    console.run_line("echo <img src=x onerror=alert(1)>");
    console.run_line("<script>");

    let html = console.target().html();
    assert!(!html.contains("<img"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

/// Counts calls to check the driver mirrors effects one-to-one
#[derive(Default)]
struct CountingTarget {
    appended: usize,
    cleared: usize,
    scrolled: usize,
}

impl RenderTarget for CountingTarget {
    fn append(&mut self, _block: &Block) {
        self.appended += 1;
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }

    fn scroll_to_end(&mut self) {
        self.scrolled += 1;
    }
}

#[test]
fn test_custom_render_target() {
    let mut console = Console::new(CountingTarget::default());
    console.run_line("help");
    console.run_line("clear");
    console.handle(ConsoleEvent::Focus);

    let target = console.into_target();
    assert_eq!(target.appended, 1 + 2 + 1);
    assert_eq!(target.cleared, 1);
    assert_eq!(target.scrolled, 3);
}
