use termkit_core::command_definitions::{
    ArgumentDefinition, Command, CommandGroup, CommandNode, OptionDefinition,
};
use termkit_core::console::ClearUnit;
use termkit_core::context::CommandContext;
use termkit_core::dispatch::dispatch;
use termkit_core::style::StyledText;
use termkit_core::testing::FakeConsole;
use termkit_core::theme::ThemeDefinition;

/// A leaf matching the canonical declaration: argument `foo`, option `bar`
/// (short `b`, no default) and option `default` (short `d`, default
/// `"default"`). The runner echoes its context so tests can assert it.
fn test_command() -> Command {
    Command::new(|context: &CommandContext<'_>| {
        let foo = context.argument("foo")?;
        let bar = context.require_option("bar")?;
        let default = context.require_option("default")?;

        context.console().output(
            &StyledText::plain(format!("foo={foo} bar={bar} default={default}")),
            true,
        )
    })
    .argument(ArgumentDefinition::new("foo"))
    .option(OptionDefinition::new("bar").short('b'))
    .option(OptionDefinition::new("default").short('d').default("default"))
}

fn root() -> CommandNode {
    CommandGroup::new().command("test", test_command()).into()
}

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

#[test]
fn test_end_to_end_context_population() {
    let console = FakeConsole::new(Vec::<String>::new());

    dispatch(
        &root(),
        &console,
        tokens(&["test", "hello", "-b", "world", "-d", "def"]),
    )
    .unwrap();

    assert_eq!(console.output_lines(), ["foo=hello bar=world default=def"]);
}

#[test]
fn test_omitted_option_with_default_resolves_to_default() {
    let console = FakeConsole::new(Vec::<String>::new());

    dispatch(&root(), &console, tokens(&["test", "hello", "-b", "world"])).unwrap();

    assert_eq!(
        console.output_lines(),
        ["foo=hello bar=world default=default"]
    );
}

#[test]
fn test_require_option_without_value_or_default_fails() {
    let console = FakeConsole::new(Vec::<String>::new());

    let error = dispatch(&root(), &console, tokens(&["test", "hello"])).unwrap_err();

    assert_eq!(error.identifier(), "optionRequired");
}

#[test]
fn test_long_equals_and_short_option_forms_are_equivalent() {
    for form in [
        vec!["--bar", "world"],
        vec!["--bar=world"],
        vec!["-b", "world"],
        vec!["-b=world"],
    ] {
        let console = FakeConsole::new(Vec::<String>::new());
        let mut raw = vec!["test", "hello"];
        raw.extend(form.iter());

        dispatch(&root(), &console, tokens(&raw)).unwrap();

        assert_eq!(
            console.output_lines(),
            ["foo=hello bar=world default=default"],
            "form {form:?}"
        );
    }
}

#[test]
fn test_too_few_positional_tokens_fail_argument_required() {
    let console = FakeConsole::new(Vec::<String>::new());

    let error = dispatch(&root(), &console, tokens(&["test"])).unwrap_err();

    assert_eq!(error.identifier(), "argumentRequired");
}

#[test]
fn test_unconsumed_tokens_fail_excess_input() {
    let console = FakeConsole::new(Vec::<String>::new());

    let error = dispatch(
        &root(),
        &console,
        tokens(&["test", "hello", "-b", "world", "extra", "--bogus=1"]),
    )
    .unwrap_err();

    assert_eq!(error.identifier(), "excessInput");
    assert!(error.to_string().contains("extra"));
    assert!(error.to_string().contains("--bogus=1"));
}

#[test]
fn test_nested_groups_resolve_left_to_right_by_token_order() {
    let nested: CommandNode = CommandGroup::new()
        .command("sub", CommandGroup::new().command("test", test_command()))
        .into();
    let console = FakeConsole::new(Vec::<String>::new());

    dispatch(
        &nested,
        &console,
        tokens(&["sub", "test", "foo", "-b", "bar"]),
    )
    .unwrap();

    assert_eq!(console.output_lines(), ["foo=foo bar=bar default=default"]);
}

#[test]
fn test_demo_greet_uses_defaults() {
    let root = termkit_cli::commands::build_root(ThemeDefinition::default());
    let console = FakeConsole::new(Vec::<String>::new());

    dispatch(&root, &console, tokens(&["greet", "world"])).unwrap();

    assert_eq!(console.output_lines(), ["Hello, world!"]);
}

#[test]
fn test_demo_greet_overrides_defaults() {
    let root = termkit_cli::commands::build_root(ThemeDefinition::default());
    let console = FakeConsole::new(Vec::<String>::new());

    dispatch(
        &root,
        &console,
        tokens(&["greet", "world", "--greeting=Howdy", "-p", "?"]),
    )
    .unwrap();

    assert_eq!(console.output_lines(), ["Howdy, world?"]);
}

#[test]
fn test_demo_pick_reads_a_selection_and_restores_the_screen() {
    let root = termkit_cli::commands::build_root(ThemeDefinition::default());
    let console = FakeConsole::new(["not a number", "2"]);

    dispatch(&root, &console, tokens(&["pick"])).unwrap();

    let lines = console.output_lines();
    assert_eq!(lines.last().map(String::as_str), Some("You chose: green"));

    // One clear per invalid entry, then six items plus prompt and input line.
    assert_eq!(console.clear_count(ClearUnit::Line), 1 + 6 + 2);
}

#[test]
fn test_demo_root_renders_help_without_tokens() {
    let root = termkit_cli::commands::build_root(ThemeDefinition::default());
    let console = FakeConsole::new(Vec::<String>::new());

    dispatch(&root, &console, Vec::new()).unwrap();

    let rendered = console.output_lines().join("\n");
    assert!(rendered.contains("Termkit demonstration commands."));
    assert!(rendered.contains("greet"));
    assert!(rendered.contains("pick"));
    assert!(rendered.contains("theme"));
}
