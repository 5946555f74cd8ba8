//! End-to-end REPL sessions through the public API.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::io::Cursor;

use leoc::{EchoMode, Repl, ReplConfig, ReplExit};
use pretty_assertions::assert_eq;

fn run(input: &str, config: ReplConfig) -> (ReplExit, String, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let exit = Repl::with_config(Cursor::new(input), &mut out, &mut err, config)
        .run()
        .unwrap();
    (
        exit,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn typical_session() {
    let input = "\
let total = 0;
for (n in [1, 2, 3]) {
    total += n * 2 ** n;
}
total $ 1
if (total > 10
) print(total)
exit
";
    let (exit, out, err) = run(input, ReplConfig::default());
    assert_eq!(exit, ReplExit::Directive);
    assert_eq!(
        out,
        "\
> let total = 0;
> ... ... for (n in [1, 2, 3]) {
    total += n * 2 ** n;
}
> > ... if (total > 10) print(total);
> "
    );
    assert!(err.contains("syntax error at line 1, column 7"), "{err}");
    assert!(err.contains("unknown character"), "{err}");
}

#[test]
fn debug_echo_shows_precedence() {
    let config = ReplConfig {
        echo: EchoMode::Debug,
        ..ReplConfig::default()
    };
    let (_, out, _) = run("1 + 2 * 3\n", config);
    let add = out.find("op: Add").unwrap();
    let mul = out.find("op: Mul").unwrap();
    assert!(add < mul, "{out}");
}
