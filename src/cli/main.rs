/*!
A simple CLI interface to the library.

# Use

```sh
tableaux_cli [--option(=value)]* '<formula>'
```

## Options

- `--logic=NAME` selects the logic the formula is parsed and solved under (default `classical`).
- `--sign=SYM` seeds the formula under this sign instead of the logic's default.
- `--models` additionally prints every model found.
- `--format=text|json` selects the output format (default `text`).
- `--timeout=SECS` bounds the solve's wall-clock time.

Built with `--features log`, `RUST_LOG` controls tracing output via `env_logger`
(e.g. `RUST_LOG=tableaux=trace tableaux_cli ...`); without the feature, logging calls
compile away to nothing.

For full documentation of the supported options, see the source of [parse_args].

Exit codes: `0` satisfiable, `1` unsatisfiable, `2` usage or parse error, `3` a
resource bound was exceeded before the tableau saturated.
*/

use tableaux::config::Config;
use tableaux::context::Context;
use tableaux::reports::Status;

mod args;
use args::{parse_args, Format};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    formula: &'a str,
    logic: &'a str,
    satisfiable: bool,
    models: &'a [tableaux::tableau::model::Model],
    status: String,
}

/// Entrypoint to the CLI.
fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match parse_args(&raw_args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("usage error: {e}");
            std::process::exit(2);
        }
    };

    let mut ctx = Context::with_builtin_logics();

    let formula = match ctx.parse(&cli.logic, &cli.formula) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let mut config = Config::default();
    if let Some(seconds) = cli.timeout {
        config.time_limit = Some(std::time::Duration::from_secs_f64(seconds));
    }

    let result = match ctx.solve(&cli.logic, formula, cli.sign.as_deref(), &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    match cli.format {
        Format::Text => {
            println!("{}", if result.satisfiable { "SATISFIABLE" } else { "UNSATISFIABLE" });
            if result.status != Status::Ok {
                println!("status: {}", result.status);
            }
            if cli.models {
                for model in &result.models {
                    let rendering = model
                        .0
                        .iter()
                        .map(|(atom, value)| format!("{atom}={value}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("{rendering}");
                }
            }
        }
        Format::Json => {
            let output = JsonOutput {
                formula: &cli.formula,
                logic: &cli.logic,
                satisfiable: result.satisfiable,
                models: if cli.models { &result.models } else { &[] },
                status: result.status.to_string(),
            };
            println!("{}", serde_json::to_string(&output).expect("JSON output is always serialisable"));
        }
    }

    match result.status {
        Status::Timeout | Status::Exhausted => std::process::exit(3),
        Status::Ok => std::process::exit(if result.satisfiable { 0 } else { 1 }),
    }
}
