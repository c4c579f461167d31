/*!
Command-line argument parsing for the prover's CLI boundary.

One positional argument (the formula string) plus `--logic=NAME`, `--sign=SYM`,
`--models`, `--format=text|json`, and `--timeout=SECS`, following the same
hand-rolled `arg.split("=")` style the rest of the crate's configuration uses.
*/

/// The two supported output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Parsed command-line arguments.
pub struct CliArgs {
    pub formula: String,
    pub logic: String,
    pub sign: Option<String>,
    pub models: bool,
    pub format: Format,
    pub timeout: Option<f64>,
}

impl Default for CliArgs {
    fn default() -> Self {
        CliArgs {
            formula: String::new(),
            logic: "classical".to_string(),
            sign: None,
            models: false,
            format: Format::Text,
            timeout: None,
        }
    }
}

#[derive(Debug)]
pub struct ArgsError(pub String);

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses `args` (as returned by `std::env::args().skip(1)`) into a [CliArgs].
///
/// The first argument not recognised as a `--flag` is taken as the formula string;
/// a second such argument is a usage error.
pub fn parse_args(args: &[String]) -> Result<CliArgs, ArgsError> {
    let mut cli = CliArgs::default();
    let mut formula_seen = false;

    for arg in args {
        let mut split = arg.split('=');
        match split.next() {
            Some("--models") => cli.models = true,

            Some("--logic") => {
                let value = split
                    .next()
                    .ok_or_else(|| ArgsError("--logic requires a value, e.g. --logic=classical".to_string()))?;
                cli.logic = value.to_string();
            }

            Some("--sign") => {
                let value = split
                    .next()
                    .ok_or_else(|| ArgsError("--sign requires a value, e.g. --sign=T".to_string()))?;
                cli.sign = Some(value.to_string());
            }

            Some("--format") => {
                let value = split
                    .next()
                    .ok_or_else(|| ArgsError("--format requires a value: text or json".to_string()))?;
                cli.format = match value {
                    "text" => Format::Text,
                    "json" => Format::Json,
                    other => return Err(ArgsError(format!("unknown format '{other}', expected text or json"))),
                };
            }

            Some("--timeout") => {
                let value = split
                    .next()
                    .ok_or_else(|| ArgsError("--timeout requires a value in seconds".to_string()))?;
                let seconds: f64 = value
                    .parse()
                    .map_err(|_| ArgsError(format!("invalid --timeout value '{value}'")))?;
                cli.timeout = Some(seconds);
            }

            Some(flag) if flag.starts_with("--") => {
                return Err(ArgsError(format!("unrecognised option '{flag}'")));
            }

            Some(_) if !formula_seen => {
                cli.formula = arg.to_string();
                formula_seen = true;
            }

            _ => return Err(ArgsError(format!("unexpected extra argument '{arg}'"))),
        }
    }

    if !formula_seen {
        return Err(ArgsError("a formula string is required".to_string()));
    }

    Ok(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_classical_text() {
        let cli = parse_args(&["p & q".to_string()]).unwrap();
        assert_eq!(cli.formula, "p & q");
        assert_eq!(cli.logic, "classical");
        assert_eq!(cli.format, Format::Text);
        assert!(!cli.models);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse_args(&[
            "--logic=weak-kleene".to_string(),
            "--sign=U".to_string(),
            "--models".to_string(),
            "--format=json".to_string(),
            "--timeout=2.5".to_string(),
            "p | ~p".to_string(),
        ])
        .unwrap();

        assert_eq!(cli.logic, "weak-kleene");
        assert_eq!(cli.sign.as_deref(), Some("U"));
        assert!(cli.models);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.timeout, Some(2.5));
        assert_eq!(cli.formula, "p | ~p");
    }

    #[test]
    fn missing_formula_is_an_error() {
        assert!(parse_args(&["--logic=classical".to_string()]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(parse_args(&["--bogus".to_string(), "p".to_string()]).is_err());
    }
}
