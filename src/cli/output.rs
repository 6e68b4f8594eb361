use crate::Convention;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub case: Convention,
    pub output: String,
}

/// Everything produced for one input string
#[derive(Debug, Clone, Serialize)]
pub struct InputResult {
    pub input: String,
    pub conversions: Vec<Conversion>,
}

pub fn print_results(
    results: &[InputResult],
    detailed: bool,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text if detailed => render_table(results, colored_output),
        OutputFormat::Text => render_plain(results),
        OutputFormat::Json => serde_json::to_string_pretty(results)?,
    };

    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

/// One converted string per line, ready for piping
pub fn render_plain(results: &[InputResult]) -> String {
    results
        .iter()
        .flat_map(|r| r.conversions.iter().map(|c| c.output.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every conversion of every input, grouped under the input
pub fn render_table(results: &[InputResult], colored_output: bool) -> String {
    let mut blocks = Vec::with_capacity(results.len());

    for result in results {
        let mut lines = Vec::with_capacity(result.conversions.len() + 1);
        if colored_output {
            lines.push(result.input.bold().underline().to_string());
        } else {
            lines.push(result.input.clone());
        }

        for conversion in &result.conversions {
            let name = format!("{:<22}", conversion.case.name());
            if colored_output {
                lines.push(format!(
                    "  {} {} {}",
                    name.cyan(),
                    "→".dimmed(),
                    conversion.output.green()
                ));
            } else {
                lines.push(format!("  {} → {}", name, conversion.output));
            }
        }

        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<InputResult> {
        vec![
            InputResult {
                input: "maxID".to_string(),
                conversions: vec![
                    Conversion {
                        case: Convention::Snake,
                        output: "max_id".to_string(),
                    },
                    Conversion {
                        case: Convention::Camel,
                        output: "maxID".to_string(),
                    },
                ],
            },
            InputResult {
                input: "ENV_VAR".to_string(),
                conversions: vec![Conversion {
                    case: Convention::Snake,
                    output: "env_var".to_string(),
                }],
            },
        ]
    }

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain(&sample()), "max_id\nmaxID\nenv_var");
        assert_eq!(render_plain(&[]), "");
    }

    #[test]
    fn test_render_table_uncolored() {
        let table = render_table(&sample(), false);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "maxID");
        assert_eq!(lines[1], format!("  {:<22} → max_id", "snake_case"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "ENV_VAR");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json[0]["input"], "maxID");
        assert_eq!(json[0]["conversions"][1]["case"], "camelCase");
        assert_eq!(json[1]["conversions"][0]["output"], "env_var");
    }
}
