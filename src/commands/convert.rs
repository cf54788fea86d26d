use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use keycase::defaults::{load_config, KeycaseConfig};
use keycase::format::DocumentFormat;
use keycase::utils::io::read_input;
use keycase::{
    CamelCase, CollisionPolicy, ConvertOptions, Direction, KeyCaser, SequenceElements, SnakeCase,
};

use super::CmdResult;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SequencesArg {
    /// Convert only mapping elements of sequences
    Mappings,
    /// Recurse into every element, including nested sequences
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    Overwrite,
    Error,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input document (inline, @file, or - for stdin)
    pub input: String,

    /// Input and output document format
    #[arg(long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Options file (JSON); flags override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Which sequence elements are converted
    #[arg(long, value_enum)]
    pub sequences: Option<SequencesArg>,

    /// Maximum nesting depth before failing (1..=1024). JSON input is
    /// additionally capped at 128 levels by the parser.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Treat tagged date mappings ({"$date": ...}) as leaves
    #[arg(long, conflicts_with = "no_keep_dates")]
    pub keep_dates: bool,

    /// Rename keys inside tagged date mappings
    #[arg(long)]
    pub no_keep_dates: bool,

    /// Extra single-key date tag (repeatable)
    #[arg(long = "date-tag", value_name = "KEY")]
    pub date_tags: Vec<String>,

    /// Behavior when two keys convert to the same name
    #[arg(long, value_enum)]
    pub on_collision: Option<CollisionArg>,

    /// Print one diagnostic line to stderr after converting
    #[arg(long)]
    pub trace: bool,

    /// Print only the converted document instead of the JSON envelope
    #[arg(long)]
    pub raw: bool,
}

#[derive(Serialize)]
pub struct ConvertOutput {
    pub command: String,
    pub format: DocumentFormat,
    pub document: Value,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
        }
    }
}

impl From<SequencesArg> for SequenceElements {
    fn from(arg: SequencesArg) -> Self {
        match arg {
            SequencesArg::Mappings => SequenceElements::Mappings,
            SequencesArg::All => SequenceElements::All,
        }
    }
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionArg::Error => CollisionPolicy::Error,
        }
    }
}

impl ConvertArgs {
    /// Built-in defaults, then the config file, then flags.
    fn resolve_options(&self, direction: Direction) -> keycase::Result<ConvertOptions> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => KeycaseConfig::default(),
        };

        let mut options = config.options(direction)?;

        if let Some(sequences) = self.sequences {
            options.sequences = sequences.into();
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if self.keep_dates {
            options.keep_dates = true;
        }
        if self.no_keep_dates {
            options.keep_dates = false;
        }
        for tag in &self.date_tags {
            if !options.date_tags.contains(tag) {
                options.date_tags.push(tag.clone());
            }
        }
        if let Some(on_collision) = self.on_collision {
            options.on_collision = on_collision.into();
        }
        if self.trace {
            options.trace = true;
        }

        options.validate()?;
        Ok(options)
    }
}

fn convert(args: &ConvertArgs, direction: Direction) -> keycase::Result<Value> {
    let options = args.resolve_options(direction)?;
    let format = DocumentFormat::from(args.format);
    let input = format.parse(&read_input(&args.input, "input")?)?;

    match direction {
        Direction::Camel => KeyCaser::new(CamelCase, options).convert(&input),
        Direction::Snake => KeyCaser::new(SnakeCase, options).convert(&input),
    }
}

pub fn run(args: ConvertArgs, direction: Direction) -> CmdResult<ConvertOutput> {
    let document = convert(&args, direction)?;

    Ok((
        ConvertOutput {
            command: direction.as_str().to_string(),
            format: args.format.into(),
            document,
        },
        0,
    ))
}

pub fn run_raw(args: ConvertArgs, direction: Direction) -> CmdResult<String> {
    let document = convert(&args, direction)?;
    let rendered = DocumentFormat::from(args.format).render(&document)?;
    Ok((rendered, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConvertArgs,
    }

    fn parse(argv: &[&str]) -> ConvertArgs {
        let mut full = vec!["keycase"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    #[test]
    fn inline_json_converts_to_camel() {
        let args = parse(&[r#"{"user_id": 1, "tag_list": [{"item_id": 2}]}"#]);
        let (output, exit_code) = run(args, Direction::Camel).unwrap();

        assert_eq!(exit_code, 0);
        assert_eq!(output.command, "camel");
        assert_eq!(output.document, json!({ "userId": 1, "tagList": [{ "itemId": 2 }] }));
    }

    #[test]
    fn flags_override_direction_defaults() {
        let args = parse(&["{}", "--no-keep-dates", "--max-depth", "9", "--sequences", "all"]);
        let options = args.resolve_options(Direction::Snake).unwrap();

        assert!(!options.keep_dates);
        assert_eq!(options.max_depth, 9);
        assert_eq!(options.sequences, SequenceElements::All);
    }

    #[test]
    fn extra_date_tags_are_appended_once() {
        let args = parse(&["{}", "--date-tag", "$ts", "--date-tag", "$date"]);
        let options = args.resolve_options(Direction::Snake).unwrap();
        assert_eq!(options.date_tags, vec!["$date".to_string(), "$ts".to_string()]);
    }

    #[test]
    fn yaml_raw_output_is_yaml() {
        let args = parse(&["createdAt: 2024\nuserId: 3\n", "--format", "yaml", "--raw"]);
        let (rendered, _) = run_raw(args, Direction::Snake).unwrap();

        assert!(rendered.contains("created_at: 2024"));
        assert!(rendered.contains("user_id: 3"));
    }

    #[test]
    fn zero_max_depth_flag_is_rejected() {
        let args = parse(&["{}", "--max-depth", "0"]);
        let err = run(args, Direction::Camel).err().unwrap();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn max_depth_flag_above_ceiling_is_rejected() {
        let args = parse(&["{}", "--max-depth", "1000000"]);
        let err = run(args, Direction::Snake).err().unwrap();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn deep_json_input_reports_parse_limit() {
        let deep = format!("{}1{}", "{\"a\":".repeat(150), "}".repeat(150));
        let args = parse(&[deep.as_str(), "--max-depth", "1024"]);
        let err = run(args, Direction::Camel).err().unwrap();

        assert_eq!(err.code.as_str(), "validation.invalid_json");
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn collision_flag_surfaces_error() {
        let args = parse(&[r#"{"userId": 1, "user_id": 2}"#, "--on-collision", "error"]);
        let err = run(args, Direction::Camel).err().unwrap();
        assert_eq!(err.code.as_str(), "convert.key_collision");
    }
}
