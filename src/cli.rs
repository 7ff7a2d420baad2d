//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Analyze a WhatsApp chat export: message statistics, activity timelines,
/// busiest participants, word and emoji frequency.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt --stopwords stop_hinglish.txt
    chatlens chat.txt -s stopwords.txt --user Alice
    chatlens chat.txt -s stopwords.txt -o report.json --pretty")]
pub struct Args {
    /// Path to the exported chat transcript
    pub input: PathBuf,

    /// Path to the whitespace-separated stopword list
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: PathBuf,

    /// Restrict the analysis to one participant
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let args = Args::parse_from(["chatlens", "chat.txt", "--stopwords", "stop.txt"]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.user, "Overall");
        assert!(args.output.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::parse_from([
            "chatlens", "chat.txt", "-s", "stop.txt", "-u", "Alice", "-o", "out.json", "-p",
        ]);
        assert_eq!(args.user, "Alice");
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.pretty);
    }

    #[test]
    fn test_stopwords_is_required() {
        assert!(Args::try_parse_from(["chatlens", "chat.txt"]).is_err());
    }
}
