// crates/cli/src/config.rs
use crate::args::Args;
pub use count_text_engine::config::{Config, ConfigBuilder, Selection};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // No selection flag selects everything; -C alone behaves the same.
        let select = if args.lines || args.words || args.bytes {
            Selection { lines: args.lines, words: args.words, bytes: args.bytes }
        } else {
            Selection::all()
        };

        ConfigBuilder::default()
            .paths(args.paths)
            .select(select)
            .exclude_comments(args.exclude_comments)
            .build()
            .expect("Failed to build config")
    }
}
