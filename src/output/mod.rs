//! Listing formatting and display
//!
//! This module renders directory listings in two shapes:
//! - Long format: one aligned metadata row per entry
//! - Short format: a grid of names sized to the output width
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Rendered line segments, name styles, padding
//! - `long` - Long-format rows (measure then print)
//! - `grid` - Short-format grid rows
//! - `renderer` - Chooses long or grid rendering per the options
//! - `streaming` - Streaming formatter for stdout/stderr
//! - `buffered` - Plain-text formatter collecting into a `String`

mod buffered;
mod config;
mod grid;
mod long;
mod renderer;
mod streaming;
pub(crate) mod utils;

pub use buffered::BufferedFormatter;
pub use config::OutputConfig;
pub use grid::{GridStyle, grid_cells, grid_lines};
pub use long::{LongFields, long_lines};
pub use renderer::ListingRenderer;
pub use streaming::StreamingFormatter;
pub use utils::{NameStyle, RenderedLine, Segment, pad_right, plain_text};

#[cfg(test)]
mod tests {
    use crate::ids::NumericIdResolver;
    use crate::listing::{ListingOptions, RecursiveWalker};
    use crate::test_utils::TestDir;

    use super::*;

    fn run(dir: &std::path::Path, options: &ListingOptions) -> BufferedFormatter {
        let renderer = ListingRenderer::new(options, OutputConfig::default())
            .with_resolver(Box::new(NumericIdResolver));
        let mut formatter = BufferedFormatter::with_renderer(renderer);
        RecursiveWalker::new(options)
            .walk(dir, &mut formatter)
            .unwrap();
        formatter
    }

    fn sample_dir() -> TestDir {
        let dir = TestDir::new();
        dir.add_file("b.txt", "b");
        dir.add_file("a.txt", "a");
        dir.add_file(".hidden", "h");
        dir
    }

    #[test]
    fn test_short_listing_sorted_without_hidden() {
        let dir = sample_dir();
        let formatter = run(dir.path(), &ListingOptions::default());
        assert_eq!(formatter.output(), "a.txt  b.txt\n");
    }

    #[test]
    fn test_short_listing_with_hidden() {
        let dir = sample_dir();
        let options = ListingOptions {
            show_hidden: true,
            ..Default::default()
        };
        let formatter = run(dir.path(), &options);
        assert_eq!(
            formatter.output(),
            ".        ..       .hidden  a.txt    b.txt\n"
        );
    }

    #[test]
    fn test_empty_directory_prints_nothing() {
        let dir = TestDir::new();
        let formatter = run(dir.path(), &ListingOptions::default());
        assert_eq!(formatter.output(), "");
        assert!(formatter.errors().is_empty());
    }

    #[test]
    fn test_long_listing_rows() {
        let dir = sample_dir();
        let options = ListingOptions {
            long_format: true,
            ..Default::default()
        };
        let formatter = run(dir.path(), &options);
        let lines: Vec<&str> = formatter.output().lines().collect();
        assert_eq!(lines.len(), 2);
        for (line, name) in lines.iter().zip(["a.txt", "b.txt"]) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(fields.len(), 9, "{}", line);
            assert!(fields[0].starts_with("-rw-"), "{}", line);
            assert_eq!(fields[1], "1");
            assert_eq!(fields[4], "1");
            assert_eq!(fields[8], name);
        }
    }

    #[test]
    fn test_recursive_headers() {
        let dir = TestDir::new();
        dir.add_file("root/sub/x.txt", "");
        dir.add_file("root/y.txt", "");
        let root = dir.path().join("root");

        let options = ListingOptions {
            recursive: true,
            ..Default::default()
        };
        let formatter = run(&root, &options);
        assert_eq!(
            formatter.output(),
            format!(
                "\n{root}:\nsub    y.txt\n\n{root}/sub:\nx.txt\n",
                root = root.display()
            )
        );
    }

    #[test]
    fn test_errors_kept_out_of_output() {
        let dir = TestDir::new();
        let missing = dir.path().join("missing");
        let formatter = run(&missing, &ListingOptions::default());
        assert_eq!(formatter.output(), "");
        assert_eq!(
            formatter.errors(),
            [format!("opendir({}): No such file or directory", missing.display())]
        );
    }
}
