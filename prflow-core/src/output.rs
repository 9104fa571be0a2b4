//! Output file layout and persistence

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::debug;

use crate::Result;

const DOT_DIR: &str = "dot";
const PNG_DIR: &str = "png";
const SVG_DIR: &str = "svg";

/// Paths of the generated DOT file and its sibling image directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFiles {
    pub dot_file: PathBuf,
    pub png_dir: PathBuf,
    pub svg_dir: PathBuf,
}

impl GraphFiles {
    /// Layout under `root` for a graph generated on `date`
    pub fn for_date(root: &Path, date: NaiveDate) -> Self {
        let file_name = format!("pr_graph_{}.dot", date.format("%Y-%m-%d"));
        Self {
            dot_file: root.join(DOT_DIR).join(file_name),
            png_dir: root.join(PNG_DIR),
            svg_dir: root.join(SVG_DIR),
        }
    }

    /// DOT file name without directory or extension
    pub fn base_name(&self) -> String {
        self.dot_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// `dot` invocations that turn the graph into PNG and SVG images
    pub fn render_commands(&self) -> [String; 2] {
        let base = self.base_name();
        [
            format!(
                "dot -Tpng {} -o {}",
                self.dot_file.display(),
                self.png_dir.join(format!("{}.png", base)).display()
            ),
            format!(
                "dot -Tsvg {} -o {}",
                self.dot_file.display(),
                self.svg_dir.join(format!("{}.svg", base)).display()
            ),
        ]
    }

    /// Create the three directories and write `contents` to the DOT file
    ///
    /// An existing file for the same date is overwritten.
    pub fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.dot_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir_all(&self.png_dir)?;
        fs::create_dir_all(&self.svg_dir)?;

        let mut file = File::create(&self.dot_file)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        debug!(path = %self.dot_file.display(), bytes = contents.len(), "Wrote DOT file");
        Ok(())
    }
}

/// Lay out files under `root` for `date` and write the graph
pub fn write_graph(root: &Path, date: NaiveDate, contents: &str) -> Result<GraphFiles> {
    let files = GraphFiles::for_date(root, date);
    files.write(contents)?;
    Ok(files)
}
