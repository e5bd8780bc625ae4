//! The `split` command.

use std::path::{Path, PathBuf};

use tracing::info;

use super::basic::{load_dataset, save_dataset};
use crate::{config::SplitConfig, Dataset};

/// Split settings given on the command line.
///
/// Flags win over the fields of the `--config` file, which win over
/// [`SplitConfig::default`].
#[derive(Debug, Default)]
pub(crate) struct SplitOverrides {
    pub(crate) config: Option<PathBuf>,
    pub(crate) test_ratio: Option<f64>,
    pub(crate) seed: Option<u64>,
    pub(crate) id_column: Option<String>,
}

impl SplitOverrides {
    pub(crate) fn resolve(self) -> crate::Result<SplitConfig> {
        let mut config = match &self.config {
            Some(path) => SplitConfig::from_json_file(path)?,
            None => SplitConfig::default(),
        };

        if let Some(test_ratio) = self.test_ratio {
            config.test_ratio = test_ratio;
        }
        if let Some(id_column) = self.id_column {
            config = SplitConfig::by_id(config.test_ratio, id_column);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        Ok(config)
    }
}

/// Split `input` and write both halves in the formats their extensions name.
pub(crate) fn cmd_split(
    input: &Path,
    train_output: &Path,
    test_output: &Path,
    config: &SplitConfig,
) -> crate::Result<()> {
    let dataset = load_dataset(input)?;
    let split = config.split(&dataset)?;

    save_dataset(split.train(), train_output)?;
    save_dataset(split.test(), test_output)?;

    info!(
        input = %input.display(),
        rows = dataset.len(),
        train_rows = split.train().len(),
        test_rows = split.test().len(),
        "split written"
    );
    println!(
        "Split {} ({} rows): {} train -> {}, {} test -> {}",
        input.display(),
        dataset.len(),
        split.train().len(),
        train_output.display(),
        split.test().len(),
        test_output.display()
    );

    Ok(())
}
