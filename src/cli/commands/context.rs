use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{ConvertError, Conversion, SourceTree, convert, load_source},
};

/// Configuration resolved for one command run.
///
/// CLI flags are applied on top of the config file. Paths from the config file are
/// resolved against the directory holding it; paths given as flags are resolved
/// against the working directory.
pub struct BuildContext {
    pub config: Config,
    pub base_dir: PathBuf,
    pub cwd: PathBuf,
    pub verbose: bool,
}

impl BuildContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(&cwd, args)
    }

    pub fn from_dir(start_dir: &Path, args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        let base_dir = match loaded.path.as_deref().and_then(Path::parent) {
            Some(dir) => dir.to_path_buf(),
            None => start_dir.to_path_buf(),
        };

        match &loaded.path {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found, using defaults"),
        }

        let mut config = loaded.config;
        if let Some(source) = &args.source {
            config.source_file = start_dir.join(source).to_string_lossy().into_owned();
        }
        if let Some(language) = &args.default_language {
            config.settings.default_language = language.clone();
        }
        if args.enforce_supported_languages {
            config.settings.enforce_supported_languages = true;
        }
        config.validate()?;

        Ok(Self {
            config,
            base_dir,
            cwd: start_dir.to_path_buf(),
            verbose: args.verbose,
        })
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.config.source_file)
    }

    pub fn output_root(&self) -> PathBuf {
        self.resolve(&self.config.output_root)
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn load_source(&self) -> Result<SourceTree> {
        load_source(&self.source_path())
    }

    pub fn convert(&self, tree: &SourceTree) -> Result<Conversion, ConvertError> {
        convert(tree, &self.config.settings)
    }
}
