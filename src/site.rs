//! A portfolio site directory on disk, as seen by the CLI and dev server.

use std::fs;
use std::path::{Path, PathBuf};

use crate::check::{check_films, check_projects, Diagnostic};
use crate::config::SiteConfig;
use crate::error::{FolioError, Result};
use crate::model::{FilmCatalog, ProjectCatalog};
use crate::navigation::Neighbors;

#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
    config: SiteConfig,
}

/// One line of `folio chain` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRow {
    pub neighbors: Neighbors,
    pub images: usize,
}

impl Site {
    pub fn open(root: impl Into<PathBuf>, config: SiteConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(FolioError::message(format!("'{}' is not a directory", root.display())));
        }
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn projects(&self) -> Result<ProjectCatalog> {
        let path = self.resolve(&self.config.projects_url);
        let source = read(&path)?;
        ProjectCatalog::from_json(&source).map_err(|e| e.in_document(path.display().to_string()))
    }

    /// The film catalog, or `None` for sites without a film page.
    pub fn films(&self) -> Result<Option<FilmCatalog>> {
        let path = self.resolve(&self.config.films_url);
        if !path.exists() {
            return Ok(None);
        }
        let source = read(&path)?;
        FilmCatalog::from_json(&source)
            .map(Some)
            .map_err(|e| e.in_document(path.display().to_string()))
    }

    /// Diagnostics for both catalogs.
    pub fn check(&self) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = check_projects(&self.projects()?);
        if let Some(films) = self.films()? {
            diagnostics.extend(check_films(&films));
        }
        Ok(diagnostics)
    }

    /// Every project with its looped neighbors, in catalog order.
    pub fn chain(&self) -> Result<Vec<ChainRow>> {
        let catalog = self.projects()?;
        Ok((0..catalog.len())
            .filter_map(|i| {
                Some(ChainRow {
                    neighbors: catalog.neighbors(i)?,
                    images: catalog.projects[i].images.len(),
                })
            })
            .collect())
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FolioError::from(e).in_document(path.display().to_string()))
}
