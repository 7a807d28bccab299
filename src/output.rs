//! Writes a rendered site to the output directory.

use std::path::{
    Path,
    PathBuf,
};

use futures::stream::{
    StreamExt,
    TryStreamExt,
};

use crate::assets::catalog::ImageCatalog;
use crate::pages::RenderedPage;
use crate::types::Language;

/// Errors writing the site.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// An output directory could not be created.
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page could not be written.
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset could not be copied.
    #[error("Failed to copy {from:?} to {to:?}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counts of what a build wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Pages written, including the root redirect.
    pub pages: usize,
    /// Assets copied.
    pub assets: usize,
}

/// One file to produce.
#[derive(Debug)]
enum Job {
    /// Write `contents` to `path`.
    Write { path: PathBuf, contents: String },
    /// Copy the file at `from` to `to`.
    Copy { from: PathBuf, to: PathBuf },
}

/// Writes pages and assets with bounded concurrency.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    /// Root of the written site.
    out_dir: PathBuf,
    /// Maximum number of jobs in flight.
    concurrency: usize,
}

impl SiteWriter {
    /// Writer into `out_dir`; `concurrency` is raised to at least 1.
    #[must_use]
    pub fn new(out_dir: PathBuf, concurrency: usize) -> Self {
        Self { out_dir, concurrency: concurrency.max(1) }
    }

    /// Root of the written site.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes every page to `<out>/<lang>/...`, the root redirect to
    /// `redirect_to`, and a copy of every cataloged asset.
    ///
    /// # Errors
    /// The first failed directory creation, write or copy.
    pub async fn write_site(
        &self,
        pages: &[RenderedPage],
        assets: &ImageCatalog,
        redirect_to: Language,
    ) -> Result<BuildSummary, OutputError> {
        let mut jobs: Vec<Job> = pages
            .iter()
            .map(|page| Job::Write {
                path: self.out_dir.join(page.route.output_path(page.language)),
                contents: page.html.clone(),
            })
            .collect();
        jobs.push(Job::Write {
            path: self.out_dir.join("index.html"),
            contents: redirect_page(redirect_to),
        });
        jobs.extend(assets.iter().map(|asset| Job::Copy {
            from: asset.source_path.clone(),
            to: self.out_dir.join(&asset.logical_path),
        }));

        tracing::debug!(
            jobs = jobs.len(),
            concurrency = self.concurrency,
            out_dir = %self.out_dir.display(),
            "Writing site"
        );

        let summary = futures::stream::iter(jobs)
            .map(run_job)
            .buffer_unordered(self.concurrency)
            .try_fold(BuildSummary::default(), |mut summary, job| async move {
                match job {
                    JobKind::Page => summary.pages += 1,
                    JobKind::Asset => summary.assets += 1,
                }
                Ok(summary)
            })
            .await?;

        tracing::info!(pages = summary.pages, assets = summary.assets, "Site written");
        Ok(summary)
    }
}

/// What a finished job produced.
#[derive(Debug, Clone, Copy)]
enum JobKind {
    /// A written page.
    Page,
    /// A copied asset.
    Asset,
}

/// Runs one job, creating its parent directory first.
async fn run_job(job: Job) -> Result<JobKind, OutputError> {
    match job {
        Job::Write { path, contents } => {
            ensure_parent(&path).await?;
            tokio::fs::write(&path, contents)
                .await
                .map_err(|source| OutputError::Write { path, source })?;
            Ok(JobKind::Page)
        }
        Job::Copy { from, to } => {
            ensure_parent(&to).await?;
            tokio::fs::copy(&from, &to).await.map_err(|source| OutputError::Copy {
                from,
                to,
                source,
            })?;
            Ok(JobKind::Asset)
        }
    }
}

/// Creates the parent directory of `path`.
async fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|source| OutputError::CreateDir { path: parent.to_path_buf(), source })
}

/// Root `index.html` sending visitors to the home page of `language`.
fn redirect_page(language: Language) -> String {
    let target = crate::pages::Route::Home.href(language);
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
         <meta http-equiv=\"refresh\" content=\"0; url={target}\">\
         <link rel=\"canonical\" href=\"{target}\"></head>\
         <body><a href=\"{target}\">{target}</a></body></html>\n"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::pages::{
        PageStatus,
        Route,
    };

    fn page(route: Route, language: Language, html: &str) -> RenderedPage {
        RenderedPage {
            route,
            language,
            title: String::new(),
            html: html.to_string(),
            status: PageStatus::Ok,
        }
    }

    #[tokio::test]
    async fn test_write_site() {
        let site = TempDir::new().unwrap();
        fs::create_dir_all(site.path().join("assets")).unwrap();
        fs::write(site.path().join("assets/logo.svg"), "<svg/>").unwrap();
        let catalog = ImageCatalog::from_paths(site.path(), ["assets/logo.svg"]);
        let out = TempDir::new().unwrap();
        let writer = SiteWriter::new(out.path().to_path_buf(), 2);

        let pages = [
            page(Route::Home, Language::Es, "<p>inicio</p>"),
            page(Route::About, Language::En, "<p>about</p>"),
            page(Route::NotFound, Language::En, "<p>404</p>"),
        ];
        let summary = writer.write_site(&pages, &catalog, Language::En).await.unwrap();

        assert_that!(summary, eq(BuildSummary { pages: 4, assets: 1 }));
        assert_that!(
            fs::read_to_string(out.path().join("es/index.html")).unwrap(),
            eq("<p>inicio</p>")
        );
        assert_that!(
            fs::read_to_string(out.path().join("en/about/index.html")).unwrap(),
            eq("<p>about</p>")
        );
        assert_that!(out.path().join("en/404.html").exists(), eq(true));
        assert_that!(
            fs::read_to_string(out.path().join("index.html")).unwrap(),
            contains_substring("url=/en/")
        );
        assert_that!(
            fs::read_to_string(out.path().join("assets/logo.svg")).unwrap(),
            eq("<svg/>")
        );
    }

    #[tokio::test]
    async fn test_missing_asset_source_is_an_error() {
        let catalog = ImageCatalog::from_paths(Path::new("/nonexistent-site"), ["assets/gone.png"]);
        let out = TempDir::new().unwrap();
        let writer = SiteWriter::new(out.path().to_path_buf(), 1);

        let result = writer.write_site(&[], &catalog, Language::Es).await;

        assert_that!(matches!(result, Err(OutputError::Copy { .. })), eq(true));
    }
}
