use tera::Tera;

use crate::blog::{assign_blog_metadata, build_listing_pages};
use crate::error::Result;
use crate::navigation::link_blog_posts;
use crate::related::further_readings;
use crate::store::{ContentRef, ContentSet, ContentStore};
use crate::summary::extract_summaries;
use crate::tags::TagIndex;
use crate::templating::register_strip_html_tags;
use crate::types::BlogConfig;

pub struct BuildContext {
    pub config: BlogConfig,
    pub store: ContentStore,
}

impl BuildContext {
    pub fn new(config: BlogConfig) -> Self {
        Self {
            config,
            store: ContentStore::new(),
        }
    }
}

/// Lifecycle hooks invoked by the host at fixed build phases. All hooks
/// default to no-ops so plugins implement only the phases they care about.
pub trait Plugin {
    fn settings_initialized(&mut self, context: &mut BuildContext) -> Result<()> {
        let _ = context;
        Ok(())
    }

    fn parser_initialized(&mut self, context: &mut BuildContext) -> Result<()> {
        let _ = context;
        Ok(())
    }

    fn templates_initialized(&mut self, context: &mut BuildContext, tera: &mut Tera) -> Result<()> {
        let _ = (context, tera);
        Ok(())
    }

    fn contents_parsed(&mut self, context: &mut BuildContext) -> Result<()> {
        let _ = context;
        Ok(())
    }
}

/// Assigns blog metadata and emits the paginated listing pages.
#[derive(Debug, Default)]
pub struct BlogPlugin;

impl Plugin for BlogPlugin {
    fn contents_parsed(&mut self, context: &mut BuildContext) -> Result<()> {
        assign_blog_metadata(&mut context.store);
        build_listing_pages(&mut context.store, &context.config);
        Ok(())
    }
}

/// Wires prev/next links between date-sorted posts per locale.
#[derive(Debug, Default)]
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn contents_parsed(&mut self, context: &mut BuildContext) -> Result<()> {
        link_blog_posts(&mut context.store, &context.config);
        Ok(())
    }
}

/// Builds the per-build tag index and answers related-content queries.
#[derive(Debug, Default)]
pub struct FurtherReadingsPlugin {
    index: TagIndex,
}

impl FurtherReadingsPlugin {
    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    pub fn into_index(self) -> TagIndex {
        self.index
    }

    pub fn select(&self, context: &BuildContext, subject: ContentRef) -> Result<ContentSet> {
        further_readings(&context.store, &self.index, subject, &context.config)
    }
}

impl Plugin for FurtherReadingsPlugin {
    fn contents_parsed(&mut self, context: &mut BuildContext) -> Result<()> {
        self.index = TagIndex::build(&context.store)?;
        Ok(())
    }
}

/// Extracts summaries for flagged contents and exposes the plain-text
/// helper to templates.
#[derive(Debug, Default)]
pub struct SummaryPlugin;

impl Plugin for SummaryPlugin {
    fn templates_initialized(&mut self, _context: &mut BuildContext, tera: &mut Tera) -> Result<()> {
        register_strip_html_tags(tera);
        Ok(())
    }

    fn contents_parsed(&mut self, context: &mut BuildContext) -> Result<()> {
        extract_summaries(&mut context.store);
        Ok(())
    }
}

/// Runs a fixed sequence of plugins through each build phase in order.
pub struct Pipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        Self { plugins }
    }

    /// Canonical pass order: blog metadata and pagination first, then
    /// navigation, the tag index, and summaries.
    pub fn with_default_plugins() -> Self {
        Self::new(vec![
            Box::new(BlogPlugin),
            Box::new(NavigationPlugin),
            Box::new(FurtherReadingsPlugin::default()),
            Box::new(SummaryPlugin),
        ])
    }

    pub fn settings_initialized(&mut self, context: &mut BuildContext) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.settings_initialized(context)?;
        }
        Ok(())
    }

    pub fn parser_initialized(&mut self, context: &mut BuildContext) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.parser_initialized(context)?;
        }
        Ok(())
    }

    pub fn templates_initialized(
        &mut self,
        context: &mut BuildContext,
        tera: &mut Tera,
    ) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.templates_initialized(context, tera)?;
        }
        Ok(())
    }

    pub fn contents_parsed(&mut self, context: &mut BuildContext) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.contents_parsed(context)?;
        }
        Ok(())
    }
}
