use crate::catalog::Catalog;
use crate::dashboard;
use crate::error::DeckError;
use crate::generate;
use crate::tokens::TokenSource;
use crate::types::assessment::AssessmentSet;
use crate::types::catalog::{CatalogPath, Course, SkillPortfolio};
use crate::types::dashboard::DashboardSummary;
use crate::types::enums::{ContentKind, RequestSource};
use crate::types::envelope::Generated;
use crate::types::gaps::SkillGapReport;
use crate::types::io::{AssessmentRequest, CourseFilter, GapRequest, PathRequest, SearchRequest};
use crate::types::path::GeneratedPath;
use crate::types::search::SearchResults;
use sd_gen::TextModel;

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub source: RequestSource,
    pub correlation_id: Option<String>,
}

impl RequestContext {
    pub fn new(source: RequestSource, correlation_id: Option<String>) -> Self {
        Self {
            source,
            correlation_id,
        }
    }
}

/// Central handle over the text model, the static catalog, and the token
/// counters. Generation operations never fail; catalog lookups can.
pub struct SkillDeck<M: TextModel> {
    model: M,
    catalog: Catalog,
    tokens: TokenSource,
}

impl<M: TextModel> SkillDeck<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            catalog: Catalog::builtin(),
            tokens: TokenSource::new(),
        }
    }

    pub fn paths(&self) -> PathsApi<'_, M> {
        PathsApi { core: self }
    }

    pub fn skills(&self) -> SkillsApi<'_, M> {
        SkillsApi { core: self }
    }

    pub fn search(&self) -> SearchApi<'_, M> {
        SearchApi { core: self }
    }

    pub fn assessments(&self) -> AssessmentsApi<'_, M> {
        AssessmentsApi { core: self }
    }

    pub fn catalog(&self) -> CatalogApi<'_, M> {
        CatalogApi { core: self }
    }

    pub fn dashboard(&self) -> DashboardApi<'_, M> {
        DashboardApi { core: self }
    }
}

pub struct PathsApi<'a, M: TextModel> {
    core: &'a SkillDeck<M>,
}

impl<'a, M: TextModel> PathsApi<'a, M> {
    pub async fn generate(
        &self,
        ctx: &RequestContext,
        input: PathRequest,
    ) -> Generated<GeneratedPath> {
        let token = self.core.tokens.next(ContentKind::LearningPath);
        generate::run(&self.core.model, ctx, &input, token).await
    }
}

pub struct SkillsApi<'a, M: TextModel> {
    core: &'a SkillDeck<M>,
}

impl<'a, M: TextModel> SkillsApi<'a, M> {
    pub async fn gap_analysis(
        &self,
        ctx: &RequestContext,
        input: GapRequest,
    ) -> Generated<SkillGapReport> {
        let token = self.core.tokens.next(ContentKind::SkillGaps);
        generate::run(&self.core.model, ctx, &input, token).await
    }
}

pub struct SearchApi<'a, M: TextModel> {
    core: &'a SkillDeck<M>,
}

impl<'a, M: TextModel> SearchApi<'a, M> {
    pub async fn query(
        &self,
        ctx: &RequestContext,
        input: SearchRequest,
    ) -> Generated<SearchResults> {
        let token = self.core.tokens.next(ContentKind::Search);
        generate::run(&self.core.model, ctx, &input, token).await
    }
}

pub struct AssessmentsApi<'a, M: TextModel> {
    core: &'a SkillDeck<M>,
}

impl<'a, M: TextModel> AssessmentsApi<'a, M> {
    pub async fn generate(
        &self,
        ctx: &RequestContext,
        input: AssessmentRequest,
    ) -> Generated<AssessmentSet> {
        let token = self.core.tokens.next(ContentKind::Assessments);
        generate::run(&self.core.model, ctx, &input, token).await
    }
}

pub struct CatalogApi<'a, M: TextModel> {
    core: &'a SkillDeck<M>,
}

impl<'a, M: TextModel> CatalogApi<'a, M> {
    pub fn courses(&self, filter: &CourseFilter) -> Vec<Course> {
        self.core.catalog.courses(filter)
    }

    pub fn course(&self, id: &str) -> Result<Course, DeckError> {
        self.core.catalog.course(id).map_err(DeckError::from)
    }

    pub fn categories(&self) -> Vec<String> {
        self.core.catalog.categories()
    }

    pub fn paths(&self) -> Vec<CatalogPath> {
        self.core.catalog.paths()
    }

    pub fn path(&self, id: &str) -> Result<CatalogPath, DeckError> {
        self.core.catalog.path(id).map_err(DeckError::from)
    }

    pub fn skills(&self) -> SkillPortfolio {
        self.core.catalog.skills()
    }
}

pub struct DashboardApi<'a, M: TextModel> {
    core: &'a SkillDeck<M>,
}

impl<'a, M: TextModel> DashboardApi<'a, M> {
    pub fn summary(&self) -> DashboardSummary {
        dashboard::summarize(&self.core.catalog)
    }
}
