//! Static reference data: the vaccine catalog and community figures

use vax_core::entities::{find_vaccine, COMMUNITY_ARTICLES, OVERALL_COVERAGE};
use vax_core::DomainError;

use crate::dto::{ArticleResponse, CoverageResponse, VaccineResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every vaccine in schedule order
    pub fn list_vaccines(&self) -> Vec<VaccineResponse> {
        self.ctx.catalog().iter().map(VaccineResponse::from).collect()
    }

    pub fn get_vaccine(&self, id: &str) -> ServiceResult<VaccineResponse> {
        find_vaccine(id)
            .map(VaccineResponse::from)
            .ok_or_else(|| DomainError::VaccineNotFound(id.to_string()).into())
    }

    pub fn coverage(&self) -> CoverageResponse {
        CoverageResponse::from(OVERALL_COVERAGE)
    }

    pub fn articles(&self) -> &'static [ArticleResponse] {
        COMMUNITY_ARTICLES
    }
}
