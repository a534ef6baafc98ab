//! Query parameter DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::StatsScope;

/// Query parameters for `GET /api/stats/monthly`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    /// Buckets to aggregate: `pending` (default), `edited` or `all`.
    #[serde(default)]
    pub scope: StatsScope,
}
