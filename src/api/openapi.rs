//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{MessageResponse, ShootRequest};
use crate::api::handlers::{edited_shoots, shoots, stats, system};
use crate::domain::{EditedShoot, MonthlyStats, Shoot, StatsScope};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification, served by Swagger UI when the
/// `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "shoot-tracker",
        description = "Photo-shoot booking tracker: pending and edited buckets with monthly earnings."
    ),
    paths(
        shoots::list_shoots,
        shoots::get_shoot,
        shoots::create_shoot,
        shoots::update_shoot,
        shoots::delete_shoot,
        shoots::move_to_edited,
        edited_shoots::list_edited,
        edited_shoots::get_edited,
        edited_shoots::update_edited,
        edited_shoots::move_back,
        edited_shoots::delete_edited,
        stats::monthly_stats,
        system::health_handler,
    ),
    components(schemas(
        Shoot,
        EditedShoot,
        ShootRequest,
        MessageResponse,
        MonthlyStats,
        StatsScope,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Shoots", description = "Pending bookings"),
        (name = "Edited Shoots", description = "Finalized bookings"),
        (name = "Statistics", description = "Earnings aggregation"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/shoots",
            "/api/shoots/{id}",
            "/api/shoots/{id}/move-to-edited",
            "/api/edited-shoots",
            "/api/edited-shoots/{id}",
            "/api/edited-shoots/{id}/move-back",
            "/api/stats/monthly",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
