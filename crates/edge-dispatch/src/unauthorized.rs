//! Terminal unauthorized response.

use edge_core::{Event, UnauthorizedRoute};

use crate::error::DispatchResult;

/// Write `route` as an authentication challenge and end the response.
pub fn unauthorized(event: &Event, route: &UnauthorizedRoute) -> DispatchResult<()> {
    let res = &event.res;
    res.set_status(route.status)?;
    res.set_status_message(route.status_description.as_str())?;
    for header in &route.headers {
        res.set_header(&header.key, &header.value)?;
    }
    res.end_with(route.body.as_bytes())?;

    tracing::debug!(request_id = %event.request_id, "unauthorized");
    Ok(())
}
