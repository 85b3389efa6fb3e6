//! Terminal redirect response.

use edge_core::{Event, RedirectRoute};

use crate::error::DispatchResult;

/// Write `route` as a redirect and end the response with an empty body.
///
/// `Location` always carries `route.target`.
pub fn redirect(event: &Event, route: &RedirectRoute) -> DispatchResult<()> {
    let res = &event.res;
    for header in &route.headers {
        res.set_header(&header.key, &header.value)?;
    }
    res.set_header("Location", &route.target)?;
    res.set_status(route.status)?;
    if let Some(reason) = route.status.canonical_reason() {
        res.set_status_message(reason)?;
    }
    res.end()?;

    tracing::debug!(
        request_id = %event.request_id,
        status = route.status.as_u16(),
        target = %route.target,
        "redirected"
    );
    Ok(())
}
